//! Positions and trading records evaluated by criteria.

use crate::domain::num::TradeNum;

/// One side of a trade: the bar it happened on and the fill price.
#[derive(Debug, Clone)]
pub struct TradePoint<N: TradeNum> {
    pub index: usize,
    pub price: N,
}

/// One trade against a bar series: an entry and an optional exit.
/// Positive quantity is long, negative is short.
#[derive(Debug, Clone)]
pub struct Position<N: TradeNum> {
    pub quantity: i64,
    pub entry: TradePoint<N>,
    pub exit: Option<TradePoint<N>>,
}

impl<N: TradeNum> Position<N> {
    pub fn is_long(&self) -> bool {
        self.quantity > 0
    }

    pub fn is_short(&self) -> bool {
        self.quantity < 0
    }

    pub fn is_closed(&self) -> bool {
        self.exit.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.exit.is_none()
    }
}

/// An ordered sequence of positions representing one strategy run.
#[derive(Debug, Clone, Default)]
pub struct TradingRecord<N: TradeNum> {
    pub positions: Vec<Position<N>>,
}

impl<N: TradeNum> TradingRecord<N> {
    pub fn new(positions: Vec<Position<N>>) -> Self {
        Self { positions }
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
