//! OHLCV bar series, generic over the numeric representation.

use chrono::NaiveDate;

use crate::domain::num::TradeNum;

#[derive(Debug, Clone)]
pub struct OhlcvBar<N: TradeNum> {
    pub date: NaiveDate,
    pub open: N,
    pub high: N,
    pub low: N,
    pub close: N,
    pub volume: i64,
}

/// An ordered, time-indexed sequence of price bars. Read-only to the
/// criteria evaluated against it.
#[derive(Debug, Clone)]
pub struct BarSeries<N: TradeNum> {
    pub code: String,
    pub exchange: String,
    pub bars: Vec<OhlcvBar<N>>,
}

impl<N: TradeNum> BarSeries<N> {
    pub fn new(code: &str, exchange: &str, bars: Vec<OhlcvBar<N>>) -> Self {
        Self {
            code: code.to_string(),
            exchange: exchange.to_string(),
            bars,
        }
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bar(&self, index: usize) -> Option<&OhlcvBar<N>> {
        self.bars.get(index)
    }

    /// Convert a plain integer into this series' numeric representation.
    pub fn num_of(&self, n: i64) -> N {
        N::from_i64(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_bar(date: &str, close: f64) -> OhlcvBar<f64> {
        OhlcvBar {
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            open: close,
            high: close,
            low: close,
            close,
            volume: 1000,
        }
    }

    #[test]
    fn series_access() {
        let series = BarSeries::new(
            "BHP",
            "ASX",
            vec![make_bar("2024-01-01", 100.0), make_bar("2024-01-02", 105.0)],
        );
        assert_eq!(series.len(), 2);
        assert!(!series.is_empty());
        assert!((series.bar(1).unwrap().close - 105.0).abs() < f64::EPSILON);
        assert!(series.bar(2).is_none());
    }

    #[test]
    fn num_of_uses_series_representation() {
        let series: BarSeries<f64> = BarSeries::new("BHP", "ASX", vec![]);
        assert!((series.num_of(0) - 0.0).abs() < f64::EPSILON);
        assert!((series.num_of(1) - 1.0).abs() < f64::EPSILON);
    }
}
