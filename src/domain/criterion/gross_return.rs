//! Cumulative gross return criterion.
//!
//! The multiplicative return of a position (1.20 = +20%): exit over entry
//! price for a long, entry over exit for a short. A record's value is the
//! product over its positions. Open positions and empty records contribute
//! the identity 1 (no gain).

use crate::domain::criterion::{Criterion, validate_position};
use crate::domain::error::CriterionError;
use crate::domain::num::TradeNum;
use crate::domain::ohlcv::BarSeries;
use crate::domain::position::{Position, TradingRecord};

pub struct GrossReturn;

impl<N: TradeNum> Criterion<N> for GrossReturn {
    fn evaluate_position(
        &self,
        series: &BarSeries<N>,
        position: &Position<N>,
    ) -> Result<N, CriterionError> {
        validate_position(series, position)?;
        let Some(exit) = &position.exit else {
            return Ok(series.num_of(1));
        };
        let ratio = if position.is_short() {
            position.entry.price.try_div(exit.price)?
        } else {
            exit.price.try_div(position.entry.price)?
        };
        Ok(ratio)
    }

    fn evaluate_record(
        &self,
        series: &BarSeries<N>,
        record: &TradingRecord<N>,
    ) -> Result<N, CriterionError> {
        let mut product = series.num_of(1);
        for position in &record.positions {
            product = product * self.evaluate_position(series, position)?;
        }
        Ok(product)
    }

    /// The higher the gross return, the better.
    fn better_than(&self, a: N, b: N) -> bool {
        a > b
    }
}
