//! Average return per bar criterion.
//!
//! The gross return raised to the power of 1 divided by the number of
//! elapsed bars: the geometric-mean per-bar multiplicative return. A
//! zero-bar subject has no elapsed time to average over, so it evaluates
//! to the neutral multiplier 1 and its gross return is never computed.

use crate::domain::criterion::{Criterion, GrossReturn, NumBars};
use crate::domain::error::CriterionError;
use crate::domain::num::TradeNum;
use crate::domain::ohlcv::BarSeries;
use crate::domain::position::{Position, TradingRecord};

pub struct AverageReturnPerBar;

/// Shared formula for both subject forms, so the zero-bar guard and the
/// power computation are written once. `gross` is deferred behind a
/// closure: the guard must short-circuit before it runs.
fn per_bar<N, F>(series: &BarSeries<N>, bars: N, gross: F) -> Result<N, CriterionError>
where
    N: TradeNum,
    F: FnOnce() -> Result<N, CriterionError>,
{
    if bars == series.num_of(0) {
        return Ok(series.num_of(1));
    }
    let exponent = series.num_of(1).try_div(bars)?;
    Ok(gross()?.try_pow(exponent)?)
}

impl<N: TradeNum> Criterion<N> for AverageReturnPerBar {
    fn evaluate_position(
        &self,
        series: &BarSeries<N>,
        position: &Position<N>,
    ) -> Result<N, CriterionError> {
        let bars = NumBars.evaluate_position(series, position)?;
        per_bar(series, bars, || {
            GrossReturn.evaluate_position(series, position)
        })
    }

    fn evaluate_record(
        &self,
        series: &BarSeries<N>,
        record: &TradingRecord<N>,
    ) -> Result<N, CriterionError> {
        let bars = NumBars.evaluate_record(series, record)?;
        per_bar(series, bars, || GrossReturn.evaluate_record(series, record))
    }

    /// The higher the per-bar return, the better.
    fn better_than(&self, a: N, b: N) -> bool {
        a > b
    }
}
