//! Analysis criteria for ranking strategies.
//!
//! A criterion reduces a position or a whole trading record to a single
//! number, and defines which of two such numbers ranks higher. Criteria
//! are pure: they never mutate the series, the position, or the record,
//! and identical inputs give identical results.

pub mod average_return_per_bar;
pub mod gross_return;
pub mod num_bars;

pub use average_return_per_bar::AverageReturnPerBar;
pub use gross_return::GrossReturn;
pub use num_bars::NumBars;

use crate::domain::error::CriterionError;
use crate::domain::num::TradeNum;
use crate::domain::ohlcv::BarSeries;
use crate::domain::position::{Position, TradingRecord};

pub trait Criterion<N: TradeNum> {
    /// Criterion value of a single position.
    fn evaluate_position(
        &self,
        series: &BarSeries<N>,
        position: &Position<N>,
    ) -> Result<N, CriterionError>;

    /// Criterion value of a whole trading record.
    fn evaluate_record(
        &self,
        series: &BarSeries<N>,
        record: &TradingRecord<N>,
    ) -> Result<N, CriterionError>;

    /// Whether value `a` ranks strictly better than `b` under this
    /// criterion. Exact equality means neither is better.
    fn better_than(&self, a: N, b: N) -> bool;
}

/// Bounds-check a position against the series it is evaluated on.
pub(crate) fn validate_position<N: TradeNum>(
    series: &BarSeries<N>,
    position: &Position<N>,
) -> Result<(), CriterionError> {
    let bars = series.len();
    if position.entry.index >= bars {
        return Err(CriterionError::IndexOutOfRange {
            index: position.entry.index,
            bars,
        });
    }
    if let Some(exit) = &position.exit {
        if exit.index >= bars {
            return Err(CriterionError::IndexOutOfRange {
                index: exit.index,
                bars,
            });
        }
        if exit.index < position.entry.index {
            return Err(CriterionError::ExitBeforeEntry {
                entry: position.entry.index,
                exit: exit.index,
            });
        }
    }
    Ok(())
}
