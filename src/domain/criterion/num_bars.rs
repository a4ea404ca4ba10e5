//! Elapsed-bar-count criterion.
//!
//! Bars elapsed between a position's entry and exit: entry and exit on the
//! same bar count as zero elapsed bars, and an open position counts as
//! zero. A record's value is the sum over its positions.

use crate::domain::criterion::{Criterion, validate_position};
use crate::domain::error::CriterionError;
use crate::domain::num::TradeNum;
use crate::domain::ohlcv::BarSeries;
use crate::domain::position::{Position, TradingRecord};

pub struct NumBars;

impl<N: TradeNum> Criterion<N> for NumBars {
    fn evaluate_position(
        &self,
        series: &BarSeries<N>,
        position: &Position<N>,
    ) -> Result<N, CriterionError> {
        validate_position(series, position)?;
        let elapsed = match &position.exit {
            Some(exit) => exit.index - position.entry.index,
            None => 0,
        };
        Ok(series.num_of(elapsed as i64))
    }

    fn evaluate_record(
        &self,
        series: &BarSeries<N>,
        record: &TradingRecord<N>,
    ) -> Result<N, CriterionError> {
        let mut total = series.num_of(0);
        for position in &record.positions {
            total = total + self.evaluate_position(series, position)?;
        }
        Ok(total)
    }

    /// The fewer bars a result took, the better.
    fn better_than(&self, a: N, b: N) -> bool {
        a < b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ohlcv::OhlcvBar;
    use crate::domain::position::TradePoint;
    use chrono::NaiveDate;

    fn make_series(bars: usize) -> BarSeries<f64> {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let bars = (0..bars)
            .map(|i| OhlcvBar {
                date: start + chrono::Duration::days(i as i64),
                open: 100.0,
                high: 100.0,
                low: 100.0,
                close: 100.0,
                volume: 1000,
            })
            .collect();
        BarSeries::new("BHP", "ASX", bars)
    }

    fn make_position(entry_index: usize, exit_index: Option<usize>) -> Position<f64> {
        Position {
            quantity: 100,
            entry: TradePoint {
                index: entry_index,
                price: 100.0,
            },
            exit: exit_index.map(|index| TradePoint {
                index,
                price: 110.0,
            }),
        }
    }

    #[test]
    fn closed_position_elapsed_bars() {
        let series = make_series(10);
        let position = make_position(2, Some(6));
        let bars = NumBars.evaluate_position(&series, &position).unwrap();
        assert!((bars - 4.0).abs() < f64::EPSILON);
    }

    #[test]
    fn same_bar_entry_and_exit_is_zero() {
        let series = make_series(10);
        let position = make_position(3, Some(3));
        let bars = NumBars.evaluate_position(&series, &position).unwrap();
        assert!((bars - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn open_position_is_zero() {
        let series = make_series(10);
        let position = make_position(3, None);
        let bars = NumBars.evaluate_position(&series, &position).unwrap();
        assert!((bars - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn record_sums_positions() {
        let series = make_series(12);
        let record = TradingRecord::new(vec![
            make_position(0, Some(4)),
            make_position(5, Some(11)),
        ]);
        let bars = NumBars.evaluate_record(&series, &record).unwrap();
        assert!((bars - 10.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_record_is_zero() {
        let series = make_series(5);
        let bars = NumBars
            .evaluate_record(&series, &TradingRecord::default())
            .unwrap();
        assert!((bars - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn exit_before_entry_errors() {
        let series = make_series(10);
        let position = make_position(6, Some(2));
        let err = NumBars.evaluate_position(&series, &position).unwrap_err();
        assert_eq!(err, CriterionError::ExitBeforeEntry { entry: 6, exit: 2 });
    }

    #[test]
    fn exit_index_out_of_range_errors() {
        let series = make_series(5);
        let position = make_position(2, Some(8));
        let err = NumBars.evaluate_position(&series, &position).unwrap_err();
        assert_eq!(err, CriterionError::IndexOutOfRange { index: 8, bars: 5 });
    }

    #[test]
    fn fewer_is_better() {
        assert!(NumBars.better_than(3.0, 5.0));
        assert!(!NumBars.better_than(5.0, 3.0));
        assert!(!NumBars.better_than(5.0, 5.0));
    }
}
