//! barcrit — analysis criteria for ranking trading strategies.
//!
//! A criterion reduces a position (or a whole trading record) on a bar
//! series to a single number, plus an ordering that says which of two such
//! numbers ranks higher. All arithmetic is generic over [`domain::num::TradeNum`],
//! so callers pick floating-point or decimal precision without touching
//! criterion logic.

pub mod domain;
