//! Core domain types and logic.

pub mod criterion;
pub mod error;
pub mod num;
pub mod ohlcv;
pub mod position;
