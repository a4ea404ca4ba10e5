//! Numeric abstraction for criterion arithmetic.
//!
//! Criteria never touch a primitive float directly: every operation goes
//! through [`TradeNum`], so the precision/representation trade-off
//! (floating-point vs arbitrary-precision decimal) is a policy chosen by
//! the caller, not baked into criterion logic.

use std::fmt;
use std::ops::{Add, Mul};

use rust_decimal::{Decimal, MathematicalOps};

use crate::domain::error::NumError;

/// Numeric behaviour required by the criteria.
///
/// Equality is the representation's own exact equality, never an epsilon
/// comparison. Division and exponentiation are fallible because their
/// domain depends on the representation.
pub trait TradeNum:
    Copy
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Add<Output = Self>
    + Mul<Output = Self>
    + Send
    + Sync
    + 'static
{
    /// Convert a plain integer into this representation.
    fn from_i64(n: i64) -> Self;

    fn zero() -> Self {
        Self::from_i64(0)
    }

    fn one() -> Self {
        Self::from_i64(1)
    }

    /// Division; errors when the divisor equality-compares to zero.
    fn try_div(self, rhs: Self) -> Result<Self, NumError>;

    /// Real-valued exponentiation; errors when the result is undefined
    /// under this representation.
    fn try_pow(self, exponent: Self) -> Result<Self, NumError>;
}

impl TradeNum for f64 {
    fn from_i64(n: i64) -> Self {
        n as f64
    }

    fn try_div(self, rhs: Self) -> Result<Self, NumError> {
        if rhs == 0.0 {
            return Err(NumError::DivisionByZero);
        }
        Ok(self / rhs)
    }

    fn try_pow(self, exponent: Self) -> Result<Self, NumError> {
        let result = self.powf(exponent);
        if result.is_nan() {
            return Err(NumError::UndefinedPower {
                base: self.to_string(),
                exponent: exponent.to_string(),
            });
        }
        Ok(result)
    }
}

impl TradeNum for Decimal {
    fn from_i64(n: i64) -> Self {
        Decimal::from(n)
    }

    fn try_div(self, rhs: Self) -> Result<Self, NumError> {
        self.checked_div(rhs).ok_or(NumError::DivisionByZero)
    }

    fn try_pow(self, exponent: Self) -> Result<Self, NumError> {
        self.checked_powd(exponent)
            .ok_or_else(|| NumError::UndefinedPower {
                base: self.to_string(),
                exponent: exponent.to_string(),
            })
    }
}
