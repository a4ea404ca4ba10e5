//! Domain error types.

/// Arithmetic failure inside a numeric representation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("power undefined for base {base} and exponent {exponent}")]
    UndefinedPower { base: String, exponent: String },
}

/// Top-level error type for criterion evaluation.
///
/// Criteria perform no local recovery: numeric and subject errors surface
/// unchanged to the caller, which should treat them as fatal to that single
/// evaluation rather than to a whole ranking run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CriterionError {
    #[error(transparent)]
    Num(#[from] NumError),

    #[error("position index {index} out of range: series has {bars} bars")]
    IndexOutOfRange { index: usize, bars: usize },

    #[error("exit index {exit} precedes entry index {entry}")]
    ExitBeforeEntry { entry: usize, exit: usize },
}
