//! Calculator failure taxonomy.

use crate::models::Operation;

/// Every way an evaluation can fail.
///
/// The first five variants are domain-guard violations raised by the
/// operation set itself. `InvalidInput` is raised by the shells when raw text
/// cannot be read as a finite number; `UnknownOperation` and `ArityMismatch`
/// guard the identifier lookup and operand count.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum CalculatorError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("square root of negative number")]
    NegativeSquareRoot,

    #[error("logarithm undefined for non-positive input")]
    NonPositiveLogarithm,

    #[error("factorial undefined for negative numbers")]
    NegativeFactorial,

    #[error("factorial requires an integer input")]
    NonIntegerFactorial,

    /// Factorial operand above the configured ceiling.
    #[error("factorial input exceeds the supported maximum of {limit}")]
    FactorialTooLarge { limit: u64 },

    #[error("invalid number: '{input}'")]
    InvalidInput { input: String },

    #[error("unknown operation: '{id}'")]
    UnknownOperation { id: String },

    #[error("{operation} expects {expected} operand(s), got {actual}")]
    ArityMismatch {
        operation: Operation,
        expected: usize,
        actual: usize,
    },
}

impl CalculatorError {
    pub fn invalid_input(input: impl Into<String>) -> Self {
        Self::InvalidInput {
            input: input.into(),
        }
    }

    pub fn unknown_operation(id: impl Into<String>) -> Self {
        Self::UnknownOperation { id: id.into() }
    }

    /// Stable machine-readable code.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "CALC_DIVISION_BY_ZERO",
            Self::NegativeSquareRoot => "CALC_NEGATIVE_SQUARE_ROOT",
            Self::NonPositiveLogarithm => "CALC_NON_POSITIVE_LOGARITHM",
            Self::NegativeFactorial => "CALC_NEGATIVE_FACTORIAL",
            Self::NonIntegerFactorial => "CALC_NON_INTEGER_FACTORIAL",
            Self::FactorialTooLarge { .. } => "CALC_FACTORIAL_TOO_LARGE",
            Self::InvalidInput { .. } => "CALC_INVALID_INPUT",
            Self::UnknownOperation { .. } => "CALC_UNKNOWN_OPERATION",
            Self::ArityMismatch { .. } => "CALC_ARITY_MISMATCH",
        }
    }

    /// `true` for the operand-domain guards of the operation set.
    #[must_use]
    pub const fn is_guard_violation(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero
                | Self::NegativeSquareRoot
                | Self::NonPositiveLogarithm
                | Self::NegativeFactorial
                | Self::NonIntegerFactorial
        )
    }
}
