//! Calculator API trait
//!
//! Contract trait for the calculator service. Both shells hold an
//! `Arc<dyn CalculatorClientV1>` and never evaluate anything themselves.

use crate::errors::CalculatorError;
use crate::models::{Operation, Value};

/// Calculator API trait
///
/// Evaluation is synchronous and stateless: the same operation and operands
/// always produce the same value or the same error variant.
pub trait CalculatorClientV1: Send + Sync {
    /// Evaluate `operation` over `operands`.
    ///
    /// # Errors
    /// Returns [`CalculatorError::ArityMismatch`] when `operands.len()` differs
    /// from the operation's arity, and the guard-named variant when an operand
    /// is outside the operation's domain.
    fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<Value, CalculatorError>;

    /// The operations this client can evaluate, in menu order.
    fn operations(&self) -> &'static [Operation] {
        &Operation::ALL
    }
}
