//! The operation table.
//!
//! One static entry per [`Operation`], each pairing a domain guard with a
//! formula. Every evaluation in the crate goes through [`OperationSpec::apply`].

use calculator_sdk::{Arity, CalculatorError, Operation, Value};
use num_bigint::BigUint;

type UnaryGuard = fn(f64) -> Result<(), CalculatorError>;
type BinaryGuard = fn(f64, f64) -> Result<(), CalculatorError>;

/// Guard + formula pair, tagged by arity.
#[derive(Clone, Copy)]
pub enum Kernel {
    Unary {
        guard: UnaryGuard,
        formula: fn(f64) -> Value,
    },
    Binary {
        guard: BinaryGuard,
        formula: fn(f64, f64) -> Value,
    },
}

/// Table entry describing one operation.
#[derive(Clone, Copy)]
pub struct OperationSpec {
    pub operation: Operation,
    pub kernel: Kernel,
}

/// Indexed by `Operation::menu_number() - 1`.
pub static OPERATIONS: [OperationSpec; 11] = [
    binary(Operation::Add, unguarded2, |a, b| Value::Real(a + b)),
    binary(Operation::Subtract, unguarded2, |a, b| Value::Real(a - b)),
    binary(Operation::Multiply, unguarded2, |a, b| Value::Real(a * b)),
    binary(Operation::Divide, nonzero_divisor, quotient),
    // Negative base with a fractional exponent yields NaN, as `powf` does.
    binary(Operation::Power, unguarded2, |a, b| Value::Real(a.powf(b))),
    unary(Operation::Sqrt, non_negative, |a| Value::Real(a.sqrt())),
    unary(Operation::Sin, unguarded, |deg| degrees(deg, f64::sin)),
    unary(Operation::Cos, unguarded, |deg| degrees(deg, f64::cos)),
    unary(Operation::Tan, unguarded, |deg| degrees(deg, f64::tan)),
    unary(Operation::Ln, positive, |a| Value::Real(a.ln())),
    unary(Operation::Factorial, whole_non_negative, |a| {
        Value::Integer(factorial(whole_to_u64(a)))
    }),
];

const fn unary(
    operation: Operation,
    guard: UnaryGuard,
    formula: fn(f64) -> Value,
) -> OperationSpec {
    OperationSpec {
        operation,
        kernel: Kernel::Unary { guard, formula },
    }
}

const fn binary(
    operation: Operation,
    guard: BinaryGuard,
    formula: fn(f64, f64) -> Value,
) -> OperationSpec {
    OperationSpec {
        operation,
        kernel: Kernel::Binary { guard, formula },
    }
}

fn quotient(a: f64, b: f64) -> Value {
    Value::Real(a / b)
}

/// Trig formulas take degrees.
fn degrees(deg: f64, f: fn(f64) -> f64) -> Value {
    Value::Real(f(deg.to_radians()))
}

/// Table entry for `operation`.
#[must_use]
pub fn spec(operation: Operation) -> &'static OperationSpec {
    &OPERATIONS[usize::from(operation.menu_number()) - 1]
}

impl OperationSpec {
    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.kernel {
            Kernel::Unary { .. } => Arity::Unary,
            Kernel::Binary { .. } => Arity::Binary,
        }
    }

    /// Check the operand count and the guard, then run the formula.
    ///
    /// # Errors
    /// `ArityMismatch` on a wrong operand count, otherwise whatever the guard rejects.
    pub fn apply(&self, operands: &[f64]) -> Result<Value, CalculatorError> {
        match (self.kernel, operands) {
            (Kernel::Unary { guard, formula }, &[a]) => {
                guard(a)?;
                Ok(formula(a))
            }
            (Kernel::Binary { guard, formula }, &[a, b]) => {
                guard(a, b)?;
                Ok(formula(a, b))
            }
            _ => Err(CalculatorError::ArityMismatch {
                operation: self.operation,
                expected: self.arity().count(),
                actual: operands.len(),
            }),
        }
    }
}

#[allow(clippy::unnecessary_wraps)] // table slot shape
fn unguarded(_: f64) -> Result<(), CalculatorError> {
    Ok(())
}

#[allow(clippy::unnecessary_wraps)] // table slot shape
fn unguarded2(_: f64, _: f64) -> Result<(), CalculatorError> {
    Ok(())
}

fn nonzero_divisor(_: f64, divisor: f64) -> Result<(), CalculatorError> {
    if divisor == 0.0 {
        return Err(CalculatorError::DivisionByZero);
    }
    Ok(())
}

fn non_negative(a: f64) -> Result<(), CalculatorError> {
    if a < 0.0 {
        return Err(CalculatorError::NegativeSquareRoot);
    }
    Ok(())
}

fn positive(a: f64) -> Result<(), CalculatorError> {
    if a <= 0.0 {
        return Err(CalculatorError::NonPositiveLogarithm);
    }
    Ok(())
}

fn whole_non_negative(a: f64) -> Result<(), CalculatorError> {
    if a < 0.0 {
        return Err(CalculatorError::NegativeFactorial);
    }
    if a.fract() != 0.0 {
        return Err(CalculatorError::NonIntegerFactorial);
    }
    Ok(())
}

/// Only called after `whole_non_negative` accepted `a`; values beyond
/// `u64::MAX` saturate.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn whole_to_u64(a: f64) -> u64 {
    a as u64
}

/// `n!` with `0! = 1`.
#[must_use]
pub fn factorial(n: u64) -> BigUint {
    (1..=n).map(BigUint::from).product()
}
