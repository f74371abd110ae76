//! Domain service for calculator
//!
//! The single evaluation path used by every shell.

use calculator_sdk::{CalculatorClientV1, CalculatorError, Operation, Value};
use tracing::{debug, instrument};

use crate::config::CalculatorConfig;
use crate::domain::operations;

/// Domain service that evaluates calculator operations.
///
/// Stateless apart from its immutable configuration; share it behind an
/// `Arc<dyn CalculatorClientV1>`.
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: CalculatorConfig,
}

impl Service {
    #[must_use]
    pub fn new(config: CalculatorConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    fn check_factorial_ceiling(&self, operands: &[f64]) -> Result<(), CalculatorError> {
        let limit = self.config.max_factorial_operand;
        match operands {
            [n] if n.fract() == 0.0 && *n > f64::from(limit) => {
                let limit = u64::from(limit);
                Err(CalculatorError::FactorialTooLarge { limit })
            }
            _ => Ok(()),
        }
    }
}

impl CalculatorClientV1 for Service {
    #[instrument(level = "debug", skip(self, operation), fields(operation = %operation))]
    fn evaluate(&self, operation: Operation, operands: &[f64]) -> Result<Value, CalculatorError> {
        if operation == Operation::Factorial {
            self.check_factorial_ceiling(operands)?;
        }

        let result = operations::spec(operation).apply(operands);
        match &result {
            Ok(value) => debug!(%value, "evaluated"),
            Err(e) => debug!(code = e.code(), error = %e, "evaluation rejected"),
        }
        result
    }
}
