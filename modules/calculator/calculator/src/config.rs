use serde::{Deserialize, Serialize};

/// Configuration for the `calculator` module (`modules.calculator`).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalculatorConfig {
    /// Largest accepted factorial operand. Factorial results are exact, so
    /// this bounds the time and memory of a single evaluation.
    #[serde(default = "default_max_factorial_operand")]
    pub max_factorial_operand: u32,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            max_factorial_operand: default_max_factorial_operand(),
        }
    }
}

fn default_max_factorial_operand() -> u32 {
    10_000
}
