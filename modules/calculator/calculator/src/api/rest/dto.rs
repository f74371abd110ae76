//! REST DTOs for calculator module
//!
//! These types are transport-specific (serde + utoipa for REST and `OpenAPI`).

use calculator_sdk::{Operation, Value};
use num_traits::ToPrimitive;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::render_expression;

/// Request to evaluate one operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct EvaluateRequest {
    /// Operation identifier, e.g. `sqrt`
    #[schema(example = "sqrt")]
    pub operation: String,
    /// Operands in order; one for unary operations, two for binary ones
    #[schema(example = json!([16.0]))]
    pub operands: Vec<f64>,
}

/// Successful evaluation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EvaluateResponse {
    pub operation: String,
    pub operands: Vec<f64>,
    /// Exact decimal rendering of the result (every digit for factorials)
    #[schema(example = "4")]
    pub result: String,
    /// The result as a float, omitted when it is not finite
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// One-line rendering, e.g. `√16 = 4`
    pub expression: String,
}

impl EvaluateResponse {
    #[must_use]
    pub fn new(operation: Operation, operands: Vec<f64>, value: &Value) -> Self {
        let expression = render_expression(operation, &operands, value);
        let approx = match value {
            Value::Real(x) => Some(*x),
            Value::Integer(n) => n.to_f64(),
        };
        Self {
            operation: operation.id().to_owned(),
            operands,
            result: value.to_string(),
            value: approx.filter(|x| x.is_finite()),
            expression,
        }
    }
}

/// Public descriptor of one operation.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OperationDto {
    #[schema(example = "add")]
    pub id: String,
    #[schema(example = "Addition")]
    pub name: String,
    /// Empty for the trigonometric functions
    pub symbol: String,
    /// Number of operands (1 or 2)
    pub arity: usize,
    pub operand_labels: Vec<String>,
    pub description: String,
}

impl From<Operation> for OperationDto {
    fn from(op: Operation) -> Self {
        Self {
            id: op.id().to_owned(),
            name: op.display_name().to_owned(),
            symbol: op.symbol().to_owned(),
            arity: op.arity().count(),
            operand_labels: op.operand_labels().iter().map(|&l| l.to_owned()).collect(),
            description: op.description().to_owned(),
        }
    }
}
