//! One-line result rendering shared by the text menu and the web form.

use calculator_sdk::{Operation, Value, format_real};

/// Render `operation(operands) = value` the way the shells print it,
/// e.g. `16 ÷ 4 = 4`, `√16 = 4`, `sin(30°) = 0.5`, `5! = 120`.
#[must_use]
pub fn render_expression(operation: Operation, operands: &[f64], value: &Value) -> String {
    format!("{} = {value}", render_call(operation, operands))
}

/// Left-hand side of [`render_expression`].
#[must_use]
pub fn render_call(operation: Operation, operands: &[f64]) -> String {
    match (operation, operands) {
        (
            Operation::Add | Operation::Subtract | Operation::Multiply | Operation::Divide,
            &[a, b],
        ) => {
            let symbol = operation.symbol();
            format!("{} {symbol} {}", format_real(a), format_real(b))
        }
        (Operation::Power, &[base, exponent]) => {
            let base = parenthesize_negative(base);
            format!("{base}^{}", parenthesize_negative(exponent))
        }
        (Operation::Sqrt, &[a]) => format!("\u{221a}{}", parenthesize_negative(a)),
        (Operation::Sin | Operation::Cos | Operation::Tan, &[degrees]) => {
            format!("{}({}\u{b0})", operation.id(), format_real(degrees))
        }
        (Operation::Ln, &[a]) => format!("ln({})", format_real(a)),
        (Operation::Factorial, &[n]) => format!("{}!", parenthesize_negative(n)),
        _ => {
            let args: Vec<String> = operands.iter().copied().map(format_real).collect();
            format!("{}({})", operation.id(), args.join(", "))
        }
    }
}

fn parenthesize_negative(x: f64) -> String {
    if x.is_sign_negative() && x != 0.0 {
        format!("({})", format_real(x))
    } else {
        format_real(x)
    }
}
