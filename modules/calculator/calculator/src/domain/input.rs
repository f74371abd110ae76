//! Raw operand parsing shared by both shells.

use calculator_sdk::CalculatorError;

/// Read a finite number from user input.
///
/// # Errors
/// `InvalidInput` when the text is not a number or is `inf`/`NaN`.
pub fn parse_operand(raw: &str) -> Result<f64, CalculatorError> {
    let trimmed = raw.trim();
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(CalculatorError::invalid_input(trimmed)),
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn accepts_plain_and_scientific_numbers() {
        assert_eq!(parse_operand(" 16 "), Ok(16.0));
        assert_eq!(parse_operand("-2.5"), Ok(-2.5));
        assert_eq!(parse_operand("1e3"), Ok(1000.0));
    }

    #[test]
    fn rejects_text_empty_and_non_finite() {
        for raw in ["abc", "", "   ", "inf", "NaN", "1,5"] {
            assert_eq!(
                parse_operand(raw),
                Err(CalculatorError::invalid_input(raw.trim())),
                "{raw:?}"
            );
        }
    }
}
