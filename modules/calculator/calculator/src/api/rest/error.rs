use calckit_errors::{ErrDef, Problem};
use calculator_sdk::CalculatorError;

/// Static Problem catalog of the calculator JSON API.
pub mod catalog {
    use calckit_errors::ErrDef;

    const fn unprocessable(
        title: &'static str,
        code: &'static str,
        type_url: &'static str,
    ) -> ErrDef {
        ErrDef {
            status: 422,
            title,
            code,
            type_url,
        }
    }

    const fn bad_request(
        title: &'static str,
        code: &'static str,
        type_url: &'static str,
    ) -> ErrDef {
        ErrDef {
            status: 400,
            title,
            code,
            type_url,
        }
    }

    pub const DIVISION_BY_ZERO: ErrDef = unprocessable(
        "Division By Zero",
        "CALC_DIVISION_BY_ZERO",
        "https://errors.calculator.local/CALC_DIVISION_BY_ZERO",
    );
    pub const NEGATIVE_SQUARE_ROOT: ErrDef = unprocessable(
        "Negative Square Root",
        "CALC_NEGATIVE_SQUARE_ROOT",
        "https://errors.calculator.local/CALC_NEGATIVE_SQUARE_ROOT",
    );
    pub const NON_POSITIVE_LOGARITHM: ErrDef = unprocessable(
        "Non-Positive Logarithm",
        "CALC_NON_POSITIVE_LOGARITHM",
        "https://errors.calculator.local/CALC_NON_POSITIVE_LOGARITHM",
    );
    pub const NEGATIVE_FACTORIAL: ErrDef = unprocessable(
        "Negative Factorial",
        "CALC_NEGATIVE_FACTORIAL",
        "https://errors.calculator.local/CALC_NEGATIVE_FACTORIAL",
    );
    pub const NON_INTEGER_FACTORIAL: ErrDef = unprocessable(
        "Non-Integer Factorial",
        "CALC_NON_INTEGER_FACTORIAL",
        "https://errors.calculator.local/CALC_NON_INTEGER_FACTORIAL",
    );
    pub const FACTORIAL_TOO_LARGE: ErrDef = unprocessable(
        "Factorial Too Large",
        "CALC_FACTORIAL_TOO_LARGE",
        "https://errors.calculator.local/CALC_FACTORIAL_TOO_LARGE",
    );
    pub const INVALID_INPUT: ErrDef = bad_request(
        "Invalid Input",
        "CALC_INVALID_INPUT",
        "https://errors.calculator.local/CALC_INVALID_INPUT",
    );
    pub const UNKNOWN_OPERATION: ErrDef = bad_request(
        "Unknown Operation",
        "CALC_UNKNOWN_OPERATION",
        "https://errors.calculator.local/CALC_UNKNOWN_OPERATION",
    );
    pub const ARITY_MISMATCH: ErrDef = bad_request(
        "Arity Mismatch",
        "CALC_ARITY_MISMATCH",
        "https://errors.calculator.local/CALC_ARITY_MISMATCH",
    );
    /// Malformed JSON body or wrong content type.
    pub const INVALID_REQUEST: ErrDef = bad_request(
        "Invalid Request",
        "CALC_INVALID_REQUEST",
        "https://errors.calculator.local/CALC_INVALID_REQUEST",
    );
    pub const INTERNAL: ErrDef = ErrDef {
        status: 500,
        title: "Internal Server Error",
        code: "CALC_INTERNAL",
        type_url: "https://errors.calculator.local/CALC_INTERNAL",
    };
}

/// Trace id of the current span, if any.
#[must_use]
pub fn current_trace_id() -> Option<String> {
    tracing::Span::current()
        .id()
        .map(|id| id.into_u64().to_string())
}

const fn err_def(e: &CalculatorError) -> ErrDef {
    match e {
        CalculatorError::DivisionByZero => catalog::DIVISION_BY_ZERO,
        CalculatorError::NegativeSquareRoot => catalog::NEGATIVE_SQUARE_ROOT,
        CalculatorError::NonPositiveLogarithm => catalog::NON_POSITIVE_LOGARITHM,
        CalculatorError::NegativeFactorial => catalog::NEGATIVE_FACTORIAL,
        CalculatorError::NonIntegerFactorial => catalog::NON_INTEGER_FACTORIAL,
        CalculatorError::FactorialTooLarge { .. } => catalog::FACTORIAL_TOO_LARGE,
        CalculatorError::InvalidInput { .. } => catalog::INVALID_INPUT,
        CalculatorError::UnknownOperation { .. } => catalog::UNKNOWN_OPERATION,
        CalculatorError::ArityMismatch { .. } => catalog::ARITY_MISMATCH,
    }
}

fn problem(def: ErrDef, detail: impl Into<String>, instance: &str) -> Problem {
    def.with_context(detail, instance, current_trace_id())
}

/// Map a calculator failure to RFC 9457 Problem using the catalog
pub fn calculator_error_to_problem(e: &CalculatorError, instance: &str) -> Problem {
    problem(err_def(e), e.to_string(), instance)
}

/// Problem for a request the JSON extractor rejected.
pub fn invalid_request_problem(detail: impl Into<String>, instance: &str) -> Problem {
    problem(catalog::INVALID_REQUEST, detail, instance)
}

/// Problem for a failure that is not the caller's fault. Details stay in the log.
pub fn internal_problem(instance: &str) -> Problem {
    problem(
        catalog::INTERNAL,
        "An internal error occurred while evaluating the operation",
        instance,
    )
}
