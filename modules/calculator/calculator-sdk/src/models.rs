//! Operation identifiers and result values.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigUint;

use crate::errors::CalculatorError;

/// Number of operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    Unary,
    Binary,
}

impl Arity {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// The closed set of calculator operations.
///
/// The declaration order is the menu order of the text shell (1-based) and
/// the option order of the web form selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Sqrt,
    Sin,
    Cos,
    Tan,
    Ln,
    Factorial,
}

impl Operation {
    pub const ALL: [Self; 11] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Sqrt,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Ln,
        Self::Factorial,
    ];

    /// Stable identifier used by the JSON API and the web form.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Ln => "ln",
            Self::Factorial => "factorial",
        }
    }

    #[must_use]
    pub const fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => {
                Arity::Binary
            }
            Self::Sqrt | Self::Sin | Self::Cos | Self::Tan | Self::Ln | Self::Factorial => {
                Arity::Unary
            }
        }
    }

    /// 1-based position in the text menu. `0` is reserved for "exit".
    #[must_use]
    pub const fn menu_number(self) -> u8 {
        match self {
            Self::Add => 1,
            Self::Subtract => 2,
            Self::Multiply => 3,
            Self::Divide => 4,
            Self::Power => 5,
            Self::Sqrt => 6,
            Self::Sin => 7,
            Self::Cos => 8,
            Self::Tan => 9,
            Self::Ln => 10,
            Self::Factorial => 11,
        }
    }

    #[must_use]
    pub fn from_menu_number(number: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.menu_number() == number)
    }

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
            Self::Power => "Power",
            Self::Sqrt => "Square root",
            Self::Sin => "Sine",
            Self::Cos => "Cosine",
            Self::Tan => "Tangent",
            Self::Ln => "Natural logarithm",
            Self::Factorial => "Factorial",
        }
    }

    /// Short symbol shown next to the display name; empty for the
    /// trigonometric functions.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "\u{d7}",
            Self::Divide => "\u{f7}",
            Self::Power => "^",
            Self::Sqrt => "\u{221a}",
            Self::Ln => "ln",
            Self::Factorial => "!",
            Self::Sin | Self::Cos | Self::Tan => "",
        }
    }

    /// Menu / selector label, e.g. `Addition (+)` or `Sine`.
    #[must_use]
    pub fn label(self) -> String {
        match self.symbol() {
            "" => self.display_name().to_owned(),
            symbol => format!("{} ({symbol})", self.display_name()),
        }
    }

    /// Prompt label for each operand, in order. Length equals the arity.
    #[must_use]
    pub const fn operand_labels(self) -> &'static [&'static str] {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide => {
                &["first number", "second number"]
            }
            Self::Power => &["base", "exponent"],
            Self::Sqrt | Self::Ln => &["number"],
            Self::Sin | Self::Cos | Self::Tan => &["angle in degrees"],
            Self::Factorial => &["whole number"],
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Add => "Adds two numbers",
            Self::Subtract => "Subtracts the second number from the first",
            Self::Multiply => "Multiplies two numbers",
            Self::Divide => "Divides the first number by the second",
            Self::Power => "Raises the first number to the power of the second",
            Self::Sqrt => "Square root of a non-negative number",
            Self::Sin => "Sine of an angle given in degrees",
            Self::Cos => "Cosine of an angle given in degrees",
            Self::Tan => "Tangent of an angle given in degrees",
            Self::Ln => "Logarithm in base e of a positive number",
            Self::Factorial => "Product of all positive integers up to a whole number",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Operation {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|op| op.id().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CalculatorError::unknown_operation(wanted))
    }
}

/// Successful evaluation result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Real(f64),
    /// Exact factorial result.
    Integer(BigUint),
}

impl Value {
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Real(x) => Some(*x),
            Self::Integer(_) => None,
        }
    }

    #[must_use]
    pub const fn as_integer(&self) -> Option<&BigUint> {
        match self {
            Self::Integer(n) => Some(n),
            Self::Real(_) => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(x) => f.write_str(&format_real(*x)),
            Self::Integer(n) => write!(f, "{n}"),
        }
    }
}

/// Shortest round-trip rendering of a real number.
///
/// Very large and very small magnitudes switch to scientific notation so a
/// result like `1e300` does not print three hundred digits. Negative zero
/// prints as `0`.
#[must_use]
pub fn format_real(x: f64) -> String {
    let magnitude = x.abs();
    if magnitude == 0.0 {
        "0".to_owned()
    } else if x.is_finite() && !(1e-5..1e16).contains(&magnitude) {
        format!("{x:e}")
    } else {
        format!("{x}")
    }
}
