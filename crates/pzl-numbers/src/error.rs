//! Errors raised by integer and rational arithmetic.

use thiserror::Error;

/// Errors that can occur while parsing or operating on numbers.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NumberError {
    /// The input string is not a decimal number.
    #[error("malformed number: {input:?}")]
    MalformedInput {
        /// The rejected input.
        input: String,
    },

    /// Division or remainder by zero.
    #[error("division by zero")]
    DivisionByZero,

    /// Integer division whose result would be a proper fraction.
    #[error("quotient is not an integer")]
    NonIntegralQuotient,

    /// Zero raised to the power of zero.
    #[error("zero to the power of zero is undefined")]
    ZeroToZero,

    /// Power with a negative exponent.
    #[error("negative exponents are not supported")]
    NegativeExponent,

    /// Power with a non-whole exponent.
    #[error("fractional exponents are not supported")]
    FractionalExponent,

    /// Rational division where an operand is not a whole number.
    #[error("division between fractions is not supported")]
    FractionDivision,

    /// A rational was built with a zero denominator.
    #[error("denominator cannot be zero")]
    ZeroDenominator,
}

impl NumberError {
    pub(crate) fn malformed(input: &str) -> Self {
        Self::MalformedInput {
            input: input.to_owned(),
        }
    }

    /// Returns true if the error comes from rejected input text rather than
    /// from an undefined arithmetic operation.
    #[must_use]
    pub fn is_malformed_input(&self) -> bool {
        matches!(self, Self::MalformedInput { .. })
    }
}

/// Result alias for fallible number operations.
pub type Result<T> = std::result::Result<T, NumberError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(NumberError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            NumberError::malformed("12a").to_string(),
            "malformed number: \"12a\""
        );
    }

    #[test]
    fn test_classification() {
        assert!(NumberError::malformed("x").is_malformed_input());
        assert!(!NumberError::ZeroToZero.is_malformed_input());
    }
}
