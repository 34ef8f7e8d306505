//! Public error types for the arithmetic module.

use thiserror::Error;

/// Errors returned in place of a numeric result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithmeticError {
    /// The divisor was zero (either sign).
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// An operation was requested by a name that does not exist.
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl ArithmeticError {
    /// Creates a `DivisionByZero` error.
    #[must_use]
    pub const fn division_by_zero() -> Self {
        Self::DivisionByZero
    }

    /// Creates an `UnknownOperation` error.
    #[must_use]
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Returns `true` if this is the division-by-zero sentinel.
    #[must_use]
    pub const fn is_division_by_zero(&self) -> bool {
        matches!(self, Self::DivisionByZero)
    }

    /// Returns `true` if this is an unknown operation error.
    #[must_use]
    pub const fn is_unknown_operation(&self) -> bool {
        matches!(self, Self::UnknownOperation(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_constructors() {
        let err = ArithmeticError::division_by_zero();
        assert!(err.is_division_by_zero());
        assert!(!err.is_unknown_operation());

        let err = ArithmeticError::unknown_operation("modulo");
        assert!(err.is_unknown_operation());
        assert!(err.to_string().contains("modulo"));
    }

    #[test]
    fn test_error_display() {
        let err = ArithmeticError::DivisionByZero;
        assert_eq!(err.to_string(), "Cannot divide by zero");

        let err = ArithmeticError::UnknownOperation("pow".to_owned());
        assert_eq!(err.to_string(), "Unknown operation: pow");
    }
}
