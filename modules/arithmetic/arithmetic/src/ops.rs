//! Plain arithmetic functions.

use arithmetic_sdk::ArithmeticError;

/// Returns `a + b`.
#[must_use]
pub fn add(a: f64, b: f64) -> f64 {
    a + b
}

/// Returns `a - b`.
#[must_use]
pub fn subtract(a: f64, b: f64) -> f64 {
    a - b
}

/// Returns `a * b`.
#[must_use]
pub fn multiply(a: f64, b: f64) -> f64 {
    a * b
}

/// Returns `a / b`.
///
/// `0.0` and `-0.0` are both rejected. A NaN divisor is not zero and is
/// divided through normally.
///
/// # Errors
///
/// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
pub fn divide(a: f64, b: f64) -> Result<f64, ArithmeticError> {
    if b == 0.0 {
        return Err(ArithmeticError::division_by_zero());
    }
    Ok(a / b)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_scenarios() {
        assert_eq!(add(2.0, 3.0), 5.0);
        assert_eq!(subtract(5.0, 2.0), 3.0);
        assert_eq!(multiply(4.0, 3.0), 12.0);
        assert_eq!(divide(10.0, 2.0).unwrap(), 5.0);
    }

    #[test]
    fn test_negative_operands() {
        assert_eq!(add(-5.0, 3.0), -2.0);
        assert_eq!(subtract(-5.0, -3.0), -2.0);
        assert_eq!(multiply(-4.0, 3.0), -12.0);
        assert_eq!(divide(-9.0, 3.0).unwrap(), -3.0);
    }

    #[test]
    fn test_divide_by_zero_returns_sentinel() {
        let err = divide(5.0, 0.0).unwrap_err();
        assert_eq!(err, ArithmeticError::DivisionByZero);
        assert_eq!(err.to_string(), "Cannot divide by zero");
    }

    #[test]
    fn test_divide_by_negative_zero_returns_sentinel() {
        assert!(divide(5.0, -0.0).unwrap_err().is_division_by_zero());
        assert!(divide(0.0, 0.0).unwrap_err().is_division_by_zero());
    }

    #[test]
    fn test_divide_by_nan_is_not_zero() {
        assert!(divide(1.0, f64::NAN).unwrap().is_nan());
    }
}
