//! `ArithmeticApi` trait definition.

use crate::error::ArithmeticError;
use crate::operation::Operation;

/// Public API trait for the arithmetic module.
///
/// Every operation is synchronous and stateless, so implementations can be
/// shared freely across threads:
/// ```ignore
/// let api: Arc<dyn ArithmeticApi> = Arc::new(Service::new());
/// let quotient = api.divide(10.0, 2.0)?;
/// ```
pub trait ArithmeticApi: Send + Sync {
    /// Returns `a + b`.
    fn add(&self, a: f64, b: f64) -> f64;

    /// Returns `a - b`.
    fn subtract(&self, a: f64, b: f64) -> f64;

    /// Returns `a * b`.
    fn multiply(&self, a: f64, b: f64) -> f64;

    /// Returns `a / b`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] when `b` is zero.
    fn divide(&self, a: f64, b: f64) -> Result<f64, ArithmeticError>;

    /// Applies `op` to the operands.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for [`Operation::Divide`]
    /// with a zero divisor.
    fn evaluate(&self, op: Operation, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        match op {
            Operation::Add => Ok(self.add(a, b)),
            Operation::Subtract => Ok(self.subtract(a, b)),
            Operation::Multiply => Ok(self.multiply(a, b)),
            Operation::Divide => self.divide(a, b),
        }
    }
}
