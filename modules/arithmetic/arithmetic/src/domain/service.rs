//! Domain service for arithmetic
//!
//! Wraps the plain operations behind [`ArithmeticApi`] and records each call
//! as a tracing event.

use arithmetic_sdk::{ArithmeticApi, ArithmeticError, Operation};
use tracing::{debug, warn};

use crate::config::ArithmeticConfig;
use crate::ops;

/// Stateless service implementing [`ArithmeticApi`].
#[derive(Debug, Clone, Default)]
pub struct Service {
    config: ArithmeticConfig,
}

impl Service {
    /// Create a service with default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a service with the given configuration.
    #[must_use]
    pub const fn with_config(config: ArithmeticConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &ArithmeticConfig {
        &self.config
    }

    /// Parse `name` and apply the operation it names.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::UnknownOperation`] if `name` is not an
    /// operation, or [`ArithmeticError::DivisionByZero`] for a zero divisor.
    pub fn evaluate_named(&self, name: &str, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        let op: Operation = name.parse()?;
        self.evaluate(op, a, b)
    }

    fn trace(&self, op: Operation, a: f64, b: f64) {
        if self.config.trace_operations {
            debug!(op = %op, a, b, "performing arithmetic operation");
        }
    }
}

impl ArithmeticApi for Service {
    fn add(&self, a: f64, b: f64) -> f64 {
        self.trace(Operation::Add, a, b);
        ops::add(a, b)
    }

    fn subtract(&self, a: f64, b: f64) -> f64 {
        self.trace(Operation::Subtract, a, b);
        ops::subtract(a, b)
    }

    fn multiply(&self, a: f64, b: f64) -> f64 {
        self.trace(Operation::Multiply, a, b);
        ops::multiply(a, b)
    }

    fn divide(&self, a: f64, b: f64) -> Result<f64, ArithmeticError> {
        self.trace(Operation::Divide, a, b);
        ops::divide(a, b).inspect_err(|_| {
            if self.config.trace_operations {
                warn!(a, b, "rejected division by zero");
            }
        })
    }
}
