//! Arithmetic Module
//!
//! Four stateless operations over `f64`: addition, subtraction,
//! multiplication and division. Division by zero does not panic; it returns
//! [`ArithmeticError::DivisionByZero`] instead of a quotient.
//!
//! ## Architecture
//!
//! - `ops.rs` - The operations as plain functions
//! - `domain/service.rs` - `ArithmeticApi` implementation with tracing
//! - `config.rs` - Module configuration
//!
//! Consumers that only need the contract should depend on `arithmetic-sdk`.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod config;
pub mod domain;
pub mod ops;

pub use arithmetic_sdk::{ArithmeticApi, ArithmeticError, Operation};
pub use config::{ArithmeticConfig, ConfigError};
pub use domain::Service;
pub use ops::{add, divide, multiply, subtract};
