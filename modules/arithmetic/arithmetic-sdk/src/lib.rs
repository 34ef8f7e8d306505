//! Arithmetic SDK
//!
//! This crate provides the public contract of the arithmetic module:
//! - `ArithmeticApi` trait for consumers holding a shared handle
//! - `Operation` for calling an operation by name
//! - `ArithmeticError` returned instead of a quotient on a zero divisor
//!
//! ## Usage
//!
//! ```ignore
//! use arithmetic_sdk::{ArithmeticApi, Operation};
//!
//! let api: Arc<dyn ArithmeticApi> = Arc::new(arithmetic::Service::new());
//! assert_eq!(api.add(2.0, 3.0), 5.0);
//! assert!(api.divide(5.0, 0.0).is_err());
//! let product = api.evaluate(Operation::Multiply, 4.0, 3.0)?;
//! ```

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]

pub mod api;
pub mod error;
pub mod operation;

pub use api::ArithmeticApi;
pub use error::ArithmeticError;
pub use operation::Operation;
