//! Domain layer for arithmetic module

pub mod service;

pub use service::Service;
