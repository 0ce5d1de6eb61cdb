//! # instinct-core
//!
//! Configuration, error types, tracing setup, and shared constants for the
//! history-to-instincts converter.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

pub use config::{CliOverrides, InstinctConfig};
pub use errors::{InstinctError, InstinctErrorCode};
