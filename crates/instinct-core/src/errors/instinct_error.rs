//! Top-level error aggregating subsystem errors.

use super::error_code::InstinctErrorCode;
use super::{ConfigError, HistoryError, OutputError};

/// Errors that can occur during a converter run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum InstinctError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("History error: {0}")]
    History(#[from] HistoryError),

    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

impl InstinctErrorCode for InstinctError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::History(e) => e.error_code(),
            Self::Output(e) => e.error_code(),
        }
    }
}
