//! Output (observation log, instinct files, YAML export) errors.

use std::path::PathBuf;

use super::error_code::{self, InstinctErrorCode};

/// Errors that can occur while writing derived artifacts.
#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("Failed to create directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize {what}: {message}")]
    Serialization { what: String, message: String },
}

impl InstinctErrorCode for OutputError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
            _ => error_code::OUTPUT_ERROR,
        }
    }
}
