//! History loading errors.
//!
//! Malformed lines are not errors; they are skipped and counted by the loader.

use std::path::PathBuf;

use super::error_code::{self, InstinctErrorCode};

/// Errors that can occur while reading the history log.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("History file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl HistoryError {
    /// Classify an IO error raised while opening or reading `path`.
    pub fn from_io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}

impl InstinctErrorCode for HistoryError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => error_code::HISTORY_NOT_FOUND,
            Self::Io { .. } => error_code::HISTORY_ERROR,
        }
    }
}
