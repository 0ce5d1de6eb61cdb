//! Tests for the converter error handling system.

use std::path::PathBuf;

use instinct_core::errors::*;

#[test]
fn test_all_errors_have_error_code() {
    let config = ConfigError::FileNotFound {
        path: "/tmp".into(),
    };
    assert_eq!(config.error_code(), "CONFIG_ERROR");

    let history = HistoryError::NotFound {
        path: PathBuf::from("/tmp/history.jsonl"),
    };
    assert_eq!(history.error_code(), "HISTORY_NOT_FOUND");

    let output = OutputError::Serialization {
        what: "export".into(),
        message: "bad".into(),
    };
    assert_eq!(output.error_code(), "SERIALIZATION_ERROR");
}

#[test]
fn test_history_error_from_io_classifies_not_found() {
    let err = HistoryError::from_io(
        "/missing",
        std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    );
    assert!(matches!(err, HistoryError::NotFound { .. }));

    let err = HistoryError::from_io(
        "/denied",
        std::io::Error::new(std::io::ErrorKind::PermissionDenied, "no"),
    );
    assert!(matches!(err, HistoryError::Io { .. }));
    assert_eq!(err.error_code(), "HISTORY_ERROR");
}

#[test]
fn test_from_conversions_keep_codes() {
    let err: InstinctError = HistoryError::NotFound {
        path: PathBuf::from("/x"),
    }
    .into();
    assert!(matches!(err, InstinctError::History(_)));
    assert_eq!(err.error_code(), "HISTORY_NOT_FOUND");

    let err: InstinctError = OutputError::Write {
        path: PathBuf::from("/y"),
        source: std::io::Error::new(std::io::ErrorKind::Other, "disk"),
    }
    .into();
    assert_eq!(err.error_code(), "OUTPUT_ERROR");
}

#[test]
fn test_display_string_format() {
    let err = ConfigError::ValidationFailed {
        field: "extraction.export_limit".into(),
        message: "must be at least 1".into(),
    };
    assert_eq!(
        err.display_string(),
        "[CONFIG_ERROR] Config validation failed for extraction.export_limit: must be at least 1"
    );
}
