//! InstinctErrorCode trait for stable, greppable error prefixes.

/// Every error enum implements this to expose a structured code string.
pub trait InstinctErrorCode {
    /// Returns the error code string (e.g., "HISTORY_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn display_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const HISTORY_ERROR: &str = "HISTORY_ERROR";
pub const HISTORY_NOT_FOUND: &str = "HISTORY_NOT_FOUND";
pub const OUTPUT_ERROR: &str = "OUTPUT_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
