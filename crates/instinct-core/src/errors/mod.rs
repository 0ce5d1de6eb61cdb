//! Error handling for the converter.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod history_error;
pub mod instinct_error;
pub mod output_error;

pub use config_error::ConfigError;
pub use error_code::InstinctErrorCode;
pub use history_error::HistoryError;
pub use instinct_error::InstinctError;
pub use output_error::OutputError;
