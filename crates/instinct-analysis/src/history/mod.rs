//! History log model and streaming loader.

pub mod loader;
pub mod record;

pub use loader::{load_history, read_history, LoadedHistory};
pub use record::HistoryRecord;
