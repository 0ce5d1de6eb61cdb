//! Derived artifacts written to disk.

pub mod instincts;
pub mod observations;
pub mod yaml_export;

pub use instincts::{build_instincts, InstinctDocument, InstinctWriter};
pub use observations::{ObservationLog, ObservationRecord};
pub use yaml_export::{sanitize_id, ExportEntry, YamlExporter};

use std::path::Path;

use instinct_core::errors::OutputError;

/// Create `dir` and its parents if missing.
pub(crate) fn ensure_dir(dir: &Path) -> Result<(), OutputError> {
    if dir.as_os_str().is_empty() {
        return Ok(());
    }
    std::fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Create the parent directory of `file` if missing.
pub(crate) fn ensure_parent(file: &Path) -> Result<(), OutputError> {
    match file.parent() {
        Some(parent) => ensure_dir(parent),
        None => Ok(()),
    }
}
