//! Input and output locations.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants;
use crate::errors::ConfigError;

/// Optional path overrides. Unset fields fall back to home-relative defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PathsConfig {
    /// Line-delimited JSON history log.
    pub history_file: Option<PathBuf>,
    /// Append-only observation log.
    pub observations_file: Option<PathBuf>,
    /// Directory receiving `<domain>-instincts.yaml` files.
    pub instincts_dir: Option<PathBuf>,
    /// Default YAML export destination.
    pub export_file: Option<PathBuf>,
}

/// Fully resolved locations handed to each component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub history_file: PathBuf,
    pub observations_file: PathBuf,
    pub instincts_dir: PathBuf,
    pub export_file: PathBuf,
}

impl PathsConfig {
    /// Resolve every location against `home`.
    ///
    /// Fails only when a home-relative default is needed and `home` is `None`.
    pub fn resolve(&self, home: Option<&Path>) -> Result<ResolvedPaths, ConfigError> {
        Ok(ResolvedPaths {
            history_file: pick(
                &self.history_file,
                home,
                constants::DEFAULT_HISTORY_FILE,
                "paths.history_file",
            )?,
            observations_file: pick(
                &self.observations_file,
                home,
                constants::DEFAULT_OBSERVATIONS_FILE,
                "paths.observations_file",
            )?,
            instincts_dir: pick(
                &self.instincts_dir,
                home,
                constants::DEFAULT_INSTINCTS_DIR,
                "paths.instincts_dir",
            )?,
            export_file: self
                .export_file
                .clone()
                .unwrap_or_else(|| PathBuf::from(constants::DEFAULT_EXPORT_FILE)),
        })
    }
}

fn pick(
    explicit: &Option<PathBuf>,
    home: Option<&Path>,
    default_rel: &str,
    field: &str,
) -> Result<PathBuf, ConfigError> {
    match (explicit, home) {
        (Some(p), _) => Ok(p.clone()),
        (None, Some(h)) => Ok(h.join(default_rel)),
        (None, None) => Err(ConfigError::UnresolvedPath {
            field: field.to_string(),
        }),
    }
}
