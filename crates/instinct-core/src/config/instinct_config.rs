//! Top-level converter configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{ExtractionConfig, PathsConfig, ResolvedPaths};
use crate::constants;
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`INSTINCT_*`)
/// 3. Explicit `--config` file, else `instinct.toml` in the working directory
/// 4. User config (`~/.claude/homunculus/instinct.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct InstinctConfig {
    pub paths: PathsConfig,
    pub extraction: ExtractionConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub config_file: Option<PathBuf>,
    pub history_file: Option<PathBuf>,
    pub observations_file: Option<PathBuf>,
    pub instincts_dir: Option<PathBuf>,
    pub export_file: Option<PathBuf>,
}

impl InstinctConfig {
    /// Load configuration relative to `root`, using `$HOME` for the user layer.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        Self::load_with_home(root, home_dir().as_deref(), cli_overrides)
    }

    /// Load configuration with an explicit home directory.
    pub fn load_with_home(
        root: &Path,
        home: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = home.map(|h| h.join(constants::USER_CONFIG_FILE)) {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(path = %user_config_path.display(), error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: explicit config file, else project config
        let explicit = cli_overrides.and_then(|c| c.config_file.as_ref());
        match explicit {
            Some(path) => Self::merge_toml_file(&mut config, path)?,
            None => {
                let project_config_path = root.join(constants::PROJECT_CONFIG_FILE);
                if project_config_path.exists() {
                    Self::merge_toml_file(&mut config, &project_config_path)?;
                }
            }
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        tracing::debug!(?config, "configuration resolved");
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &InstinctConfig) -> Result<(), ConfigError> {
        if config.extraction.min_occurrences == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.min_occurrences".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.extraction.export_limit == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.export_limit".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        if config.extraction.max_trigger_lines == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "extraction.max_trigger_lines".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Resolve the configured paths against `$HOME`.
    pub fn resolve_paths(&self) -> Result<ResolvedPaths, ConfigError> {
        self.paths.resolve(home_dir().as_deref())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut InstinctConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: InstinctConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins only where it has a `Some` value.
    fn merge(base: &mut InstinctConfig, other: &InstinctConfig) {
        // Paths
        if other.paths.history_file.is_some() {
            base.paths.history_file = other.paths.history_file.clone();
        }
        if other.paths.observations_file.is_some() {
            base.paths.observations_file = other.paths.observations_file.clone();
        }
        if other.paths.instincts_dir.is_some() {
            base.paths.instincts_dir = other.paths.instincts_dir.clone();
        }
        if other.paths.export_file.is_some() {
            base.paths.export_file = other.paths.export_file.clone();
        }

        // Extraction
        if other.extraction.min_occurrences.is_some() {
            base.extraction.min_occurrences = other.extraction.min_occurrences;
        }
        if other.extraction.export_limit.is_some() {
            base.extraction.export_limit = other.extraction.export_limit;
        }
        if other.extraction.max_trigger_lines.is_some() {
            base.extraction.max_trigger_lines = other.extraction.max_trigger_lines;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `INSTINCT_HISTORY_FILE`, `INSTINCT_MIN_OCCURRENCES`, etc.
    fn apply_env_overrides(config: &mut InstinctConfig) {
        if let Some(val) = std::env::var_os("INSTINCT_HISTORY_FILE") {
            config.paths.history_file = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("INSTINCT_OBSERVATIONS_FILE") {
            config.paths.observations_file = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("INSTINCT_INSTINCTS_DIR") {
            config.paths.instincts_dir = Some(PathBuf::from(val));
        }
        if let Some(val) = std::env::var_os("INSTINCT_EXPORT_FILE") {
            config.paths.export_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("INSTINCT_MIN_OCCURRENCES") {
            if let Ok(v) = val.parse::<u32>() {
                config.extraction.min_occurrences = Some(v);
            }
        }
        if let Ok(val) = std::env::var("INSTINCT_EXPORT_LIMIT") {
            if let Ok(v) = val.parse::<usize>() {
                config.extraction.export_limit = Some(v);
            }
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut InstinctConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.history_file {
            config.paths.history_file = Some(v.clone());
        }
        if let Some(ref v) = cli.observations_file {
            config.paths.observations_file = Some(v.clone());
        }
        if let Some(ref v) = cli.instincts_dir {
            config.paths.instincts_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.export_file {
            config.paths.export_file = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
