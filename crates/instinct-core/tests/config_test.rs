//! Tests for the converter configuration system.

use std::path::PathBuf;
use std::sync::Mutex;

use instinct_core::config::{CliOverrides, InstinctConfig};
use instinct_core::errors::ConfigError;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

fn tempdir() -> tempfile::TempDir {
    tempfile::TempDir::new().unwrap()
}

/// Clear all INSTINCT_ env vars to prevent cross-test contamination.
fn clear_instinct_env_vars() {
    for key in [
        "INSTINCT_HISTORY_FILE",
        "INSTINCT_OBSERVATIONS_FILE",
        "INSTINCT_INSTINCTS_DIR",
        "INSTINCT_EXPORT_FILE",
        "INSTINCT_MIN_OCCURRENCES",
        "INSTINCT_EXPORT_LIMIT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn test_layered_resolution() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_instinct_env_vars();

    let home = tempdir();
    let user_dir = home.path().join(".claude/homunculus");
    std::fs::create_dir_all(&user_dir).unwrap();
    std::fs::write(
        user_dir.join("instinct.toml"),
        r#"
[paths]
history_file = "/user/history.jsonl"
observations_file = "/user/observations.jsonl"

[extraction]
min_occurrences = 7
export_limit = 5
"#,
    )
    .unwrap();

    let project = tempdir();
    std::fs::write(
        project.path().join("instinct.toml"),
        r#"
[paths]
observations_file = "/project/observations.jsonl"

[extraction]
min_occurrences = 4
"#,
    )
    .unwrap();

    std::env::set_var("INSTINCT_MIN_OCCURRENCES", "2");

    let cli = CliOverrides {
        history_file: Some(PathBuf::from("/cli/history.jsonl")),
        ..Default::default()
    };

    let config =
        InstinctConfig::load_with_home(project.path(), Some(home.path()), Some(&cli)).unwrap();

    // CLI beats user config
    assert_eq!(
        config.paths.history_file,
        Some(PathBuf::from("/cli/history.jsonl"))
    );
    // Project beats user config
    assert_eq!(
        config.paths.observations_file,
        Some(PathBuf::from("/project/observations.jsonl"))
    );
    // Env beats project and user
    assert_eq!(config.extraction.min_occurrences, Some(2));
    // User value survives where nothing overrides it
    assert_eq!(config.extraction.export_limit, Some(5));

    clear_instinct_env_vars();
}

#[test]
fn test_load_missing_files_fallback() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_instinct_env_vars();

    let dir = tempdir();
    let config = InstinctConfig::load_with_home(dir.path(), Some(dir.path()), None).unwrap();

    assert_eq!(config.extraction.effective_min_occurrences(), 3);
    assert_eq!(config.extraction.effective_export_limit(), 50);
    assert_eq!(config.extraction.effective_max_trigger_lines(), 10);

    let paths = config.paths.resolve(Some(dir.path())).unwrap();
    assert_eq!(paths.history_file, dir.path().join(".claude/history.jsonl"));
    assert_eq!(
        paths.observations_file,
        dir.path().join(".claude/homunculus/observations.jsonl")
    );
    assert_eq!(
        paths.instincts_dir,
        dir.path().join(".claude/homunculus/instincts/personal")
    );
    assert_eq!(paths.export_file, PathBuf::from("history-instincts.yaml"));
}

#[test]
fn test_explicit_config_file_replaces_project_layer() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_instinct_env_vars();

    let project = tempdir();
    std::fs::write(
        project.path().join("instinct.toml"),
        "[extraction]\nmin_occurrences = 9\n",
    )
    .unwrap();
    let explicit = project.path().join("other.toml");
    std::fs::write(&explicit, "[extraction]\nexport_limit = 12\n").unwrap();

    let cli = CliOverrides {
        config_file: Some(explicit),
        ..Default::default()
    };
    let config = InstinctConfig::load_with_home(project.path(), None, Some(&cli)).unwrap();

    assert_eq!(config.extraction.export_limit, Some(12));
    assert_eq!(config.extraction.min_occurrences, None);
}

#[test]
fn test_missing_explicit_config_file_is_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_instinct_env_vars();

    let dir = tempdir();
    let cli = CliOverrides {
        config_file: Some(dir.path().join("nope.toml")),
        ..Default::default()
    };
    let result = InstinctConfig::load_with_home(dir.path(), None, Some(&cli));
    assert!(matches!(result, Err(ConfigError::FileNotFound { .. })));
}

#[test]
fn test_invalid_toml_is_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_instinct_env_vars();

    let dir = tempdir();
    std::fs::write(dir.path().join("instinct.toml"), "[extraction\nbroken").unwrap();
    let result = InstinctConfig::load_with_home(dir.path(), None, None);
    assert!(matches!(result, Err(ConfigError::ParseError { .. })));
}

#[test]
fn test_validation_rejects_zero_thresholds() {
    let config = InstinctConfig::from_toml("[extraction]\nmin_occurrences = 0\n").unwrap();
    let err = InstinctConfig::validate(&config).unwrap_err();
    assert!(matches!(err, ConfigError::ValidationFailed { ref field, .. } if field == "extraction.min_occurrences"));

    let config = InstinctConfig::from_toml("[extraction]\nexport_limit = 0\n").unwrap();
    assert!(InstinctConfig::validate(&config).is_err());

    let config = InstinctConfig::from_toml("[extraction]\nmax_trigger_lines = 0\n").unwrap();
    assert!(InstinctConfig::validate(&config).is_err());
}

#[test]
fn test_unknown_keys_ignored() {
    let config = InstinctConfig::from_toml(
        r#"
[paths]
history_file = "/tmp/h.jsonl"
color = "always"

[future_section]
enabled = true
"#,
    )
    .unwrap();
    assert_eq!(config.paths.history_file, Some(PathBuf::from("/tmp/h.jsonl")));
}

#[test]
fn test_unresolvable_default_without_home() {
    let config = InstinctConfig::default();
    let err = config.paths.resolve(None).unwrap_err();
    assert!(matches!(err, ConfigError::UnresolvedPath { .. }));

    let config = InstinctConfig::from_toml(
        r#"
[paths]
history_file = "/a"
observations_file = "/b"
instincts_dir = "/c"
"#,
    )
    .unwrap();
    let paths = config.paths.resolve(None).unwrap();
    assert_eq!(paths.instincts_dir, PathBuf::from("/c"));
}

#[test]
fn test_toml_roundtrip_keeps_values() {
    let config = InstinctConfig::from_toml("[extraction]\nmin_occurrences = 5\n").unwrap();
    let text = config.to_toml().unwrap();
    let back = InstinctConfig::from_toml(&text).unwrap();
    assert_eq!(back.extraction.min_occurrences, Some(5));
}
