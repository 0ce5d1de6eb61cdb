//! Shared constants for the history-to-instincts converter.

// ---- Default locations (relative to the home directory) ----

/// Default history log, relative to `$HOME`.
pub const DEFAULT_HISTORY_FILE: &str = ".claude/history.jsonl";

/// Default observation log, relative to `$HOME`.
pub const DEFAULT_OBSERVATIONS_FILE: &str = ".claude/homunculus/observations.jsonl";

/// Default instinct output directory, relative to `$HOME`.
pub const DEFAULT_INSTINCTS_DIR: &str = ".claude/homunculus/instincts/personal";

/// User-level config file, relative to `$HOME`.
pub const USER_CONFIG_FILE: &str = ".claude/homunculus/instinct.toml";

/// Project-level config file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = "instinct.toml";

/// Default YAML export file, relative to the working directory.
pub const DEFAULT_EXPORT_FILE: &str = "history-instincts.yaml";

// ---- Extraction thresholds ----

/// Minimum occurrences before a command becomes a pattern.
pub const DEFAULT_MIN_OCCURRENCES: u32 = 3;

/// Number of top commands considered by the YAML export.
pub const DEFAULT_EXPORT_LIMIT: usize = 50;

/// Trigger lines rendered per instinct file.
pub const DEFAULT_MAX_TRIGGER_LINES: usize = 10;

// ---- Confidence model ----

/// Confidence floor for any pattern.
pub const CONFIDENCE_BASE: f64 = 0.3;

/// Confidence ceiling for any pattern.
pub const CONFIDENCE_CAP: f64 = 0.95;

/// Weight applied to relative frequency.
pub const CONFIDENCE_FREQUENCY_WEIGHT: f64 = 10.0;

// ---- Analysis report limits ----

/// Top commands shown in the analysis report.
pub const REPORT_TOP_COMMANDS: usize = 50;

/// Top projects shown in the analysis report.
pub const REPORT_TOP_PROJECTS: usize = 10;

/// Top directive / CJK commands shown in the analysis report.
pub const REPORT_TOP_SPECIAL: usize = 20;

/// Projects listed in the workflow section.
pub const REPORT_WORKFLOW_PROJECTS: usize = 5;

/// Commands listed per project in the workflow section.
pub const REPORT_WORKFLOW_COMMANDS: usize = 5;

/// Maximum characters of a command before it is truncated for display.
pub const DISPLAY_TRUNCATE_CHARS: usize = 50;

/// Maximum characters of a sanitized export id.
pub const EXPORT_ID_MAX_CHARS: usize = 30;

// ---- Fixed tags ----

/// Event tag written to every observation record.
pub const OBSERVATION_EVENT: &str = "user_command";

/// Source tag written to every observation record.
pub const OBSERVATION_SOURCE: &str = "history.jsonl";

/// Source tag written to every instinct file header.
pub const INSTINCT_SOURCE: &str = "history-analysis";

/// Export document format version.
pub const EXPORT_FORMAT_VERSION: &str = "2.0";

/// Exporter identity written into the export document.
pub const EXPORTER_IDENTITY: &str = "history-to-instincts converter";

/// Action text attached to every exported entry.
pub const EXPORT_ACTION: &str = "Execute or assist with this command pattern";
