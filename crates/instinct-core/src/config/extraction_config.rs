//! Pattern extraction configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Thresholds for turning command tallies into patterns.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Minimum occurrences before a command becomes a pattern. Default: 3.
    pub min_occurrences: Option<u32>,
    /// Top commands considered by the YAML export. Default: 50.
    pub export_limit: Option<usize>,
    /// Trigger lines rendered per instinct file. Default: 10.
    pub max_trigger_lines: Option<usize>,
}

impl ExtractionConfig {
    pub fn effective_min_occurrences(&self) -> u32 {
        self.min_occurrences
            .unwrap_or(constants::DEFAULT_MIN_OCCURRENCES)
    }

    pub fn effective_export_limit(&self) -> usize {
        self.export_limit.unwrap_or(constants::DEFAULT_EXPORT_LIMIT)
    }

    pub fn effective_max_trigger_lines(&self) -> usize {
        self.max_trigger_lines
            .unwrap_or(constants::DEFAULT_MAX_TRIGGER_LINES)
    }
}
