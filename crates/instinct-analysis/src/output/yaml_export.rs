//! Single-document YAML export of the most frequent commands.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use instinct_core::config::ExtractionConfig;
use instinct_core::constants::{
    DISPLAY_TRUNCATE_CHARS, EXPORTER_IDENTITY, EXPORT_ACTION, EXPORT_FORMAT_VERSION,
    EXPORT_ID_MAX_CHARS,
};
use instinct_core::errors::OutputError;
use serde::Serialize;
use tracing::info;

use super::ensure_parent;
use crate::history::HistoryRecord;
use crate::patterns::text::truncate_chars;
use crate::patterns::{extract_patterns, CommandPattern, Domain, PatternQuery, RuleVariant, Tally};

/// One exported command pattern.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportEntry {
    pub id: String,
    pub trigger: String,
    pub action: &'static str,
    /// Rounded to one decimal place.
    pub confidence: f64,
    pub domain: Domain,
    pub observations: usize,
}

impl From<&CommandPattern> for ExportEntry {
    fn from(p: &CommandPattern) -> Self {
        Self {
            id: sanitize_id(&p.command),
            trigger: truncate_chars(&p.command, DISPLAY_TRUNCATE_CHARS).to_string(),
            action: EXPORT_ACTION,
            confidence: one_decimal(p.confidence),
            domain: p.domain,
            observations: p.count,
        }
    }
}

#[derive(Serialize)]
struct ExportDocument<'a> {
    version: &'static str,
    exported_by: &'static str,
    export_date: &'a str,
    instincts: &'a [ExportEntry],
}

/// Lowercase, map `/` and space to `-`, keep the first 30 characters, then
/// replace anything that is not alphanumeric, `-` or `_` with `-`.
pub fn sanitize_id(command: &str) -> String {
    let lowered = command.to_lowercase().replace(['/', ' '], "-");
    truncate_chars(&lowered, EXPORT_ID_MAX_CHARS)
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect()
}

/// Round half-even on the decimal representation, matching `{:.1}`.
fn one_decimal(value: f64) -> f64 {
    format!("{value:.1}").parse().unwrap_or(value)
}

/// Renders and writes the YAML export.
#[derive(Debug, Clone)]
pub struct YamlExporter {
    min_occurrences: u32,
    limit: usize,
}

impl YamlExporter {
    pub fn new(config: &ExtractionConfig) -> Self {
        Self {
            min_occurrences: config.effective_min_occurrences(),
            limit: config.effective_export_limit(),
        }
    }

    /// Entries for the top commands that clear the occurrence threshold.
    pub fn entries(&self, records: &[HistoryRecord]) -> Vec<ExportEntry> {
        let tally: Tally = records.iter().map(HistoryRecord::display).collect();
        let query = PatternQuery {
            min_occurrences: self.min_occurrences,
            limit: Some(self.limit),
            variant: RuleVariant::Exporter,
        };
        extract_patterns(&tally, records.len(), query)
            .iter()
            .map(ExportEntry::from)
            .collect()
    }

    /// Render the full document: comment header followed by the YAML body.
    pub fn render(
        &self,
        records: &[HistoryRecord],
        source: &Path,
        now: DateTime<Utc>,
    ) -> Result<String, OutputError> {
        render_document(&self.entries(records), records.len(), source, now)
    }

    /// Render and write to `dest`, overwriting it. Returns the entry count.
    pub fn write(
        &self,
        records: &[HistoryRecord],
        source: &Path,
        dest: &Path,
    ) -> Result<usize, OutputError> {
        let entries = self.entries(records);
        let text = render_document(&entries, records.len(), source, Utc::now())?;
        ensure_parent(dest)?;
        std::fs::write(dest, text).map_err(|e| OutputError::Write {
            path: PathBuf::from(dest),
            source: e,
        })?;

        info!(path = %dest.display(), entries = entries.len(), "yaml exported");
        Ok(entries.len())
    }
}

fn render_document(
    entries: &[ExportEntry],
    total_records: usize,
    source: &Path,
    now: DateTime<Utc>,
) -> Result<String, OutputError> {
    let stamp = now.format("%Y-%m-%dT%H:%M:%S%.6f").to_string();
    let doc = ExportDocument {
        version: EXPORT_FORMAT_VERSION,
        exported_by: EXPORTER_IDENTITY,
        export_date: &stamp,
        instincts: entries,
    };
    let body = serde_yaml::to_string(&doc).map_err(|e| OutputError::Serialization {
        what: "yaml export".to_string(),
        message: e.to_string(),
    })?;

    Ok(format!(
        "# History Instincts Export\n\
         # Generated: {stamp}\n\
         # Source: {source}\n\
         # Total entries: {total_records}\n\
         \n\
         {body}",
        source = source.display(),
    ))
}
