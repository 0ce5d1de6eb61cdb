//! Append-only observation log.
//!
//! Every history record becomes one JSON line. Existing content is never
//! truncated, and re-running appends duplicates.

use std::fs::OpenOptions;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use instinct_core::constants::{OBSERVATION_EVENT, OBSERVATION_SOURCE};
use instinct_core::errors::OutputError;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::ensure_parent;
use crate::history::HistoryRecord;

/// A normalized, timestamped log entry. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationRecord {
    pub timestamp: String,
    pub event: String,
    pub command: String,
    pub project: String,
    pub session: String,
    pub source: String,
}

impl ObservationRecord {
    /// Convert `record`, using `now` when it has no usable timestamp.
    pub fn from_history(record: &HistoryRecord, now: DateTime<Utc>) -> Self {
        let at = record
            .timestamp_millis()
            .and_then(DateTime::<Utc>::from_timestamp_millis)
            .unwrap_or(now);
        Self {
            timestamp: at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            event: OBSERVATION_EVENT.to_string(),
            command: record.display().to_string(),
            project: record.project().to_string(),
            session: record.session_id().to_string(),
            source: OBSERVATION_SOURCE.to_string(),
        }
    }
}

/// Writer for the observation JSONL file.
#[derive(Debug, Clone)]
pub struct ObservationLog {
    path: PathBuf,
}

impl ObservationLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one line per record. Returns the number of lines written.
    pub fn append(&self, records: &[HistoryRecord]) -> Result<usize, OutputError> {
        self.append_at(records, Utc::now())
    }

    /// Same as `append`, with an explicit fallback time.
    pub fn append_at(
        &self,
        records: &[HistoryRecord],
        now: DateTime<Utc>,
    ) -> Result<usize, OutputError> {
        ensure_parent(&self.path)?;

        let write_err = |source| OutputError::Write {
            path: self.path.clone(),
            source,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        let mut writer = BufWriter::new(file);

        for record in records {
            let observation = ObservationRecord::from_history(record, now);
            let line =
                serde_json::to_string(&observation).map_err(|e| OutputError::Serialization {
                    what: "observation".to_string(),
                    message: e.to_string(),
                })?;
            writeln!(writer, "{line}").map_err(write_err)?;
        }
        writer.flush().map_err(write_err)?;

        info!(path = %self.path.display(), written = records.len(), "observations appended");
        Ok(records.len())
    }
}
