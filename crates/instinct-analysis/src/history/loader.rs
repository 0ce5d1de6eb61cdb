//! Streaming JSONL loader.
//!
//! Blank lines are skipped. Lines that are not UTF-8, not JSON, or not a JSON
//! object are dropped and counted in `LoadedHistory::skipped`.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use instinct_core::errors::HistoryError;
use tracing::{debug, info};

use super::record::HistoryRecord;

/// Records in file order plus the number of lines that failed to parse.
#[derive(Debug, Clone, Default)]
pub struct LoadedHistory {
    pub source: PathBuf,
    pub records: Vec<HistoryRecord>,
    pub skipped: usize,
}

impl LoadedHistory {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Open `path` and stream it line by line.
pub fn load_history(path: &Path) -> Result<LoadedHistory, HistoryError> {
    let file = File::open(path).map_err(|e| HistoryError::from_io(path, e))?;
    let (records, skipped) =
        read_history(BufReader::new(file)).map_err(|e| HistoryError::from_io(path, e))?;

    info!(path = %path.display(), records = records.len(), skipped, "history loaded");

    Ok(LoadedHistory {
        source: path.to_path_buf(),
        records,
        skipped,
    })
}

/// Parse every line from `reader`. Returns the records and the skipped count.
pub fn read_history<R: BufRead>(reader: R) -> std::io::Result<(Vec<HistoryRecord>, usize)> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (index, raw) in reader.split(b'\n').enumerate() {
        let raw = raw?;
        let Ok(line) = std::str::from_utf8(&raw) else {
            debug!(line = index + 1, "skipping non-UTF-8 line");
            skipped += 1;
            continue;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match parse_line(line) {
            Some(record) => records.push(record),
            None => {
                debug!(line = index + 1, "skipping malformed line");
                skipped += 1;
            }
        }
    }

    Ok((records, skipped))
}

fn parse_line(line: &str) -> Option<HistoryRecord> {
    let value: serde_json::Value = serde_json::from_str(line).ok()?;
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}
