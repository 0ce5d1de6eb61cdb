//! One parsed line of `history.jsonl`.

use serde::{Deserialize, Deserializer, Serialize};

/// A single history entry. Every field is optional; unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryRecord {
    /// Milliseconds since the Unix epoch.
    #[serde(default, deserialize_with = "lenient_millis")]
    pub timestamp: Option<i64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub display: Option<String>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub project: Option<String>,
    #[serde(default, rename = "sessionId", deserialize_with = "lenient_string")]
    pub session_id: Option<String>,
}

impl HistoryRecord {
    /// Command text, `""` when absent.
    pub fn display(&self) -> &str {
        self.display.as_deref().unwrap_or("")
    }

    /// Project identifier, `""` when absent.
    pub fn project(&self) -> &str {
        self.project.as_deref().unwrap_or("")
    }

    /// Session identifier, `""` when absent.
    pub fn session_id(&self) -> &str {
        self.session_id.as_deref().unwrap_or("")
    }

    /// Timestamp in epoch milliseconds. Zero is treated as absent.
    pub fn timestamp_millis(&self) -> Option<i64> {
        self.timestamp.filter(|ts| *ts != 0)
    }
}

/// Accepts integer or float milliseconds; any other JSON type yields `None`
/// instead of rejecting the whole line.
fn lenient_millis<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|v| v.as_i64().or_else(|| v.as_f64().map(|f| f as i64))))
}

/// Accepts a JSON string; any other JSON type yields `None` so a wrong-typed
/// field never drops the line.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(serde_json::Value::String(s)) => Some(s),
        _ => None,
    })
}
