//! Tally → scored, classified command patterns.

use serde::Serialize;
use tracing::debug;

use super::confidence::confidence;
use super::domain::{Domain, RuleVariant};
use super::tally::Tally;

/// A frequently used command with its score and domain.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CommandPattern {
    pub command: String,
    pub count: usize,
    pub confidence: f64,
    pub domain: Domain,
}

/// Selection parameters for `extract_patterns`.
#[derive(Debug, Clone, Copy)]
pub struct PatternQuery {
    /// Drop commands seen fewer times than this.
    pub min_occurrences: u32,
    /// Consider only the top-N commands before filtering; `None` = all.
    pub limit: Option<usize>,
    pub variant: RuleVariant,
}

/// Score and classify the tallied commands.
///
/// `total_records` is the confidence denominator. Output keeps tally order
/// (descending count, ties by first encounter).
pub fn extract_patterns(
    tally: &Tally<'_>,
    total_records: usize,
    query: PatternQuery,
) -> Vec<CommandPattern> {
    let rules = query.variant.rules();
    let patterns: Vec<CommandPattern> = tally
        .most_common(query.limit)
        .into_iter()
        .filter(|(_, count)| *count >= query.min_occurrences as usize)
        .map(|(command, count)| CommandPattern {
            command: command.to_string(),
            count,
            confidence: confidence(count, total_records),
            domain: rules.classify(command),
        })
        .collect();

    debug!(
        rules = rules.name,
        distinct = tally.distinct(),
        patterns = patterns.len(),
        "patterns extracted"
    );
    patterns
}
