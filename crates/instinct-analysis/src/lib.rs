//! # instinct-analysis
//!
//! History loading → command tallies → domain classification → derived
//! artifacts (analysis report, observation log, instinct files, YAML export).

pub mod history;
pub mod output;
pub mod patterns;
pub mod report;

pub use history::{load_history, HistoryRecord, LoadedHistory};
pub use patterns::{classify, CommandPattern, Domain, RuleVariant, Tally};
pub use report::AnalysisReport;
