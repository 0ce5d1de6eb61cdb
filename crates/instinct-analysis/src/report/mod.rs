//! Read-only analysis of the history log and its console rendering.

pub mod analysis;
pub mod console;

pub use analysis::{AnalysisReport, ProjectWorkflow, RankedEntry, TimeRange};
pub use console::ConsoleReporter;
