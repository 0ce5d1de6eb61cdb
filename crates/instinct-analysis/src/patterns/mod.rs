//! Command frequency patterns: tallies, confidence, and domain rules.

pub mod confidence;
pub mod domain;
pub mod extractor;
pub mod tally;
pub mod text;

pub use confidence::confidence;
pub use domain::{classify, Domain, DomainRules, RuleVariant};
pub use extractor::{extract_patterns, CommandPattern, PatternQuery};
pub use tally::Tally;
