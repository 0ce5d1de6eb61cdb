//! Configuration system for the converter.
//! TOML-based, layered resolution: CLI > env > project > user > defaults.

pub mod extraction_config;
pub mod instinct_config;
pub mod paths_config;

pub use extraction_config::ExtractionConfig;
pub use instinct_config::{CliOverrides, InstinctConfig};
pub use paths_config::{PathsConfig, ResolvedPaths};
