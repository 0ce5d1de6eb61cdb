//! Command-line surface.

use std::path::PathBuf;

use clap::{CommandFactory, Parser};
use instinct_core::config::CliOverrides;

#[derive(Parser, Debug)]
#[command(
    name = "history-to-instincts",
    version,
    about = "Convert ~/.claude/history.jsonl into observations and instincts"
)]
pub struct Cli {
    /// Print frequency statistics and detected patterns
    #[arg(long)]
    pub analyze: bool,

    /// Append every history entry to the observation log
    #[arg(long)]
    pub to_observations: bool,

    /// Write one instinct file per command domain
    #[arg(long)]
    pub extract_instincts: bool,

    /// Export frequent commands as YAML (default: history-instincts.yaml)
    #[arg(long, value_name = "PATH", num_args = 0..=1)]
    pub export_yaml: Option<Option<PathBuf>>,

    /// Run every action
    #[arg(long)]
    pub all: bool,

    /// History log to read
    #[arg(long, value_name = "PATH")]
    pub history: Option<PathBuf>,

    /// Observation log to append to
    #[arg(long, value_name = "PATH")]
    pub observations: Option<PathBuf>,

    /// Directory for instinct files
    #[arg(long, value_name = "DIR")]
    pub instincts_dir: Option<PathBuf>,

    /// Config file (replaces ./instinct.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// Which actions to run, in fixed order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Actions {
    pub analyze: bool,
    pub to_observations: bool,
    pub extract_instincts: bool,
    pub export_yaml: bool,
}

impl Actions {
    pub fn any(&self) -> bool {
        self.analyze || self.to_observations || self.extract_instincts || self.export_yaml
    }
}

impl Cli {
    pub fn actions(&self) -> Actions {
        Actions {
            analyze: self.analyze || self.all,
            to_observations: self.to_observations || self.all,
            extract_instincts: self.extract_instincts || self.all,
            export_yaml: self.export_yaml.is_some() || self.all,
        }
    }

    pub fn overrides(&self) -> CliOverrides {
        CliOverrides {
            config_file: self.config.clone(),
            history_file: self.history.clone(),
            observations_file: self.observations.clone(),
            instincts_dir: self.instincts_dir.clone(),
            export_file: self.export_yaml.clone().flatten(),
        }
    }

    pub fn help_text() -> String {
        Self::command().render_help().to_string()
    }
}
