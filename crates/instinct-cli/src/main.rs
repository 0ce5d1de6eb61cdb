//! `history-to-instincts` converts `~/.claude/history.jsonl` into an
//! analysis report, observation log, instinct files, and a YAML export.

mod app;
mod cli;

use std::process::ExitCode;

use clap::Parser;
use instinct_core::errors::{InstinctError, InstinctErrorCode};

use crate::cli::Cli;

fn main() -> ExitCode {
    instinct_core::tracing::init_tracing();

    let cli = Cli::parse();
    match app::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<InstinctError>() {
                Some(inner) => eprintln!("{}", inner.display_string()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}
