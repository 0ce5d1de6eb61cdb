//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the tracing/logging system.
///
/// Reads `INSTINCT_LOG` for per-module log levels, e.g.
/// `INSTINCT_LOG=instinct_analysis=debug,instinct_cli=info`.
///
/// Falls back to warnings only when `INSTINCT_LOG` is unset or invalid.
/// Events go to stderr so the console report on stdout stays clean.
///
/// Idempotent: later calls are no-ops.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("INSTINCT_LOG")
            .unwrap_or_else(|_| EnvFilter::new("instinct=warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
