//! Tracing initialization.
//!
//! Diagnostics go to stderr. Stdout carries host logging commands and must
//! stay free of log lines.

use tracing_subscriber::{EnvFilter, prelude::*};

/// Env var holding a `tracing` filter directive, e.g. `habitat_tasks=debug`.
pub const LOG_ENV: &str = "HABITAT_TASKS_LOG";

const DEFAULT_LEVEL: &str = "habitat_tasks=warn";
const VERBOSE_LEVEL: &str = "habitat_tasks=debug";

/// Initialize tracing. Call once at process startup.
pub fn init_tracing(verbose: bool) {
    let level = if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false),
        )
        .try_init();
}
