//! Diagnostics for the console.
//!
//! The terminal UI owns stdout and stderr while it runs, so `tracing` output
//! only goes anywhere when a log file is given on the command line.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the `tracing` filter directives.
pub const LOG_ENV: &str = "NOVEL_LOG";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Installs a global subscriber appending plain-text events to `log_file`.
///
/// Does nothing when `log_file` is `None`.
pub fn init_tracing(log_file: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|err| err as Box<dyn std::error::Error>)?;

    tracing::info!(path = %path.display(), "diagnostics enabled");
    Ok(())
}
