//! File-backed tracing setup.
//!
//! The TUI owns stdout, so log lines go to a file instead. Failing to open
//! the file disables logging; it never stops the app from starting.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::error::LuxxorResult;

/// Install the global subscriber described by `config`.
///
/// Returns `Ok(false)` when logging is disabled or a subscriber was already
/// installed.
pub fn init_logging(config: &AppConfig) -> LuxxorResult<bool> {
    let Some(path) = config.log_file.as_deref() else {
        return Ok(false);
    };

    let file = open_log_file(path)?;
    let filter = EnvFilter::try_new(&config.log_filter)
        .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .is_ok();

    if installed {
        tracing::info!(version = env!("CARGO_PKG_VERSION"), "luxxor starting");
    }
    Ok(installed)
}

fn open_log_file(path: &Path) -> LuxxorResult<fs::File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
