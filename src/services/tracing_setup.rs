//! Global tracing subscriber writing to a log file.
//!
//! The terminal belongs to the editor while it runs, so diagnostics never go
//! to stdout or stderr.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "HUNT_LOG";

/// Default log location, `<temp dir>/hunt.log`.
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join("hunt.log")
}

/// Install the global subscriber. `HUNT_LOG` overrides `default_filter`.
///
/// Failing to open the log file is not fatal: the editor runs without logs.
pub fn init_global(log_file: &Path, default_filter: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let file = match OpenOptions::new().create(true).append(true).open(log_file) {
        Ok(file) => file,
        Err(e) => {
            eprintln!("warning: cannot open log file {}: {}", log_file.display(), e);
            return;
        }
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}
