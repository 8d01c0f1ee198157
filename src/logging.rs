//! File logging via `tracing`.
//!
//! The terminal belongs to the UI, so everything is written to a log file
//! instead of stderr.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{LoggingSettings, default_log_path};

/// Where logs should go: an explicit path wins over the configured one,
/// which wins over the XDG state directory.
pub fn log_path(cli_override: Option<&Path>, settings: &LoggingSettings) -> Option<PathBuf> {
    cli_override
        .map(Path::to_path_buf)
        .or_else(|| settings.file.clone())
        .or_else(default_log_path)
}

/// `RUST_LOG` when set, otherwise the configured level.
pub fn env_filter(settings: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&settings.level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber. Returns the log file in use, or `None`
/// when no file could be opened (logging is then disabled).
pub fn init(cli_override: Option<&Path>, settings: &LoggingSettings) -> Option<PathBuf> {
    let path = log_path(cli_override, settings)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if fs::create_dir_all(parent).is_err() {
            return None;
        }
    }

    let file = OpenOptions::new().create(true).append(true).open(&path).ok()?;

    tracing_subscriber::fmt()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(env_filter(settings))
        .try_init()
        .ok()?;

    Some(path)
}
