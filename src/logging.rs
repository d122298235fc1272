//! Tracing subscriber setup.
//!
//! The terminal belongs to the TUI, so logs always go to a file.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::config::LoggingConfig;

/// Default log location: `<data_local_dir>/flashcard/flashcard.log`.
pub fn default_log_path() -> PathBuf {
    let data_dir = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    data_dir.join("flashcard").join("flashcard.log")
}

pub fn log_path(config: &LoggingConfig) -> PathBuf {
    config
        .file
        .as_deref()
        .map(PathBuf::from)
        .unwrap_or_else(default_log_path)
}

fn open_log_file(path: &Path) -> std::io::Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Install the global subscriber. `RUST_LOG` wins over the configured level.
pub fn init_tracing(config: &LoggingConfig) -> std::io::Result<PathBuf> {
    let path = log_path(config);
    let file = open_log_file(&path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .with_writer(std::sync::Mutex::new(file))
        .init();

    Ok(path)
}
