// Tracing setup.
// The terminal is owned by the UI, so log output goes to a file.

use std::fs::{self, File, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use crate::config::{Config, log_filter};
use crate::error::Result;

/// Install the global tracing subscriber. Without a log path, logging is disabled.
pub fn init(config: &Config) -> Result<()> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(());
    };

    let filter = log_filter(config)?;
    let file = open_log_file(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .init();

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}

/// Open the log file for appending, creating parent directories as needed.
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    Ok(file)
}
