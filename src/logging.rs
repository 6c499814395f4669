//! Log subscriber setup
//!
//! The terminal owns stdout, so logs only go to a file when one is given.
//! Filtering follows `RUST_LOG`, defaulting to `info`.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::ConfigError;

pub fn init(log_file: Option<&Path>) -> Result<(), ConfigError> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| ConfigError::LogFile {
            path: path.to_path_buf(),
            source,
        })?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| ConfigError::Logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(())
}
