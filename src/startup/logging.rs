//! Logging setup.
//!
//! The terminal belongs to the TUI, so `tracing` output goes to
//! `<data dir>/hnr.log`. The filter comes from `HNR_LOG` (standard
//! `EnvFilter` syntax) and defaults to `hnr=info`.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

/// The log file name.
const LOG_FILE: &str = "hnr.log";

/// Environment variable holding the filter directive.
pub const LOG_ENV: &str = "HNR_LOG";

const DEFAULT_FILTER: &str = "hnr=info";

/// Filter from `HNR_LOG`, falling back to `hnr=info`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Path of the log file inside `data_dir`.
pub fn log_path(data_dir: &Path) -> PathBuf {
    data_dir.join(LOG_FILE)
}

/// Install the global subscriber, appending to the log file in `data_dir`.
///
/// Returns the log file path.
pub fn init_logging(data_dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(data_dir)
        .wrap_err_with(|| format!("Failed to create data directory {}", data_dir.display()))?;

    let path = log_path(data_dir);
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .wrap_err_with(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!("hnr {} started", env!("CARGO_PKG_VERSION"));
    Ok(path)
}
