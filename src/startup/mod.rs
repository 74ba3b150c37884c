//! Startup: configuration and logging.
//!
//! # Components
//!
//! - [`config`] - [`AppConfig`] with builder methods and environment overrides
//! - [`logging`] - file-backed tracing subscriber
//!
//! # Usage
//!
//! ```ignore
//! use hnr::startup::{init_logging, AppConfig};
//!
//! let config = AppConfig::from_env();
//! let _log_path = init_logging(&config.data_dir)?;
//! ```

pub mod config;
pub mod logging;

pub use config::AppConfig;
pub use logging::init_logging;
