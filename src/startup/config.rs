//! Application configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::client::HN_API_BASE_URL;
use crate::loader::{DEFAULT_BATCH_SIZE, DEFAULT_COMMENT_LIMIT};
use crate::models::Category;
use crate::pacing::FixedIntervalGate;

/// The data directory name under the home directory.
const DATA_DIR: &str = ".hnr";

/// Configuration for the reader.
///
/// Use the builder pattern to customize behavior.
///
/// # Example
///
/// ```ignore
/// use hnr::startup::AppConfig;
///
/// let config = AppConfig::default()
///     .with_batch_size(20)
///     .with_pacing_interval(Duration::from_millis(250));
/// ```
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// API base URL (default: the public Firebase endpoint)
    pub api_base_url: String,
    /// Stories materialized per load (default: 30)
    pub batch_size: usize,
    /// Delay before each story request (default: 100ms)
    pub pacing_interval: Duration,
    /// Top-level comments fetched per story (default: 10)
    pub comment_limit: usize,
    /// How long a notice stays on screen (default: 2s)
    pub notice_ttl: Duration,
    /// Transport timeout per request (default: 10s)
    pub request_timeout: Duration,
    /// Where settings and the log file live (default: ~/.hnr)
    pub data_dir: PathBuf,
    /// Category to open with, overriding the saved one
    pub initial_category: Option<Category>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: HN_API_BASE_URL.to_string(),
            batch_size: DEFAULT_BATCH_SIZE,
            pacing_interval: FixedIntervalGate::DEFAULT_INTERVAL,
            comment_limit: DEFAULT_COMMENT_LIMIT,
            notice_ttl: Duration::from_secs(2),
            request_timeout: Duration::from_secs(10),
            data_dir: default_data_dir(),
            initial_category: None,
        }
    }
}

impl AppConfig {
    /// Create a new AppConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    pub fn with_pacing_interval(mut self, interval: Duration) -> Self {
        self.pacing_interval = interval;
        self
    }

    pub fn with_comment_limit(mut self, limit: usize) -> Self {
        self.comment_limit = limit;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.notice_ttl = ttl;
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_initial_category(mut self, category: Option<Category>) -> Self {
        self.initial_category = category;
        self
    }

    /// Defaults overridden by `HNR_API_URL`, `HNR_BATCH_SIZE`,
    /// `HNR_PACING_MS` and `HNR_HOME`. Unparseable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(url) = std::env::var("HNR_API_URL") {
            if !url.trim().is_empty() {
                config.api_base_url = url.trim().to_string();
            }
        }
        if let Some(size) = env_parse::<usize>("HNR_BATCH_SIZE").filter(|n| *n > 0) {
            config.batch_size = size;
        }
        if let Some(ms) = env_parse::<u64>("HNR_PACING_MS") {
            config.pacing_interval = Duration::from_millis(ms);
        }
        if let Ok(home) = std::env::var("HNR_HOME") {
            if !home.trim().is_empty() {
                config.data_dir = PathBuf::from(home);
            }
        }

        config
    }
}

fn env_parse<T: std::str::FromStr>(key: &str) -> Option<T> {
    std::env::var(key).ok()?.trim().parse().ok()
}

/// `~/.hnr`, or `./.hnr` when there is no home directory.
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(DATA_DIR))
        .unwrap_or_else(|| PathBuf::from(DATA_DIR))
}
