//! Fetch errors.

use thiserror::Error;

use crate::traits::HttpError;

/// Failure to retrieve or decode a resource from the item API.
///
/// Every variant carries the URL that failed so log lines can be traced back
/// to a request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("could not reach {url}: {message}")]
    Network { url: String, message: String },

    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("malformed response from {url}: {message}")]
    Malformed { url: String, message: String },

    #[error("{url} returned no data")]
    NotFound { url: String },
}

impl FetchError {
    /// Classify a transport error for `url`.
    pub fn from_http(err: HttpError, url: &str) -> Self {
        let url = url.to_string();
        match err {
            HttpError::Timeout(_) => FetchError::Timeout { url },
            HttpError::ServerError { status, .. } => FetchError::Status { url, status },
            HttpError::ConnectionFailed(message)
            | HttpError::InvalidUrl(message)
            | HttpError::Other(message) => FetchError::Network { url, message },
        }
    }

    /// Decoding `url`'s body failed.
    pub fn malformed(url: &str, err: serde_json::Error) -> Self {
        FetchError::Malformed {
            url: url.to_string(),
            message: err.to_string(),
        }
    }

    /// The URL of the failed request.
    pub fn url(&self) -> &str {
        match self {
            FetchError::Network { url, .. }
            | FetchError::Timeout { url }
            | FetchError::Status { url, .. }
            | FetchError::Malformed { url, .. }
            | FetchError::NotFound { url } => url,
        }
    }

    /// Short text for the transient notice line.
    pub fn user_message(&self) -> String {
        match self {
            FetchError::Network { .. } => {
                "Unable to reach Hacker News. Check your connection.".to_string()
            }
            FetchError::Timeout { .. } => "Hacker News took too long to answer.".to_string(),
            FetchError::Status { status, .. } => match *status {
                429 => "Too many requests. Wait a moment and try again.".to_string(),
                500..=599 => "Hacker News is having trouble. Try again later.".to_string(),
                _ => format!("Request failed (HTTP {}).", status),
            },
            FetchError::Malformed { .. } => "Received an unreadable response.".to_string(),
            FetchError::NotFound { .. } => "That item does not exist.".to_string(),
        }
    }

    /// True when retrying the same request cannot succeed: the item is gone
    /// or is not the shape asked for.
    pub fn is_permanent(&self) -> bool {
        matches!(
            self,
            FetchError::NotFound { .. } | FetchError::Malformed { .. }
        )
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            FetchError::Network { .. } => "E_FETCH_NET",
            FetchError::Timeout { .. } => "E_FETCH_TIMEOUT",
            FetchError::Status { .. } => "E_FETCH_STATUS",
            FetchError::Malformed { .. } => "E_FETCH_MALFORMED",
            FetchError::NotFound { .. } => "E_FETCH_NOT_FOUND",
        }
    }
}
