//! User profiles.

use serde::{Deserialize, Serialize};

/// A user as returned by `/user/{handle}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The handle.
    pub id: String,
    /// Account creation time, unix seconds.
    pub created: i64,
    pub karma: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub about: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub submitted: Option<Vec<u64>>,
}

impl UserProfile {
    pub fn submission_count(&self) -> usize {
        self.submitted.as_ref().map_or(0, Vec::len)
    }
}
