//! Story categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A ranked story list exposed by the API as `/{category}stories.json`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Top,
    New,
    Best,
    Ask,
    Show,
    Job,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown category '{0}' (expected one of top, new, best, ask, show, job)")]
pub struct ParseCategoryError(pub String);

impl Category {
    /// All categories in tab order.
    pub const ALL: [Category; 6] = [
        Category::Top,
        Category::New,
        Category::Best,
        Category::Ask,
        Category::Show,
        Category::Job,
    ];

    /// Lowercase API name, also the persisted settings value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Top => "top",
            Category::New => "new",
            Category::Best => "best",
            Category::Ask => "ask",
            Category::Show => "show",
            Category::Job => "job",
        }
    }

    /// Tab label.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Top => "Top",
            Category::New => "New",
            Category::Best => "Best",
            Category::Ask => "Ask",
            Category::Show => "Show",
            Category::Job => "Jobs",
        }
    }

    /// Path of the id list endpoint, relative to the API base.
    pub fn endpoint(&self) -> String {
        format!("{}stories.json", self.as_str())
    }

    /// Position in [`Category::ALL`].
    pub fn index(&self) -> usize {
        Category::ALL
            .iter()
            .position(|c| c == self)
            .unwrap_or_default()
    }

    /// Category for a 1-based number key.
    pub fn from_number(n: u32) -> Option<Category> {
        let idx = usize::try_from(n).ok()?.checked_sub(1)?;
        Category::ALL.get(idx).copied()
    }

    pub fn next(&self) -> Category {
        Category::ALL[(self.index() + 1) % Category::ALL.len()]
    }

    pub fn prev(&self) -> Category {
        let len = Category::ALL.len();
        Category::ALL[(self.index() + len - 1) % len]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Category::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}
