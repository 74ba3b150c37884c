//! Items: stories and comments.

use serde::{Deserialize, Serialize};

/// The `type` field of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemKind {
    #[default]
    Story,
    Comment,
    Job,
    Poll,
    Pollopt,
    #[serde(other)]
    Unknown,
}

/// A story as returned by `/item/{id}.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub id: u64,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub score: i64,
    pub by: String,
    /// Creation time, unix seconds.
    pub time: i64,
    /// Job postings omit this.
    #[serde(default)]
    pub descendants: u32,
    #[serde(rename = "type", default)]
    pub kind: ItemKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<u64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Populated when the comment panel is opened.
    #[serde(skip)]
    pub comments: Option<Vec<Comment>>,
}

impl Story {
    /// Child comment ids, empty when the story has none.
    pub fn kid_ids(&self) -> &[u64] {
        self.kids.as_deref().unwrap_or(&[])
    }

    /// Discussion page on the website.
    pub fn discussion_url(&self) -> String {
        format!("https://news.ycombinator.com/item?id={}", self.id)
    }

    /// External link, or the discussion page for self posts.
    pub fn link(&self) -> String {
        self.url.clone().unwrap_or_else(|| self.discussion_url())
    }
}

/// A top-level comment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Empty for deleted comments.
    #[serde(default)]
    pub by: String,
    pub time: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kids: Option<Vec<u64>>,
    #[serde(default)]
    pub deleted: bool,
    #[serde(default)]
    pub dead: bool,
}

impl Comment {
    /// Deleted or flagged comments have nothing worth showing.
    pub fn is_visible(&self) -> bool {
        !self.deleted && !self.dead
    }

    pub fn reply_count(&self) -> usize {
        self.kids.as_ref().map_or(0, Vec::len)
    }
}
