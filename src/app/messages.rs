//! AppMessage enum for async communication within the application.

use crate::error::FetchError;
use crate::models::{Category, Comment, Story, UserProfile};

use super::types::IdsMode;

/// Results of spawned fetch tasks, applied on the UI task.
///
/// Every variant carries the token captured when the task started so the
/// handler can drop results that no longer apply.
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// Id list fetched
    StoryIdsLoaded {
        ticket: u64,
        category: Category,
        ids: Vec<u64>,
        mode: IdsMode,
    },
    /// Id list fetch failed
    StoryIdsFailed {
        ticket: u64,
        category: Category,
        error: FetchError,
    },
    /// One story of a batch resolved
    StoryLoaded { generation: u64, story: Story },
    /// Every story of a batch resolved
    BatchComplete { generation: u64 },
    /// A batch stopped at a failing item
    BatchFailed { generation: u64, error: FetchError },
    /// Top-level comments of a story fetched
    CommentsLoaded {
        story_id: u64,
        comments: Vec<Comment>,
    },
    /// Comment fan-out failed
    CommentsFailed { story_id: u64, error: FetchError },
    /// User profile fetched
    UserLoaded { handle: String, user: UserProfile },
    /// User profile fetch failed
    UserFailed { handle: String, error: FetchError },
}
