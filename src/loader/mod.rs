//! Story and comment loading.
//!
//! - [`StoryFeed`] - synchronous state of the active list: ids, materialized
//!   stories, cursor, generation
//! - [`StoryLoader`] - paced, sequential batch fetching into a feed
//! - [`CommentLoader`] - concurrent fetch of a story's first comments
//!
//! The controller runs the loaders in spawned tasks and applies their results
//! to the feed as messages arrive; `StoryLoader` also offers awaited
//! `start_category` / `load_more` / `refresh` for callers that own the feed
//! directly (the `--print` mode).

mod comments;
mod feed;
mod stories;

pub use comments::{CommentLoader, DEFAULT_COMMENT_LIMIT};
pub use feed::{Batch, StoryFeed};
pub use stories::{RefreshOutcome, StoryLoader, DEFAULT_BATCH_SIZE};
