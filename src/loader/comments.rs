//! Comment fan-out.

use futures::future::try_join_all;
use std::sync::Arc;

use crate::client::HnClient;
use crate::error::FetchError;
use crate::models::{Comment, Story};

pub const DEFAULT_COMMENT_LIMIT: usize = 10;

/// Fetches the first few top-level comments of a story, all at once.
#[derive(Debug, Clone)]
pub struct CommentLoader {
    client: Arc<HnClient>,
    limit: usize,
}

impl CommentLoader {
    pub fn new(client: Arc<HnClient>, limit: usize) -> Self {
        Self { client, limit }
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    /// The prefix of `kids` that [`CommentLoader::load`] would request.
    pub fn ids_to_fetch<'a>(&self, kids: &'a [u64]) -> &'a [u64] {
        &kids[..kids.len().min(self.limit)]
    }

    /// Fetch the first `limit` comments concurrently, in `kids` order.
    ///
    /// Issues no request when `kids` is empty. Any failure fails the whole
    /// load.
    pub async fn load(&self, kids: &[u64]) -> Result<Vec<Comment>, FetchError> {
        let ids = self.ids_to_fetch(kids);
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        try_join_all(ids.iter().map(|&id| self.client.fetch_comment(id))).await
    }

    /// Load comments and attach them to `story`.
    pub async fn load_into(&self, story: &mut Story) -> Result<(), FetchError> {
        let comments = self.load(story.kid_ids()).await?;
        story.comments = Some(comments);
        Ok(())
    }
}
