//! Paced story batch loading.

use std::sync::Arc;

use crate::client::HnClient;
use crate::error::FetchError;
use crate::models::{Category, Story};
use crate::pacing::RequestGate;

use super::feed::StoryFeed;

pub const DEFAULT_BATCH_SIZE: usize = 30;

/// Result of a successful refresh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// The id list did not change; stories were left alone.
    Unchanged,
    /// The list changed and the first batch was reloaded.
    Reloaded,
}

/// Fetches id lists and materializes them into stories in batches.
///
/// Items within a batch are requested strictly one at a time, each after the
/// gate releases.
#[derive(Clone)]
pub struct StoryLoader {
    client: Arc<HnClient>,
    gate: Arc<dyn RequestGate>,
    batch_size: usize,
}

impl StoryLoader {
    pub fn new(client: Arc<HnClient>, gate: Arc<dyn RequestGate>, batch_size: usize) -> Self {
        Self {
            client,
            gate,
            batch_size: batch_size.max(1),
        }
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub async fn fetch_ids(&self, category: Category) -> Result<Vec<u64>, FetchError> {
        self.client.fetch_story_ids(category).await
    }

    /// Fetch `ids` in order, handing each story to `on_story` as soon as it
    /// resolves. Stops at the first failure; stories already handed over are
    /// not taken back.
    pub async fn load_batch<F>(&self, ids: &[u64], mut on_story: F) -> Result<(), FetchError>
    where
        F: FnMut(Story) + Send,
    {
        for &id in ids {
            self.gate.acquire().await;
            let story = self.client.fetch_story(id).await?;
            on_story(story);
        }
        Ok(())
    }

    /// Switch `feed` to `category` and load its first batch.
    ///
    /// If the id list cannot be fetched, `feed` is left as it was.
    pub async fn start_category(
        &self,
        feed: &mut StoryFeed,
        category: Category,
    ) -> Result<(), FetchError> {
        let ids = self.fetch_ids(category).await?;
        tracing::info!("Loaded {} ids for {}", ids.len(), category);
        feed.reset(category, ids);
        self.load_more(feed).await
    }

    /// Load the next batch into `feed`.
    ///
    /// An item that can never be fetched is skipped before the error is
    /// returned, so the next call continues after it.
    pub async fn load_more(&self, feed: &mut StoryFeed) -> Result<(), FetchError> {
        let batch = feed.next_batch(self.batch_size);
        let result = self
            .load_batch(&batch.ids, |story| {
                feed.accept(batch.generation, story);
            })
            .await;
        if let Err(e) = &result {
            if e.is_permanent() {
                feed.skip_next(batch.generation);
            }
        }
        result
    }

    /// Re-fetch the id list of the feed's category and reload only if it
    /// changed.
    pub async fn refresh(&self, feed: &mut StoryFeed) -> Result<RefreshOutcome, FetchError> {
        let category = feed.category();
        let ids = self.fetch_ids(category).await?;
        if feed.is_same_list(&ids) {
            tracing::info!("Refresh of {}: no new stories", category);
            return Ok(RefreshOutcome::Unchanged);
        }
        feed.reset(category, ids);
        self.load_more(feed).await?;
        Ok(RefreshOutcome::Reloaded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::pacing::FixedIntervalGate;
    use std::time::Duration;

    const BASE: &str = "https://hn.test/v0";

    fn story_json(id: u64) -> String {
        format!(
            r#"{{"id":{},"title":"Story {}","score":1,"by":"a","time":0,"descendants":0}}"#,
            id, id
        )
    }

    fn setup(ids: &[u64], batch_size: usize, interval: Duration) -> (StoryLoader, MockHttpClient) {
        let http = MockHttpClient::new();
        http.set_json(
            &format!("{}/topstories.json", BASE),
            serde_json::to_string(ids).unwrap(),
        );
        for &id in ids {
            http.set_json(&format!("{}/item/{}.json", BASE, id), story_json(id));
        }
        let client = Arc::new(HnClient::with_base_url(Arc::new(http.clone()), BASE));
        let loader = StoryLoader::new(client, Arc::new(FixedIntervalGate::new(interval)), batch_size);
        (loader, http)
    }

    #[test]
    fn test_batch_size_is_at_least_one() {
        let (loader, _) = setup(&[], 0, Duration::ZERO);
        assert_eq!(loader.batch_size(), 1);
    }

    #[tokio::test]
    async fn test_load_batch_preserves_order() {
        let (loader, http) = setup(&[3, 1, 2], 30, Duration::ZERO);
        let mut seen = Vec::new();

        loader
            .load_batch(&[3, 1, 2], |story| seen.push(story.id))
            .await
            .unwrap();

        assert_eq!(seen, vec![3, 1, 2]);
        assert_eq!(
            http.requested_urls(),
            vec![
                format!("{}/item/3.json", BASE),
                format!("{}/item/1.json", BASE),
                format!("{}/item/2.json", BASE),
            ]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_load_batch_is_sequential_and_paced() {
        let (loader, http) = setup(&[1, 2, 3], 30, Duration::from_millis(100));
        http.set_latency(Duration::from_millis(10));
        let start = tokio::time::Instant::now();

        loader.load_batch(&[1, 2, 3], |_| {}).await.unwrap();

        assert_eq!(http.max_in_flight(), 1);
        assert!(start.elapsed() >= Duration::from_millis(330));
    }

    #[tokio::test]
    async fn test_refresh_unchanged_keeps_feed() {
        let (loader, http) = setup(&[1, 2], 30, Duration::ZERO);
        let mut feed = StoryFeed::new(Category::Top);
        loader.start_category(&mut feed, Category::Top).await.unwrap();
        let generation = feed.generation();
        http.clear_requests();

        let outcome = loader.refresh(&mut feed).await.unwrap();

        assert_eq!(outcome, RefreshOutcome::Unchanged);
        assert_eq!(feed.generation(), generation);
        assert_eq!(feed.cursor(), 2);
        assert_eq!(http.requested_urls(), vec![format!("{}/topstories.json", BASE)]);
    }
}
