//! The active story list.

use crate::models::{Category, Story};

/// A slice of the id list to fetch, tagged with the generation it was planned
/// against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub generation: u64,
    pub ids: Vec<u64>,
}

impl Batch {
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Ids for one category plus the stories materialized from them so far.
///
/// Invariants:
/// - `cursor == stories.len() + skipped.len()` and `cursor <= ids.len()`
/// - `ids[..cursor]` is `stories` and `skipped` interleaved in rank order
///
/// The cursor advances when a story is accepted or an id is skipped. An id
/// whose fetch failed transiently stays at the cursor and heads the next
/// batch.
#[derive(Debug, Clone, Default)]
pub struct StoryFeed {
    category: Category,
    ids: Vec<u64>,
    stories: Vec<Story>,
    skipped: Vec<u64>,
    cursor: usize,
    generation: u64,
}

impl StoryFeed {
    pub fn new(category: Category) -> Self {
        Self {
            category,
            ..Self::default()
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn ids(&self) -> &[u64] {
        &self.ids
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    pub fn story(&self, id: u64) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }

    pub fn story_mut(&mut self, id: u64) -> Option<&mut Story> {
        self.stories.iter_mut().find(|s| s.id == id)
    }

    /// Number of ids already consumed, materialized or skipped.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Ids given up on because they can never be fetched.
    pub fn skipped(&self) -> &[u64] {
        &self.skipped
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn has_more(&self) -> bool {
        self.cursor() < self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// True if `ids` is the list already held, element for element.
    pub fn is_same_list(&self, ids: &[u64]) -> bool {
        self.ids == ids
    }

    /// Replace the list. Clears stories, rewinds the cursor and starts a new
    /// generation so in-flight results for the old list are rejected.
    pub fn reset(&mut self, category: Category, ids: Vec<u64>) -> u64 {
        self.category = category;
        self.ids = ids;
        self.stories.clear();
        self.skipped.clear();
        self.cursor = 0;
        self.generation += 1;
        self.generation
    }

    /// The next `batch_size` unfetched ids (fewer at the end of the list).
    pub fn next_batch(&self, batch_size: usize) -> Batch {
        let start = self.cursor();
        let end = start.saturating_add(batch_size).min(self.ids.len());
        Batch {
            generation: self.generation,
            ids: self.ids[start..end].to_vec(),
        }
    }

    /// Append a fetched story.
    ///
    /// Returns `false`, leaving the feed untouched, when the story belongs to
    /// another generation or is not the next id in rank order.
    pub fn accept(&mut self, generation: u64, story: Story) -> bool {
        if generation != self.generation {
            tracing::debug!(
                "Discarding story {} from stale generation {} (current {})",
                story.id,
                generation,
                self.generation
            );
            return false;
        }
        if self.ids.get(self.cursor) != Some(&story.id) {
            tracing::debug!("Discarding out-of-order story {}", story.id);
            return false;
        }
        self.stories.push(story);
        self.cursor += 1;
        true
    }

    /// Step past the id at the cursor without a story, for items that will
    /// never resolve (deleted, or not a story).
    ///
    /// Returns the skipped id, or `None` for a stale generation or an
    /// exhausted list.
    pub fn skip_next(&mut self, generation: u64) -> Option<u64> {
        if generation != self.generation {
            tracing::debug!("Not skipping for stale generation {}", generation);
            return None;
        }
        let id = *self.ids.get(self.cursor)?;
        tracing::info!("Skipping unavailable item {}", id);
        self.skipped.push(id);
        self.cursor += 1;
        Some(id)
    }
}
