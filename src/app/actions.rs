//! User actions.
//!
//! Each action updates state immediately and, if it needs the network,
//! spawns a task that reports back with an [`AppMessage`]. Loads are
//! serialized by the [`LoadState`] guard; comment and user lookups are not.

use tracing::{debug, info, warn};

use crate::models::Category;
use crate::settings::{CATEGORY_KEY, THEME_KEY};

use super::{App, AppMessage, IdsMode, LoadState, NoticeLevel};

impl App {
    /// Kick off the first load of the feed's category.
    pub fn start(&mut self) {
        let category = self.feed.category();
        self.fetch_ids(category, IdsMode::Replace, LoadState::Loading);
    }

    /// Switch to `category`.
    ///
    /// Ignored while a load is in flight; a no-op if `category` is already
    /// displayed.
    pub fn select_category(&mut self, category: Category) {
        if self.is_busy() {
            debug!("Ignoring switch to {} while {:?}", category, self.load_state);
            return;
        }
        if category == self.feed.category() && !self.feed.ids().is_empty() {
            debug!("{} is already displayed", category);
            return;
        }
        self.fetch_ids(category, IdsMode::Replace, LoadState::Loading);
    }

    pub fn next_category(&mut self) {
        self.select_category(self.feed.category().next());
    }

    pub fn prev_category(&mut self) {
        self.select_category(self.feed.category().prev());
    }

    /// Re-fetch the current category's id list; reload only if it changed.
    pub fn refresh(&mut self) {
        if self.is_busy() {
            debug!("Ignoring refresh while {:?}", self.load_state);
            return;
        }
        let category = self.feed.category();
        self.fetch_ids(category, IdsMode::Refresh, LoadState::Refreshing);
    }

    /// Load the next batch of the current list.
    pub fn load_more(&mut self) {
        if self.is_busy() {
            debug!("Ignoring load more while {:?}", self.load_state);
            return;
        }
        if !self.feed.has_more() {
            debug!("Ignoring load more: list exhausted");
            return;
        }
        self.load_state = LoadState::LoadingMore;
        self.mark_dirty();
        self.spawn_batch();
    }

    /// Enter on the list: load more on the trailing row, otherwise toggle
    /// comments.
    pub fn activate_selected(&mut self) {
        if self.load_more_selected() {
            self.load_more();
        } else {
            self.toggle_comments();
        }
    }

    /// Toggle comments of the selected story.
    pub fn toggle_comments(&mut self) {
        if let Some(id) = self.selected_story().map(|s| s.id) {
            self.toggle_comments_for(id);
        }
    }

    /// Expand or collapse the comments of story `id`.
    ///
    /// Collapsing never fetches. Toggling a story whose comments are still in
    /// flight cancels the fetch. Expanding always fetches anew.
    pub fn toggle_comments_for(&mut self, id: u64) {
        self.mark_dirty();

        if self.expanded_story == Some(id) {
            self.collapse_comments();
            return;
        }
        if self.pending_comments == Some(id) {
            debug!("Cancelling comment fetch for story {}", id);
            self.pending_comments = None;
            return;
        }

        let Some(story) = self.feed.story(id) else {
            debug!("Story {} is not in the feed", id);
            return;
        };
        let kids = story.kid_ids().to_vec();

        self.collapse_comments();
        self.pending_comments = Some(id);

        let loader = self.comment_loader.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match loader.load(&kids).await {
                Ok(comments) => AppMessage::CommentsLoaded {
                    story_id: id,
                    comments,
                },
                Err(error) => AppMessage::CommentsFailed { story_id: id, error },
            };
            let _ = tx.send(msg);
        });
    }

    fn collapse_comments(&mut self) {
        if let Some(id) = self.expanded_story.take() {
            if let Some(story) = self.feed.story_mut(id) {
                story.comments = None;
            }
        }
    }

    /// Look up the author of the selected story.
    pub fn view_user(&mut self) {
        let Some(handle) = self.selected_story().map(|s| s.by.clone()) else {
            return;
        };
        if handle.is_empty() {
            return;
        }
        self.lookup_user(handle);
    }

    /// Fetch and show the profile of `handle`.
    pub fn lookup_user(&mut self, handle: String) {
        if self.pending_user.as_deref() == Some(handle.as_str()) {
            return;
        }
        self.pending_user = Some(handle.clone());
        self.mark_dirty();

        let client = self.client.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match client.fetch_user(&handle).await {
                Ok(user) => AppMessage::UserLoaded { handle, user },
                Err(error) => AppMessage::UserFailed { handle, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Esc: close the user panel, else collapse comments.
    pub fn close_panel(&mut self) {
        self.pending_user = None;
        if self.selected_user.take().is_some() {
            self.mark_dirty();
            return;
        }
        if self.expanded_story.is_some() || self.pending_comments.is_some() {
            self.pending_comments = None;
            self.collapse_comments();
            self.mark_dirty();
        }
    }

    /// Switch between light and dark and persist the choice.
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        self.mark_dirty();
        if let Err(e) = self.settings.set(THEME_KEY, self.theme.as_str()) {
            warn!("Failed to save theme: {}", e);
        }
    }

    /// Open the selected story's link (or its discussion page) in the
    /// browser.
    pub fn open_selected(&mut self) {
        let Some(link) = self.selected_story().map(|s| s.link()) else {
            return;
        };
        info!("Opening {}", link);
        if let Err(e) = open::that(&link) {
            warn!("Failed to open {}: {}", link, e);
            self.set_notice(format!("Could not open {}", link), NoticeLevel::Error);
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Enter `state` and fetch the id list of `category` in the background.
    fn fetch_ids(&mut self, category: Category, mode: IdsMode, state: LoadState) {
        self.load_state = state;
        self.pending_category = Some(category);
        self.mark_dirty();

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.active_ticket = Some(ticket);

        let loader = self.story_loader.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let msg = match loader.fetch_ids(category).await {
                Ok(ids) => AppMessage::StoryIdsLoaded {
                    ticket,
                    category,
                    ids,
                    mode,
                },
                Err(error) => AppMessage::StoryIdsFailed {
                    ticket,
                    category,
                    error,
                },
            };
            let _ = tx.send(msg);
        });
    }

    /// Fetch the feed's next batch in the background, one message per story.
    pub(super) fn spawn_batch(&mut self) {
        let batch = self.feed.next_batch(self.story_loader.batch_size());
        if batch.is_empty() {
            self.load_state = LoadState::Idle;
            return;
        }

        let loader = self.story_loader.clone();
        let tx = self.message_tx.clone();
        tokio::spawn(async move {
            let generation = batch.generation;
            let result = loader
                .load_batch(&batch.ids, |story| {
                    let _ = tx.send(AppMessage::StoryLoaded { generation, story });
                })
                .await;
            let msg = match result {
                Ok(()) => AppMessage::BatchComplete { generation },
                Err(error) => AppMessage::BatchFailed { generation, error },
            };
            let _ = tx.send(msg);
        });
    }

    /// Remember the active category for the next start.
    pub(super) fn persist_category(&self, category: Category) {
        if let Err(e) = self.settings.set(CATEGORY_KEY, category.as_str()) {
            warn!("Failed to save category: {}", e);
        }
    }

    pub(super) fn is_active_ticket(&self, ticket: u64) -> bool {
        self.active_ticket == Some(ticket)
    }

    pub(super) fn clear_ticket(&mut self) {
        self.active_ticket = None;
        self.pending_category = None;
    }
}
