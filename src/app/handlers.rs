//! Message handling for the App.

use tracing::{debug, info, warn};

use super::{App, AppMessage, IdsMode, LoadState, NoticeLevel};

impl App {
    /// Handle an incoming async message.
    ///
    /// Results whose token no longer matches (old ticket, old generation,
    /// cancelled comment or user lookup) are dropped.
    pub fn handle_message(&mut self, msg: AppMessage) {
        self.mark_dirty();
        match msg {
            AppMessage::StoryIdsLoaded {
                ticket,
                category,
                ids,
                mode,
            } => {
                if !self.is_active_ticket(ticket) {
                    debug!("Discarding stale id list for {}", category);
                    return;
                }
                self.clear_ticket();

                if mode == IdsMode::Refresh && self.feed.is_same_list(&ids) {
                    info!("Refresh of {}: no new stories", category);
                    self.load_state = LoadState::Idle;
                    self.set_notice("No new stories", NoticeLevel::Info);
                    return;
                }

                info!("Loaded {} ids for {}", ids.len(), category);
                self.feed.reset(category, ids);
                self.expanded_story = None;
                self.pending_comments = None;
                self.selected_index = 0;
                if mode == IdsMode::Replace {
                    self.persist_category(category);
                }
                self.spawn_batch();
            }
            AppMessage::StoryIdsFailed {
                ticket,
                category,
                error,
            } => {
                if !self.is_active_ticket(ticket) {
                    debug!("Discarding stale id list failure for {}", category);
                    return;
                }
                self.clear_ticket();
                warn!("[{}] {}", error.error_code(), error);
                self.load_state = LoadState::Idle;
                self.set_notice(error.user_message(), NoticeLevel::Error);
            }
            AppMessage::StoryLoaded { generation, story } => {
                self.feed.accept(generation, story);
            }
            AppMessage::BatchComplete { generation } => {
                if generation != self.feed.generation() {
                    debug!("Ignoring completion of stale generation {}", generation);
                    return;
                }
                info!(
                    "{}: {} of {} stories loaded",
                    self.feed.category(),
                    self.feed.cursor(),
                    self.feed.ids().len()
                );
                self.load_state = LoadState::Idle;
            }
            AppMessage::BatchFailed { generation, error } => {
                if generation != self.feed.generation() {
                    debug!("Ignoring failure of stale generation {}", generation);
                    return;
                }
                warn!(
                    "[{}] batch stopped at {} of {}: {}",
                    error.error_code(),
                    self.feed.cursor(),
                    self.feed.ids().len(),
                    error
                );
                // Stories of this batch arrived before this message, so the
                // failing id is the one at the cursor.
                if error.is_permanent() {
                    self.feed.skip_next(generation);
                }
                self.load_state = LoadState::Idle;
                self.set_notice(error.user_message(), NoticeLevel::Error);
            }
            AppMessage::CommentsLoaded { story_id, comments } => {
                if self.pending_comments != Some(story_id) {
                    debug!("Discarding comments for story {}", story_id);
                    return;
                }
                self.pending_comments = None;
                match self.feed.story_mut(story_id) {
                    Some(story) => {
                        story.comments = Some(comments);
                        self.expanded_story = Some(story_id);
                    }
                    None => debug!("Story {} left the feed", story_id),
                }
            }
            AppMessage::CommentsFailed { story_id, error } => {
                if self.pending_comments != Some(story_id) {
                    debug!("Discarding comment failure for story {}", story_id);
                    return;
                }
                self.pending_comments = None;
                warn!("[{}] {}", error.error_code(), error);
                self.set_notice(error.user_message(), NoticeLevel::Error);
            }
            AppMessage::UserLoaded { handle, user } => {
                if self.pending_user.as_deref() != Some(handle.as_str()) {
                    debug!("Discarding profile of {}", handle);
                    return;
                }
                self.pending_user = None;
                self.selected_user = Some(user);
            }
            AppMessage::UserFailed { handle, error } => {
                if self.pending_user.as_deref() != Some(handle.as_str()) {
                    debug!("Discarding profile failure for {}", handle);
                    return;
                }
                self.pending_user = None;
                warn!("[{}] {}", error.error_code(), error);
                self.set_notice(error.user_message(), NoticeLevel::Error);
            }
        }
    }
}
