//! Application state and logic for the TUI.
//!
//! This module contains the core [`App`] struct and related types:
//! - [`LoadState`] - Which load is in flight
//! - [`Notice`] - Transient status line message
//! - [`AppMessage`] - Messages for async communication
//!
//! User actions live in `actions`, message handling in `handlers` and list
//! movement in `navigation`. Fetches run in spawned tasks that report back
//! over `message_tx`; all state changes happen on the UI task.

mod actions;
mod handlers;
mod messages;
mod navigation;
mod types;

pub use messages::AppMessage;
pub use types::{IdsMode, LoadState, Notice, NoticeLevel};

use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

use crate::client::HnClient;
use crate::loader::{CommentLoader, StoryFeed, StoryLoader};
use crate::models::{Category, Story, UserProfile};
use crate::pacing::FixedIntervalGate;
use crate::settings::{SettingsStore, Theme};
use crate::startup::AppConfig;
use crate::traits::HttpClient;

/// Main application state
pub struct App {
    /// The active story list
    pub feed: StoryFeed,
    /// Load FSM
    pub load_state: LoadState,
    /// Category whose id list is being fetched
    pub pending_category: Option<Category>,
    /// Ticket of the id-list fetch whose result is still wanted
    active_ticket: Option<u64>,
    next_ticket: u64,
    /// Current theme
    pub theme: Theme,
    /// Story whose comments are shown
    pub expanded_story: Option<u64>,
    /// Story whose comments are being fetched
    pub pending_comments: Option<u64>,
    /// Profile shown in the user panel
    pub selected_user: Option<UserProfile>,
    /// Handle whose profile is being fetched
    pub pending_user: Option<String>,
    /// Status line message
    pub notice: Option<Notice>,
    /// Selected row in the story list (the last row may be "Load more")
    pub selected_index: usize,
    /// Flag to track if the app should quit
    pub should_quit: bool,
    /// Dirty flag: when true, the UI needs to be redrawn.
    /// Set to true on state mutations, cleared after each draw.
    pub needs_redraw: bool,
    story_loader: StoryLoader,
    comment_loader: CommentLoader,
    client: Arc<HnClient>,
    settings: SettingsStore,
    config: AppConfig,
    /// Receiver for async messages, taken by the event loop
    pub message_rx: Option<mpsc::UnboundedReceiver<AppMessage>>,
    /// Sender for async messages (clone this to pass to async tasks)
    pub message_tx: mpsc::UnboundedSender<AppMessage>,
}

impl App {
    /// Create a new App.
    ///
    /// Theme and category are seeded from `settings`; `config.initial_category`
    /// takes precedence over the saved category. Nothing is fetched until
    /// [`App::start`].
    pub fn new(config: AppConfig, http: Arc<dyn HttpClient>, settings: SettingsStore) -> Self {
        let saved = settings.load();
        let category = config.initial_category.unwrap_or(saved.category);

        let client = Arc::new(HnClient::with_base_url(http, config.api_base_url.clone()));
        let story_loader = StoryLoader::new(
            Arc::clone(&client),
            Arc::new(FixedIntervalGate::new(config.pacing_interval)),
            config.batch_size,
        );
        let comment_loader = CommentLoader::new(Arc::clone(&client), config.comment_limit);

        let (message_tx, message_rx) = mpsc::unbounded_channel();

        Self {
            feed: StoryFeed::new(category),
            load_state: LoadState::Idle,
            pending_category: None,
            active_ticket: None,
            next_ticket: 0,
            theme: saved.theme,
            expanded_story: None,
            pending_comments: None,
            selected_user: None,
            pending_user: None,
            notice: None,
            selected_index: 0,
            should_quit: false,
            needs_redraw: true,
            story_loader,
            comment_loader,
            client,
            settings,
            config,
            message_rx: Some(message_rx),
            message_tx,
        }
    }

    /// Take the message receiver. Returns `None` after the first call.
    pub fn take_message_rx(&mut self) -> Option<mpsc::UnboundedReceiver<AppMessage>> {
        self.message_rx.take()
    }

    /// Mark the UI as needing a redraw.
    pub fn mark_dirty(&mut self) {
        self.needs_redraw = true;
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn settings_store(&self) -> &SettingsStore {
        &self.settings
    }

    pub fn is_busy(&self) -> bool {
        self.load_state.is_busy()
    }

    /// Story shown in the comment panel, if it still exists.
    pub fn expanded(&self) -> Option<&Story> {
        self.expanded_story.and_then(|id| self.feed.story(id))
    }

    /// Story under the selection, or `None` on the "Load more" row.
    pub fn selected_story(&self) -> Option<&Story> {
        self.feed.stories().get(self.selected_index)
    }

    /// True if the selection is on the trailing "Load more" row.
    pub fn load_more_selected(&self) -> bool {
        self.feed.has_more() && self.selected_index == self.feed.stories().len()
    }

    /// Rows in the story list, counting the "Load more" row.
    pub fn row_count(&self) -> usize {
        self.feed.stories().len() + usize::from(self.feed.has_more())
    }

    fn set_notice(&mut self, message: impl Into<String>, level: NoticeLevel) {
        self.notice = Some(Notice::new(
            message,
            level,
            Instant::now(),
            self.config.notice_ttl,
        ));
        self.mark_dirty();
    }

    /// Drop the notice once it has expired. Called from the event loop tick.
    pub fn tick(&mut self, now: Instant) {
        if self.notice.as_ref().is_some_and(|n| n.is_expired(now)) {
            self.notice = None;
            self.mark_dirty();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use crate::settings::Settings;
    use std::time::Duration;
    use tempfile::TempDir;

    fn app_with(temp_dir: &TempDir, config: AppConfig) -> App {
        let store = SettingsStore::in_dir(temp_dir.path());
        App::new(config, Arc::new(MockHttpClient::new()), store)
    }

    #[test]
    fn test_new_seeds_from_settings() {
        let temp_dir = TempDir::new().unwrap();
        SettingsStore::in_dir(temp_dir.path())
            .save(&Settings {
                theme: Theme::Dark,
                category: Category::Best,
            })
            .unwrap();

        let app = app_with(&temp_dir, AppConfig::default());

        assert_eq!(app.theme, Theme::Dark);
        assert_eq!(app.feed.category(), Category::Best);
        assert_eq!(app.load_state, LoadState::Idle);
        assert!(app.needs_redraw);
    }

    #[test]
    fn test_initial_category_overrides_settings() {
        let temp_dir = TempDir::new().unwrap();
        SettingsStore::in_dir(temp_dir.path())
            .save(&Settings {
                theme: Theme::Light,
                category: Category::Best,
            })
            .unwrap();

        let app = app_with(
            &temp_dir,
            AppConfig::default().with_initial_category(Some(Category::Show)),
        );

        assert_eq!(app.feed.category(), Category::Show);
    }

    #[test]
    fn test_take_message_rx_once() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(&temp_dir, AppConfig::default());
        assert!(app.take_message_rx().is_some());
        assert!(app.take_message_rx().is_none());
    }

    #[test]
    fn test_tick_expires_notice() {
        let temp_dir = TempDir::new().unwrap();
        let mut app = app_with(
            &temp_dir,
            AppConfig::default().with_notice_ttl(Duration::from_secs(2)),
        );
        app.set_notice("No new stories", NoticeLevel::Info);
        let expires_at = app.notice.as_ref().unwrap().expires_at;
        app.needs_redraw = false;

        app.tick(expires_at - Duration::from_millis(1));
        assert!(app.notice.is_some());
        assert!(!app.needs_redraw);

        app.tick(expires_at);
        assert!(app.notice.is_none());
        assert!(app.needs_redraw);
    }
}
