//! Common test utilities for integration tests.
//!
//! # Example
//!
//! ```ignore
//! let http = MockApi::new().with_category(Category::Top, &[1, 2, 3]).build();
//! let mut harness = TestAppBuilder::new(http).with_batch_size(2).build();
//! harness.app.start();
//! harness.settle().await;
//! ```

#![allow(dead_code)]

pub mod mocks;

pub use mocks::*;

use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::mpsc;

use hnr::app::{App, AppMessage};
use hnr::client::HnClient;
use hnr::loader::{CommentLoader, StoryLoader};
use hnr::models::Category;
use hnr::pacing::FixedIntervalGate;
use hnr::settings::SettingsStore;
use hnr::startup::AppConfig;

/// How long the channel must stay quiet before [`TestHarness::settle`]
/// returns.
const QUIET: Duration = Duration::from_millis(50);

/// An App wired to a mock API, with its message receiver and a private data
/// directory.
pub struct TestHarness {
    pub app: App,
    pub rx: mpsc::UnboundedReceiver<AppMessage>,
    pub http: MockHttpClient,
    pub data_dir: TempDir,
}

impl TestHarness {
    /// Apply incoming messages until no more arrive.
    pub async fn settle(&mut self) {
        while let Ok(Some(msg)) = tokio::time::timeout(QUIET, self.rx.recv()).await {
            self.app.handle_message(msg);
        }
    }

    pub fn settings(&self) -> SettingsStore {
        SettingsStore::in_dir(self.data_dir.path())
    }

    pub fn story_ids(&self) -> Vec<u64> {
        self.app.feed.stories().iter().map(|s| s.id).collect()
    }
}

/// Builder for [`TestHarness`].
pub struct TestAppBuilder {
    http: MockHttpClient,
    config: AppConfig,
}

impl TestAppBuilder {
    pub fn new(http: MockHttpClient) -> Self {
        Self {
            http,
            config: AppConfig::default()
                .with_api_base_url(BASE_URL)
                .with_pacing_interval(Duration::ZERO),
        }
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.config = self.config.with_batch_size(batch_size);
        self
    }

    pub fn with_category(mut self, category: Category) -> Self {
        self.config = self.config.with_initial_category(Some(category));
        self
    }

    pub fn build(self) -> TestHarness {
        let data_dir = TempDir::new().unwrap();
        let config = self.config.with_data_dir(data_dir.path());
        let mut app = App::new(
            config,
            Arc::new(self.http.clone()),
            SettingsStore::in_dir(data_dir.path()),
        );
        let rx = app.take_message_rx().unwrap();
        TestHarness {
            app,
            rx,
            http: self.http,
            data_dir,
        }
    }
}

pub fn hn_client(http: &MockHttpClient) -> Arc<HnClient> {
    Arc::new(HnClient::with_base_url(Arc::new(http.clone()), BASE_URL))
}

/// Unpaced story loader over `http`.
pub fn story_loader(http: &MockHttpClient, batch_size: usize) -> StoryLoader {
    StoryLoader::new(
        hn_client(http),
        Arc::new(FixedIntervalGate::unpaced()),
        batch_size,
    )
}

pub fn comment_loader(http: &MockHttpClient) -> CommentLoader {
    CommentLoader::new(hn_client(http), 10)
}
