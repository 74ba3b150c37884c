//! Type definitions for the application state.
//!
//! - [`LoadState`] - The load FSM
//! - [`IdsMode`] - What a fetched id list is for
//! - [`Notice`] - Transient status line message

use std::time::{Duration, Instant};

/// Which load, if any, is in flight.
///
/// Every busy state returns to `Idle` on completion or error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Idle,
    /// Category switch or first load
    Loading,
    /// Next batch of the current list
    LoadingMore,
    /// Manual refresh of the current list
    Refreshing,
}

impl LoadState {
    pub fn is_busy(&self) -> bool {
        !matches!(self, LoadState::Idle)
    }

    /// Header status text.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            LoadState::Idle => None,
            LoadState::Loading => Some("loading…"),
            LoadState::LoadingMore => Some("loading more…"),
            LoadState::Refreshing => Some("refreshing…"),
        }
    }
}

/// Why an id list was fetched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdsMode {
    /// Category switch: always replace the feed
    Replace,
    /// Manual refresh: replace only if the list changed
    Refresh,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A message shown in the status line until it expires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub message: String,
    pub level: NoticeLevel,
    pub expires_at: Instant,
}

impl Notice {
    pub fn new(message: impl Into<String>, level: NoticeLevel, now: Instant, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            level,
            expires_at: now + ttl,
        }
    }

    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}
