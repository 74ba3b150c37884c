//! hnr - A terminal reader for Hacker News
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod client;
pub mod error;
pub mod input;
pub mod loader;
pub mod models;
pub mod pacing;
pub mod settings;
pub mod startup;
pub mod terminal;
pub mod text;
pub mod traits;
pub mod ui;
