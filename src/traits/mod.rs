//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`HttpClient`] - HTTP GET operations against the item API

pub mod http;

pub use http::{Headers, HttpClient, HttpError, Response};
