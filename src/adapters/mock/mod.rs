//! Mock implementations for testing.
//!
//! Enables unit and integration testing of the loaders and the controller
//! without network access.

pub mod http;

pub use http::{MockHttpClient, MockResponse, RecordedRequest};
