//! Data types mirroring the Hacker News item API.
//!
//! - [`Category`] - which ranked list to show
//! - [`Story`] / [`Comment`] - items from `/item/{id}.json`
//! - [`UserProfile`] - `/user/{handle}.json`

pub mod category;
pub mod item;
pub mod user;

pub use category::{Category, ParseCategoryError};
pub use item::{Comment, ItemKind, Story};
pub use user::UserProfile;
