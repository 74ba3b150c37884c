//! Mock API fixtures.
//!
//! [`MockApi`] fills a [`MockHttpClient`] with id lists, stories, comments
//! and users served under [`BASE_URL`].

pub use hnr::adapters::mock::{MockHttpClient, MockResponse};
pub use hnr::traits::HttpError;

use hnr::models::Category;

/// Base URL the fixtures are served under.
pub const BASE_URL: &str = "https://hn.test/v0";

pub fn ids_url(category: Category) -> String {
    format!("{}/{}", BASE_URL, category.endpoint())
}

pub fn item_url(id: u64) -> String {
    format!("{}/item/{}.json", BASE_URL, id)
}

pub fn user_url(handle: &str) -> String {
    format!("{}/user/{}.json", BASE_URL, handle)
}

pub fn story_json(id: u64, kids: &[u64]) -> String {
    serde_json::json!({
        "id": id,
        "type": "story",
        "title": format!("Story {}", id),
        "url": format!("https://example.com/{}", id),
        "score": 100 + id,
        "by": format!("author{}", id),
        "time": 1_700_000_000,
        "descendants": kids.len(),
        "kids": kids,
    })
    .to_string()
}

pub fn comment_json(id: u64) -> String {
    serde_json::json!({
        "id": id,
        "type": "comment",
        "text": format!("Comment {}", id),
        "by": "commenter",
        "time": 1_700_000_100,
    })
    .to_string()
}

/// Builder for a mock item API.
pub struct MockApi {
    client: MockHttpClient,
}

impl MockApi {
    pub fn new() -> Self {
        Self {
            client: MockHttpClient::new(),
        }
    }

    /// Serve `ids` for `category` and a story for each id.
    pub fn with_category(self, category: Category, ids: &[u64]) -> Self {
        self.client.set_json(
            &ids_url(category),
            serde_json::to_string(ids).unwrap(),
        );
        for &id in ids {
            self.client.set_json(&item_url(id), story_json(id, &[]));
        }
        self
    }

    /// Serve only the id list of `category`.
    pub fn with_ids(self, category: Category, ids: &[u64]) -> Self {
        self.client.set_json(
            &ids_url(category),
            serde_json::to_string(ids).unwrap(),
        );
        self
    }

    /// Serve story `id` with child comments `kids`, and each comment.
    pub fn with_story_kids(self, id: u64, kids: &[u64]) -> Self {
        self.client.set_json(&item_url(id), story_json(id, kids));
        for &kid in kids {
            self.client.set_json(&item_url(kid), comment_json(kid));
        }
        self
    }

    pub fn with_status(self, url: &str, status: u16) -> Self {
        self.client.set_status(url, status);
        self
    }

    pub fn with_connection_error(self, url: &str) -> Self {
        self.client.set_response(
            url,
            MockResponse::Error(HttpError::ConnectionFailed("refused".to_string())),
        );
        self
    }

    pub fn with_user(self, handle: &str, karma: i64) -> Self {
        self.client.set_json(
            &user_url(handle),
            serde_json::json!({
                "id": handle,
                "created": 1_200_000_000,
                "karma": karma,
                "about": "Hello &amp; welcome",
                "submitted": [1, 2, 3],
            })
            .to_string(),
        );
        self
    }

    pub fn build(self) -> MockHttpClient {
        self.client
    }
}

impl Default for MockApi {
    fn default() -> Self {
        Self::new()
    }
}
