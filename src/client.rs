//! Hacker News API client.
//!
//! Thin read-only client over [`HttpClient`]: one call per resource, every
//! failure mapped to [`FetchError`].

use serde::de::DeserializeOwned;
use std::sync::Arc;

use crate::error::FetchError;
use crate::models::{Category, Comment, Story, UserProfile};
use crate::traits::{Headers, HttpClient};

pub const HN_API_BASE_URL: &str = "https://hacker-news.firebaseio.com/v0";

/// Client for the Hacker News item API.
#[derive(Clone)]
pub struct HnClient {
    base_url: String,
    http: Arc<dyn HttpClient>,
}

impl std::fmt::Debug for HnClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HnClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl HnClient {
    /// Create a client against the public API.
    pub fn new(http: Arc<dyn HttpClient>) -> Self {
        Self::with_base_url(http, HN_API_BASE_URL)
    }

    /// Create a client against another base URL (mirrors, tests).
    pub fn with_base_url(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn story_ids_url(&self, category: Category) -> String {
        format!("{}/{}", self.base_url, category.endpoint())
    }

    pub fn item_url(&self, id: u64) -> String {
        format!("{}/item/{}.json", self.base_url, id)
    }

    pub fn user_url(&self, handle: &str) -> String {
        format!("{}/user/{}.json", self.base_url, urlencoding::encode(handle))
    }

    /// Ranked story ids for `category`.
    pub async fn fetch_story_ids(&self, category: Category) -> Result<Vec<u64>, FetchError> {
        self.get_json(&self.story_ids_url(category)).await
    }

    /// Any item decoded as `T`.
    pub async fn fetch_item<T: DeserializeOwned>(&self, id: u64) -> Result<T, FetchError> {
        self.get_json(&self.item_url(id)).await
    }

    pub async fn fetch_story(&self, id: u64) -> Result<Story, FetchError> {
        self.fetch_item(id).await
    }

    pub async fn fetch_comment(&self, id: u64) -> Result<Comment, FetchError> {
        self.fetch_item(id).await
    }

    pub async fn fetch_user(&self, handle: &str) -> Result<UserProfile, FetchError> {
        self.get_json(&self.user_url(handle)).await
    }

    /// GET `url` and decode the body. The API answers `null` for ids that do
    /// not exist, which becomes [`FetchError::NotFound`].
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::trace!("GET {}", url);

        let response = self
            .http
            .get(url, &Headers::new())
            .await
            .map_err(|e| FetchError::from_http(e, url))?;

        if !response.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: response.status,
            });
        }

        let parsed: Option<T> = response
            .json()
            .map_err(|e| FetchError::malformed(url, e))?;

        parsed.ok_or_else(|| FetchError::NotFound {
            url: url.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::traits::HttpError;

    const BASE: &str = "https://hn.test/v0";

    fn client() -> (HnClient, MockHttpClient) {
        let http = MockHttpClient::new();
        let client = HnClient::with_base_url(Arc::new(http.clone()), format!("{}/", BASE));
        (client, http)
    }

    #[test]
    fn test_urls() {
        let (client, _) = client();
        assert_eq!(client.base_url(), BASE);
        assert_eq!(
            client.story_ids_url(Category::Best),
            "https://hn.test/v0/beststories.json"
        );
        assert_eq!(client.item_url(42), "https://hn.test/v0/item/42.json");
        assert_eq!(client.user_url("pg"), "https://hn.test/v0/user/pg.json");
        assert_eq!(client.user_url("a b"), "https://hn.test/v0/user/a%20b.json");
    }

    #[test]
    fn test_default_base_url() {
        let client = HnClient::new(Arc::new(MockHttpClient::new()));
        assert_eq!(client.base_url(), HN_API_BASE_URL);
    }

    #[tokio::test]
    async fn test_fetch_story_ids() {
        let (client, http) = client();
        http.set_json("https://hn.test/v0/topstories.json", "[3, 1, 2]");

        let ids = client.fetch_story_ids(Category::Top).await.unwrap();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[tokio::test]
    async fn test_fetch_story() {
        let (client, http) = client();
        http.set_json(
            "https://hn.test/v0/item/7.json",
            r#"{"id":7,"title":"Seven","score":10,"by":"pg","time":100,"descendants":2,"kids":[8,9]}"#,
        );

        let story = client.fetch_story(7).await.unwrap();
        assert_eq!(story.title, "Seven");
        assert_eq!(story.kid_ids(), &[8, 9]);
    }

    #[tokio::test]
    async fn test_null_item_is_not_found() {
        let (client, http) = client();
        http.set_json("https://hn.test/v0/item/99.json", "null");

        let err = client.fetch_story(99).await.unwrap_err();
        assert_eq!(
            err,
            FetchError::NotFound {
                url: "https://hn.test/v0/item/99.json".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_status_error() {
        let (client, http) = client();
        http.set_status("https://hn.test/v0/newstories.json", 503);

        let err = client.fetch_story_ids(Category::New).await.unwrap_err();
        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_malformed_body() {
        let (client, http) = client();
        http.set_json("https://hn.test/v0/item/5.json", r#"{"id":"five"}"#);

        let err = client.fetch_story(5).await.unwrap_err();
        assert!(matches!(err, FetchError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_transport_error() {
        let (client, http) = client();
        http.set_response(
            "https://hn.test/v0/user/pg.json",
            MockResponse::Error(HttpError::Timeout("10s".to_string())),
        );

        let err = client.fetch_user("pg").await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout { .. }));
    }
}
