//! Paginated story loading and comment fan-out against the mock API.

mod common;

use common::*;
use hnr::error::FetchError;
use hnr::loader::{RefreshOutcome, StoryFeed};
use hnr::models::Category;

fn ids(feed: &StoryFeed) -> Vec<u64> {
    feed.stories().iter().map(|s| s.id).collect()
}

#[tokio::test]
async fn test_three_ids_batch_of_two() {
    let http = MockApi::new().with_category(Category::Top, &[1, 2, 3]).build();
    let loader = story_loader(&http, 2);
    let mut feed = StoryFeed::new(Category::Top);

    loader.start_category(&mut feed, Category::Top).await.unwrap();

    assert_eq!(ids(&feed), vec![1, 2]);
    assert_eq!(feed.cursor(), 2);
    assert!(feed.has_more());

    loader.load_more(&mut feed).await.unwrap();

    assert_eq!(ids(&feed), vec![1, 2, 3]);
    assert_eq!(feed.cursor(), 3);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn test_start_loads_min_of_batch_and_list() {
    let http = MockApi::new().with_category(Category::New, &[9, 8]).build();
    let loader = story_loader(&http, 30);
    let mut feed = StoryFeed::new(Category::Top);

    loader.start_category(&mut feed, Category::New).await.unwrap();

    assert_eq!(feed.category(), Category::New);
    assert_eq!(ids(&feed), vec![9, 8]);
    assert_eq!(feed.cursor(), 2);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn test_failure_mid_batch_keeps_earlier_stories() {
    let http = MockApi::new()
        .with_category(Category::Top, &[1, 2, 3])
        .with_status(&item_url(2), 500)
        .build();
    let loader = story_loader(&http, 3);
    let mut feed = StoryFeed::new(Category::Top);

    let err = loader
        .start_category(&mut feed, Category::Top)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Status { status: 500, .. }));
    assert_eq!(ids(&feed), vec![1]);
    assert_eq!(feed.cursor(), 1);
    assert!(feed.has_more());
    // Nothing after the failing id was requested
    assert_eq!(http.request_count(&item_url(3)), 0);
}

#[tokio::test]
async fn test_load_more_resumes_at_failed_id() {
    let http = MockApi::new()
        .with_category(Category::Top, &[1, 2, 3])
        .with_status(&item_url(2), 503)
        .build();
    let loader = story_loader(&http, 3);
    let mut feed = StoryFeed::new(Category::Top);
    assert!(loader.start_category(&mut feed, Category::Top).await.is_err());

    http.set_json(&item_url(2), story_json(2, &[]));
    loader.load_more(&mut feed).await.unwrap();

    assert_eq!(ids(&feed), vec![1, 2, 3]);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn test_start_failure_leaves_feed_intact() {
    let http = MockApi::new()
        .with_category(Category::Top, &[1, 2])
        .with_connection_error(&ids_url(Category::Ask))
        .build();
    let loader = story_loader(&http, 30);
    let mut feed = StoryFeed::new(Category::Top);
    loader.start_category(&mut feed, Category::Top).await.unwrap();
    let generation = feed.generation();

    let err = loader
        .start_category(&mut feed, Category::Ask)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::Network { .. }));
    assert_eq!(feed.category(), Category::Top);
    assert_eq!(ids(&feed), vec![1, 2]);
    assert_eq!(feed.generation(), generation);
}

#[tokio::test]
async fn test_refresh_with_changed_list_reloads() {
    let http = MockApi::new().with_category(Category::Top, &[1, 2, 3]).build();
    let loader = story_loader(&http, 2);
    let mut feed = StoryFeed::new(Category::Top);
    loader.start_category(&mut feed, Category::Top).await.unwrap();
    loader.load_more(&mut feed).await.unwrap();

    http.set_json(&ids_url(Category::Top), "[4,1,2]");
    http.set_json(&item_url(4), story_json(4, &[]));

    let outcome = loader.refresh(&mut feed).await.unwrap();

    assert_eq!(outcome, RefreshOutcome::Reloaded);
    assert_eq!(ids(&feed), vec![4, 1]);
    assert_eq!(feed.cursor(), 2);
    assert!(feed.has_more());
}

#[tokio::test]
async fn test_null_item_is_not_found() {
    let http = MockApi::new().with_ids(Category::Job, &[77]).build();
    http.set_json(&item_url(77), "null");
    let loader = story_loader(&http, 30);
    let mut feed = StoryFeed::new(Category::Job);

    let err = loader
        .start_category(&mut feed, Category::Job)
        .await
        .unwrap_err();

    assert!(matches!(err, FetchError::NotFound { .. }));
    assert!(feed.is_empty());
}

#[tokio::test]
async fn test_load_more_continues_past_item_without_title() {
    let http = MockApi::new().with_category(Category::Top, &[1, 2, 3]).build();
    http.set_json(&item_url(2), r#"{"id":2,"deleted":true,"type":"story","time":0}"#);
    let loader = story_loader(&http, 2);
    let mut feed = StoryFeed::new(Category::Top);

    let err = loader
        .start_category(&mut feed, Category::Top)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Malformed { .. }));
    assert_eq!(feed.cursor(), 2);

    loader.load_more(&mut feed).await.unwrap();

    assert_eq!(ids(&feed), vec![1, 3]);
    assert_eq!(feed.skipped(), &[2]);
    assert!(!feed.has_more());
}

#[tokio::test]
async fn test_comments_six_kids_in_order() {
    let kids = [10, 11, 12, 13, 14, 15];
    let http = MockApi::new()
        .with_ids(Category::Top, &[1])
        .with_story_kids(1, &kids)
        .build();
    let loader = story_loader(&http, 30);
    let mut feed = StoryFeed::new(Category::Top);
    loader.start_category(&mut feed, Category::Top).await.unwrap();

    let story = feed.story_mut(1).unwrap();
    comment_loader(&http).load_into(story).await.unwrap();

    let comments = story.comments.as_ref().unwrap();
    let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
    assert_eq!(ids, kids.to_vec());
    assert_eq!(comments[0].text.as_deref(), Some("Comment 10"));
}

#[tokio::test]
async fn test_comments_capped_at_ten() {
    let kids: Vec<u64> = (100..112).collect();
    let http = MockApi::new().with_story_kids(1, &kids).build();

    let comments = comment_loader(&http).load(&kids).await.unwrap();

    assert_eq!(comments.len(), 10);
    assert_eq!(http.request_count(&item_url(110)), 0);
    assert_eq!(http.request_count(&item_url(111)), 0);
}

#[tokio::test]
async fn test_story_without_kids_gets_empty_comments_without_request() {
    let http = MockApi::new().with_story_kids(5, &[]).build();
    let mut story = hn_client(&http).fetch_story(5).await.unwrap();
    http.clear_requests();

    comment_loader(&http).load_into(&mut story).await.unwrap();

    assert_eq!(story.comments, Some(Vec::new()));
    assert!(http.get_requests().is_empty());
}
