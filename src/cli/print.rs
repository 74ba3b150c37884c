//! Non-interactive `--print` mode.

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use std::io::Write;
use std::sync::Arc;

use crate::adapters::ReqwestHttpClient;
use crate::client::HnClient;
use crate::loader::{StoryFeed, StoryLoader};
use crate::models::{Category, Story};
use crate::pacing::FixedIntervalGate;
use crate::startup::AppConfig;
use crate::ui::helpers::domain_of;

/// Fetch the first batch of `category` over the network and print it to
/// stdout.
pub async fn handle_print_command(config: &AppConfig, category: Category) -> Result<()> {
    let http = ReqwestHttpClient::with_timeout(config.request_timeout)
        .wrap_err("Failed to build HTTP client")?;
    let client = Arc::new(HnClient::with_base_url(
        Arc::new(http),
        config.api_base_url.clone(),
    ));
    let loader = StoryLoader::new(
        client,
        Arc::new(FixedIntervalGate::new(config.pacing_interval)),
        config.batch_size,
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    print_category(&loader, category, &mut out).await
}

/// Load the first batch of `category` with `loader` and write it to `out`.
///
/// Stories fetched before a failure are still printed; the failure is then
/// returned.
pub async fn print_category<W: Write>(
    loader: &StoryLoader,
    category: Category,
    out: &mut W,
) -> Result<()> {
    let mut feed = StoryFeed::new(category);
    let result = loader.start_category(&mut feed, category).await;

    writeln!(out, "{} stories", category.label())?;
    for (rank, story) in feed.stories().iter().enumerate() {
        write_story(out, rank + 1, story)?;
    }
    out.flush()?;

    result.wrap_err_with(|| format!("Failed to load {} stories", category))
}

fn write_story<W: Write>(out: &mut W, rank: usize, story: &Story) -> std::io::Result<()> {
    match story.url.as_deref().and_then(domain_of) {
        Some(domain) => writeln!(out, "{:>3}. {} ({})", rank, story.title, domain)?,
        None => writeln!(out, "{:>3}. {}", rank, story.title)?,
    }
    writeln!(
        out,
        "     {} points by {} | {} comments",
        story.score, story.by, story.descendants
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockHttpClient;
    use std::time::Duration;

    const BASE: &str = "https://hn.test/v0";

    fn loader(http: &MockHttpClient) -> StoryLoader {
        let client = Arc::new(HnClient::with_base_url(Arc::new(http.clone()), BASE));
        StoryLoader::new(client, Arc::new(FixedIntervalGate::new(Duration::ZERO)), 30)
    }

    #[tokio::test]
    async fn test_print_category_lists_stories() {
        let http = MockHttpClient::new();
        http.set_json(&format!("{}/askstories.json", BASE), "[7,8]");
        http.set_json(
            &format!("{}/item/7.json", BASE),
            r#"{"id":7,"title":"Ask HN: Rust?","score":42,"by":"pg","time":0,"descendants":3}"#,
        );
        http.set_json(
            &format!("{}/item/8.json", BASE),
            r#"{"id":8,"title":"A link","url":"https://www.example.com/a","score":5,"by":"dang","time":0,"descendants":0}"#,
        );

        let mut out = Vec::new();
        print_category(&loader(&http), Category::Ask, &mut out)
            .await
            .unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Ask stories\n"));
        assert!(text.contains("  1. Ask HN: Rust?\n"));
        assert!(text.contains("42 points by pg | 3 comments"));
        assert!(text.contains("  2. A link (example.com)\n"));
    }

    #[tokio::test]
    async fn test_print_category_reports_failure_after_partial_output() {
        let http = MockHttpClient::new();
        http.set_json(&format!("{}/topstories.json", BASE), "[1,2]");
        http.set_json(
            &format!("{}/item/1.json", BASE),
            r#"{"id":1,"title":"First","score":1,"by":"a","time":0}"#,
        );
        http.set_status(&format!("{}/item/2.json", BASE), 503);

        let mut out = Vec::new();
        let result = print_category(&loader(&http), Category::Top, &mut out).await;

        assert!(result.is_err());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("  1. First"));
        assert!(!text.contains("  2."));
    }
}
