use anyhow::Result;
use fantoccini::Locator;
use loaders::news::sample_articles;
use serde_json::json;
use test_helpers::mock::article;
use test_helpers::{Method, Reply};
use tracing::info;

use crate::framework::{TestEnvironment, wait_for, wait_for_text};

/// The news page renders one card per article the backend returns.
///
/// Steps:
/// - Serve three articles at /news-report
/// - Open /news
/// - Verify exactly three cards, each with its headline and a "Read more"
///   link to the article's url
#[tokio::test]
async fn test_news_page_lists_every_article() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    let headlines = ["Rates held", "Storm warning", "Cup final tonight"];
    let articles: Vec<_> = headlines
        .iter()
        .zip(1..)
        .map(|(headline, id)| article(id, headline, 50.0))
        .collect();
    env.api
        .backend
        .on(Method::GET, "/news-report", Reply::ok(json!(articles)));

    info!("📰 Opening news page");
    env.open("/news").await?;
    wait_for_text(&env.browser, headlines[0]).await?;

    info!("🔍 Verifying cards");
    let links = env
        .browser
        .find_all(Locator::XPath("//a[normalize-space(text())='Read more']"))
        .await?;
    assert_eq!(links.len(), 3);

    for (id, headline) in (1..).zip(headlines) {
        env.browser
            .find(Locator::XPath(&format!("//h2[text()='{}']", headline)))
            .await?;
        let expected = format!("https://news.example.com/articles/{}", id);
        let link = env
            .browser
            .find(Locator::Css(&format!("a[href='{}']", expected)))
            .await?;
        assert_eq!(link.text().await?, "Read more");
    }

    info!("✅ News list test completed successfully");
    Ok(())
}

/// A failed news request falls back to the bundled sample report.
///
/// Steps:
/// - Make /news-report answer 503
/// - Open /news
/// - Verify the fallback notice and the sample articles are shown
#[tokio::test]
async fn test_news_page_falls_back_to_sample_report() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.api.backend.on(
        Method::GET,
        "/news-report",
        Reply::raw(503, "Service Unavailable"),
    );

    info!("📰 Opening news page with a failing backend");
    env.open("/news").await?;

    wait_for(
        &env.browser,
        Locator::XPath(
            "//p[contains(text(), 'Failed to load news. Showing a sample report.')]",
        ),
    )
    .await?;

    let samples = sample_articles();
    for sample in &samples {
        wait_for_text(&env.browser, &sample.headline).await?;
    }
    let links = env
        .browser
        .find_all(Locator::XPath("//a[normalize-space(text())='Read more']"))
        .await?;
    assert_eq!(links.len(), samples.len());

    info!("✅ Sample fallback test completed successfully");
    Ok(())
}
