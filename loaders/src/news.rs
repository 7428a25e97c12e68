use crate::{FetchError, Resource, ok_data};
use payloads::{APIClient, Article, CancelToken, Decoded};

const SAMPLE_NEWS: &str = include_str!("../data/sample_news.json");

/// The news feed shown on the landing and explore pages.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsFeed(pub Vec<Article>);

impl Resource for NewsFeed {
    const ERROR_MESSAGE: &'static str = "Failed to load news";

    fn fallback() -> Option<Self> {
        Some(Self(sample_articles()))
    }
}

/// The bundled sample report, shown when the backend is unavailable and on
/// the sample report page.
pub fn sample_articles() -> Vec<Article> {
    match serde_json::from_str(SAMPLE_NEWS) {
        Ok(articles) => articles,
        Err(e) => {
            tracing::error!("bundled sample news is invalid: {e}");
            Vec::new()
        }
    }
}

/// Fetch the feed, keeping only well-formed articles.
///
/// A feed where every article is malformed counts as a failure; an empty
/// feed does not.
pub async fn fetch_news(
    client: &APIClient,
    cancel: &CancelToken,
) -> Result<NewsFeed, FetchError> {
    let items = ok_data(client.news_report(Some(cancel)).await?)?;
    let received = items.len();

    let articles: Vec<Article> = items
        .into_iter()
        .filter_map(|item| match item {
            Decoded::Valid(article) => Some(article),
            Decoded::Invalid(reason) => {
                tracing::warn!("dropping malformed article: {reason}");
                None
            }
        })
        .collect();

    if received > 0 && articles.is_empty() {
        return Err(FetchError::Malformed(format!(
            "all {received} articles were malformed"
        )));
    }
    Ok(NewsFeed(articles))
}
