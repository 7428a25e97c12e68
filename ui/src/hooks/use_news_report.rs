use loaders::news::{NewsFeed, fetch_news};
use yew::prelude::*;

use super::{ResourceHookReturn, use_resource};

/// Fetch the news feed on mount, falling back to the bundled sample report
/// when the backend cannot provide one.
#[hook]
pub fn use_news_report() -> ResourceHookReturn<NewsFeed> {
    use_resource(|client, cancel| async move {
        fetch_news(&client, &cancel).await
    })
}
