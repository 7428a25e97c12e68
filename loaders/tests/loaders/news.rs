use crate::{StateSpy, run};
use loaders::news::{NewsFeed, fetch_news, sample_articles};
use loaders::{Lifecycle, Phase};
use serde_json::json;
use std::time::Duration;
use test_helpers::mock::article;
use test_helpers::{Method, Reply, spawn_app};

#[tokio::test]
async fn loads_feed_from_backend() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!([
            article(1, "Rates held", 80.0),
            article(2, "Cup final", 55.0),
            article(3, "Storm warning", 10.0),
        ])),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<NewsFeed>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_news(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Success));
    let state = spy.state();
    assert_eq!(state.error, None);
    let NewsFeed(articles) = state.data.expect("feed");
    let headlines: Vec<_> = articles.iter().map(|a| a.headline.as_str()).collect();
    assert_eq!(headlines, ["Rates held", "Cup final", "Storm warning"]);
    assert_eq!(articles[0].url, "https://news.example.com/articles/1");

    Ok(())
}

#[tokio::test]
async fn server_error_falls_back_to_sample() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::GET, "/news-report", Reply::detail(500, "boom"));
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<NewsFeed>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_news(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Failed));
    let state = spy.state();
    assert_eq!(state.error.as_deref(), Some("Failed to load news"));
    assert_eq!(state.data, Some(NewsFeed(sample_articles())));

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_falls_back_to_sample() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = payloads::APIClient::new("http://127.0.0.1:9", app.tokens.clone());
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<NewsFeed>::new();

    let cycle = lifecycle.begin();
    run(&spy, &cycle, fetch_news(&client, cycle.token())).await;

    let state = spy.state();
    assert_eq!(state.phase, Phase::Failed);
    assert_eq!(state.data, Some(NewsFeed(sample_articles())));

    Ok(())
}

#[tokio::test]
async fn malformed_items_are_dropped() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!([
            article(1, "Kept", 80.0),
            { "id": 2, "headline": "Missing fields" },
            article(3, "Also kept", 30.0),
        ])),
    );

    let feed = fetch_news(&app.client, &payloads::CancelToken::new()).await?;

    assert_eq!(feed.0.len(), 2);
    assert!(feed.0.iter().all(|a| a.headline.contains("ept")));

    Ok(())
}

#[tokio::test]
async fn all_malformed_falls_back_but_empty_does_not() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let lifecycle = Lifecycle::new();

    app.backend
        .on(Method::GET, "/news-report", Reply::ok(json!([{ "id": 1 }])));
    let spy = StateSpy::<NewsFeed>::new();
    let cycle = lifecycle.begin();
    run(&spy, &cycle, fetch_news(&app.client, cycle.token())).await;
    assert_eq!(spy.state().phase, Phase::Failed);
    assert_eq!(spy.state().data, Some(NewsFeed(sample_articles())));

    app.backend.on(Method::GET, "/news-report", Reply::ok(json!([])));
    let spy = StateSpy::<NewsFeed>::new();
    let cycle = lifecycle.begin();
    run(&spy, &cycle, fetch_news(&app.client, cycle.token())).await;
    assert_eq!(spy.state().phase, Phase::Success);
    assert_eq!(spy.state().data, Some(NewsFeed(vec![])));

    Ok(())
}

#[tokio::test]
async fn unmount_mid_fetch_writes_nothing_more() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!([article(1, "Late", 50.0)])).after(Duration::from_secs(30)),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<NewsFeed>::new();
    let cycle = lifecycle.begin();

    let (phase, ()) = tokio::join!(
        run(&spy, &cycle, fetch_news(&app.client, cycle.token())),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            lifecycle.unmount();
        }
    );

    assert_eq!(phase, None);
    // only the initial Start was written
    assert_eq!(spy.writes(), 1);
    let state = spy.state();
    assert_eq!(state.phase, Phase::Loading);
    assert_eq!(state.error, None);

    Ok(())
}

#[tokio::test]
async fn superseded_cycle_does_not_overwrite_newer_result() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!([article(1, "Stale", 50.0)])).after(Duration::from_millis(300)),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<NewsFeed>::new();

    let first = lifecycle.begin();
    let retry = async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        let second = lifecycle.begin();
        run(
            &spy,
            &second,
            async { Ok(NewsFeed(vec![])) },
        )
        .await
    };

    let (stale, fresh) = tokio::join!(
        run(&spy, &first, fetch_news(&app.client, first.token())),
        retry
    );

    assert_eq!(stale, None);
    assert_eq!(fresh, Some(Phase::Success));
    assert_eq!(spy.state().data, Some(NewsFeed(vec![])));
    assert_eq!(spy.state().error, None);

    Ok(())
}
