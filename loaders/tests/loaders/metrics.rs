use crate::{StateSpy, run};
use loaders::metrics::{AdminMetrics, fetch_metrics};
use loaders::{Lifecycle, Phase};
use payloads::Metric;
use std::time::Duration;
use test_helpers::mock::stat;
use test_helpers::{Method, Reply, TestApp, spawn_app};

fn serve_all_metrics(app: &TestApp) {
    for metric in Metric::ALL {
        app.backend
            .on(Method::GET, metric.path(), Reply::ok(stat(5, 40, 3.5)));
    }
}

#[tokio::test]
async fn fetches_all_three_metrics() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.sign_in("admin-token");
    serve_all_metrics(&app);
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_metrics(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Success));
    let state = spy.state();
    assert_eq!(state.error, None);
    let metrics = state.data.expect("metrics");
    for metric in Metric::ALL {
        let stat = metrics.get(metric).expect("stat");
        assert_eq!(stat.label, metric.label());
        let sent = app.backend.requests_to(Method::GET, metric.path());
        assert_eq!(sent[0].authorization.as_deref(), Some("Bearer admin-token"));
    }

    Ok(())
}

#[tokio::test]
async fn metrics_are_requested_concurrently() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for metric in Metric::ALL {
        app.backend.on(
            Method::GET,
            metric.path(),
            Reply::ok(stat(1, 1, 0.0)).after(Duration::from_millis(400)),
        );
    }

    let started = std::time::Instant::now();
    let metrics = fetch_metrics(&app.client, &payloads::CancelToken::new()).await?;

    assert!(metrics.is_complete());
    // three sequential requests would take at least 1.2s
    assert!(started.elapsed() < Duration::from_millis(1100));

    Ok(())
}

#[tokio::test]
async fn server_error_on_one_metric_fails_the_fetch() -> anyhow::Result<()> {
    let app = spawn_app().await;
    serve_all_metrics(&app);
    app.backend.on(
        Method::GET,
        "/admin/new-signups",
        Reply::detail(500, "Internal Server Error"),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_metrics(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Failed));
    let state = spy.state();
    assert_eq!(state.error.as_deref(), Some("Failed to load admin metrics"));
    assert_eq!(state.data, None);

    Ok(())
}

#[tokio::test]
async fn every_metric_failing_is_a_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for metric in Metric::ALL {
        app.backend.on(Method::GET, metric.path(), Reply::raw(500, "boom"));
    }
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_metrics(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Failed));
    assert_eq!(
        spy.state().error.as_deref(),
        Some("Failed to load admin metrics")
    );
    assert_eq!(spy.state().data, None);

    Ok(())
}

#[tokio::test]
async fn unreadable_metric_blanks_only_its_tile() -> anyhow::Result<()> {
    let app = spawn_app().await;
    serve_all_metrics(&app);
    app.backend
        .on(Method::GET, "/admin/new-signups", Reply::raw(200, "not json"));
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_metrics(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Success));
    let state = spy.state();
    assert_eq!(state.error.as_deref(), Some("Failed to fetch data"));
    let metrics = state.data.expect("metrics");
    assert!(metrics.active_users.is_some());
    assert!(metrics.new_signups.is_none());
    assert!(metrics.reports_generated.is_some());

    Ok(())
}

#[tokio::test]
async fn no_readable_metric_is_a_failure() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for metric in Metric::ALL {
        app.backend.on(Method::GET, metric.path(), Reply::raw(200, ""));
    }

    let result = fetch_metrics(&app.client, &payloads::CancelToken::new()).await;

    assert!(matches!(result, Err(loaders::FetchError::Malformed(_))));

    Ok(())
}

#[tokio::test]
async fn network_failure_sets_generic_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = payloads::APIClient::new("http://127.0.0.1:9", app.tokens.clone());
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();

    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_metrics(&client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Failed));
    let state = spy.state();
    assert_eq!(state.error.as_deref(), Some("Failed to load admin metrics"));
    assert_eq!(state.data, None);

    Ok(())
}

#[tokio::test]
async fn cancelled_fetch_sets_no_error() -> anyhow::Result<()> {
    let app = spawn_app().await;
    for metric in Metric::ALL {
        app.backend.on(
            Method::GET,
            metric.path(),
            Reply::ok(stat(1, 1, 0.0)).after(Duration::from_secs(30)),
        );
    }
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<AdminMetrics>::new();
    let cycle = lifecycle.begin();

    let (phase, ()) = tokio::join!(
        run(&spy, &cycle, fetch_metrics(&app.client, cycle.token())),
        async {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cycle.token().cancel();
        }
    );

    assert_eq!(phase, None);
    assert_eq!(spy.state().error, None);
    assert_eq!(spy.state().phase, Phase::Loading);

    Ok(())
}
