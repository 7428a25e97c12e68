use jiff::Timestamp;
use payloads::requests::{AdminConfig, GoogleCallback, RegisterAdmin, SUMMARY_SEND_TIMES};
use payloads::{ArticleId, Metric, StatValue};
use reqwest::StatusCode;
use serde_json::json;
use test_helpers::mock::{activity, article, stat};
use test_helpers::{Method, Reply, spawn_app};

#[tokio::test]
async fn news_report_accepts_both_body_shapes() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let articles = json!([article(1, "One", 80.0), article(2, "Two", 20.0)]);

    app.backend.on(Method::GET, "/news-report", Reply::ok(articles.clone()));
    let bare = app.client.news_report(None).await?;

    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!({ "data": articles })),
    );
    let wrapped = app.client.news_report(None).await?;

    assert!(bare.ok && wrapped.ok);
    assert_eq!(bare.data, wrapped.data);
    let decoded = bare.data.unwrap_or_default();
    assert_eq!(decoded.len(), 2);
    assert_eq!(decoded[0].clone().valid().map(|a| a.id), Some(ArticleId(1)));

    Ok(())
}

#[tokio::test]
async fn news_report_keeps_malformed_items_apart() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/news-report",
        Reply::ok(json!([
            article(1, "Good", 60.0),
            { "id": 2, "headline": "No summary" },
        ])),
    );

    let response = app.client.news_report(None).await?;

    let items = response.data.unwrap_or_default();
    assert_eq!(items.len(), 2);
    assert!(items[0].is_valid());
    assert!(!items[1].is_valid());

    Ok(())
}

#[tokio::test]
async fn news_report_object_without_data_is_not_ok() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::GET, "/news-report", Reply::ok(json!({ "items": [] })));

    let response = app.client.news_report(None).await?;

    assert!(!response.ok);
    assert_eq!(response.data, None);

    Ok(())
}

#[tokio::test]
async fn metrics_are_labelled() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::GET, "/admin/new-signups", Reply::ok(stat(4, 30, -2.5)));

    let response = app.client.metric(Metric::NewSignups, None).await?;

    let stat = response.data.expect("stat");
    assert_eq!(stat.label, "New Signups");
    assert_eq!(stat.value_daily, StatValue::Number(4.0));
    assert_eq!(stat.value_weekly, Some(StatValue::Number(30.0)));
    assert_eq!(stat.diff, Some(-2.5));

    Ok(())
}

#[tokio::test]
async fn admin_check_reports_status_only() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::GET, "/admin", Reply::detail(401, "Not authenticated"));

    let status = app.client.admin_check(None).await?;

    assert_eq!(status, StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn recent_activities_sends_paging() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let at: Timestamp = "2025-03-01T09:30:00Z".parse()?;
    app.backend.on(
        Method::GET,
        "/admin/recent-activities",
        Reply::ok(json!({
            "total": 1,
            "activities": [activity(7, "user_signup", "New user", at)],
            "limit": 10,
            "offset": 0,
        })),
    );

    let response = app.client.recent_activities(10, 0, None).await?;

    let page = response.data.expect("activities");
    assert_eq!(page.total, 1);
    assert_eq!(page.activities[0].occurred_at, Some(at));
    let sent = app
        .backend
        .requests_to(Method::GET, "/admin/recent-activities");
    assert_eq!(sent[0].query, "limit=10&offset=0");

    Ok(())
}

#[tokio::test]
async fn admin_writes_send_json_bodies() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::POST, "/admin", Reply::ok(json!({ "detail": "ok" })));
    app.backend.on(
        Method::POST,
        "/admin/admin-config",
        Reply::ok(json!({ "detail": "saved" })),
    );

    let registered = app
        .client
        .register_admin(&RegisterAdmin {
            email: "admin@example.com".into(),
        })
        .await?;
    assert_eq!(registered.detail.as_deref(), Some("ok"));

    let last_updated: Timestamp = "2025-03-01T09:30:00Z".parse()?;
    app.client
        .add_email_recipient(&AdminConfig {
            target_email: "digest@example.com".into(),
            summary_send_time: SUMMARY_SEND_TIMES[1],
            last_updated,
        })
        .await?;

    let sent = app.backend.requests_to(Method::POST, "/admin");
    assert_eq!(sent[0].body, Some(json!({ "email": "admin@example.com" })));
    let sent = app.backend.requests_to(Method::POST, "/admin/admin-config");
    assert_eq!(
        sent[0].body,
        Some(json!({
            "target_email": "digest@example.com",
            "summary_send_time": "14:00:00",
            "last_updated": "2025-03-01T09:30:00Z",
        }))
    );

    Ok(())
}

#[tokio::test]
async fn google_callback_returns_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::POST,
        "/auth/google/callback",
        Reply::ok(json!({ "token": "abc" })),
    );

    let response = app
        .client
        .google_callback(&GoogleCallback { code: "4/0Ab".into() })
        .await?;

    assert_eq!(response.data.and_then(|r| r.token).as_deref(), Some("abc"));
    let sent = app.backend.requests_to(Method::POST, "/auth/google/callback");
    assert_eq!(sent[0].body, Some(json!({ "code": "4/0Ab" })));

    Ok(())
}
