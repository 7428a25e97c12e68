use crate::{StateSpy, run};
use jiff::Timestamp;
use loaders::activity::fetch_activity;
use loaders::{Lifecycle, Phase};
use payloads::responses::RecentActivities;
use serde_json::json;
use test_helpers::mock::activity;
use test_helpers::{Method, Reply, spawn_app};

#[tokio::test]
async fn loads_first_page_of_activity() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let at: Timestamp = "2025-03-01T09:30:00Z".parse()?;
    app.backend.on(
        Method::GET,
        "/admin/recent-activities",
        Reply::ok(json!({
            "total": 2,
            "activities": [
                activity(2, "admin_added", "b@example.com was made an admin", at),
                activity(1, "user_signup", "New user signed up", at),
            ],
            "limit": 10,
            "offset": 0,
        })),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<RecentActivities>::new();

    let cycle = lifecycle.begin();
    run(&spy, &cycle, fetch_activity(&app.client, cycle.token())).await;

    let state = spy.state();
    assert_eq!(state.phase, Phase::Success);
    let page = state.data.expect("activity");
    assert_eq!(page.activities.len(), 2);
    assert_eq!(page.activities[0].activity_type, "admin_added");
    let sent = app
        .backend
        .requests_to(Method::GET, "/admin/recent-activities");
    assert_eq!(sent[0].query, "limit=10&offset=0");

    Ok(())
}

#[tokio::test]
async fn failure_keeps_previous_page() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/admin/recent-activities",
        Reply::ok(json!({ "total": 0, "activities": [], "limit": 10, "offset": 0 })),
    );
    let lifecycle = Lifecycle::new();
    let spy = StateSpy::<RecentActivities>::new();
    let cycle = lifecycle.begin();
    run(&spy, &cycle, fetch_activity(&app.client, cycle.token())).await;

    app.backend.on(
        Method::GET,
        "/admin/recent-activities",
        Reply::detail(403, "Not an admin"),
    );
    let cycle = lifecycle.begin();
    let phase = run(&spy, &cycle, fetch_activity(&app.client, cycle.token())).await;

    assert_eq!(phase, Some(Phase::Failed));
    let state = spy.state();
    assert_eq!(state.error.as_deref(), Some("Failed to load recent activity"));
    assert_eq!(state.data.map(|page| page.total), Some(0));

    Ok(())
}
