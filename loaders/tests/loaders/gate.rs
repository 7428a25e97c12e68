use futures::FutureExt;
use futures::future::LocalBoxFuture;
use loaders::Lifecycle;
use loaders::gate::{AdminAccess, GateConfig, check_admin, guard_admin};
use loaders::timer::{Timer, TokioTimer};
use serde_json::json;
use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;
use test_helpers::{Method, Reply, spawn_app};

#[tokio::test]
async fn ok_status_grants_access() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(Method::GET, "/admin", Reply::ok(json!({})));
    let lifecycle = Lifecycle::new();

    let access = check_admin(&app.client, &lifecycle.begin()).await;

    assert_eq!(access, Some(AdminAccess::Granted));

    Ok(())
}

#[tokio::test]
async fn other_statuses_deny_access() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let lifecycle = Lifecycle::new();

    for reply in [
        Reply::detail(401, "Not authenticated"),
        Reply::detail(403, "Forbidden"),
        Reply::NoContent,
        Reply::raw(500, "oops"),
    ] {
        app.backend.on(Method::GET, "/admin", reply);
        let access = check_admin(&app.client, &lifecycle.begin()).await;
        assert_eq!(access, Some(AdminAccess::Denied));
    }

    Ok(())
}

#[tokio::test]
async fn unreachable_backend_denies_access() -> anyhow::Result<()> {
    let app = spawn_app().await;
    let client = payloads::APIClient::new("http://127.0.0.1:9", app.tokens.clone());

    let access = check_admin(&client, &Lifecycle::new().begin()).await;

    assert_eq!(access, Some(AdminAccess::Denied));

    Ok(())
}

#[tokio::test]
async fn unmounted_gate_reports_nothing() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(
        Method::GET,
        "/admin",
        Reply::ok(json!({})).after(Duration::from_secs(30)),
    );
    let lifecycle = Lifecycle::new();
    let cycle = lifecycle.begin();

    let (access, ()) = tokio::join!(check_admin(&app.client, &cycle), async {
        tokio::time::sleep(Duration::from_millis(50)).await;
        lifecycle.unmount();
    });

    assert_eq!(access, None);

    Ok(())
}

/// Resolves every sleep at once and unmounts the lifecycle after a number
/// of them.
#[derive(Clone)]
struct CountingTimer {
    sleeps: Rc<Cell<usize>>,
    unmount_after: usize,
    lifecycle: Lifecycle,
}

impl Timer for CountingTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        assert_eq!(duration, GateConfig::default().recheck_interval);
        self.sleeps.set(self.sleeps.get() + 1);
        if self.sleeps.get() >= self.unmount_after {
            self.lifecycle.unmount();
        }
        futures::future::ready(()).boxed_local()
    }
}

#[tokio::test]
async fn rechecks_while_mounted() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(Method::GET, "/admin", Reply::ok(json!({})));
    let lifecycle = Lifecycle::new();
    let timer = CountingTimer {
        sleeps: Rc::new(Cell::new(0)),
        unmount_after: 3,
        lifecycle: lifecycle.clone(),
    };
    let mut answers = Vec::new();

    guard_admin(&app.client, &lifecycle, &timer, GateConfig::default(), |a| {
        answers.push(a)
    })
    .await;

    assert_eq!(answers, vec![AdminAccess::Granted; 3]);
    assert_eq!(app.backend.requests_to(Method::GET, "/admin").len(), 3);

    Ok(())
}

#[tokio::test]
async fn stops_after_denial() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend
        .on(Method::GET, "/admin", Reply::detail(401, "Not authenticated"));
    let lifecycle = Lifecycle::new();
    let timer = CountingTimer {
        sleeps: Rc::new(Cell::new(0)),
        unmount_after: usize::MAX,
        lifecycle: lifecycle.clone(),
    };
    let mut answers = Vec::new();

    guard_admin(&app.client, &lifecycle, &timer, GateConfig::default(), |a| {
        answers.push(a)
    })
    .await;

    assert_eq!(answers, vec![AdminAccess::Denied]);
    assert_eq!(timer.sleeps.get(), 0);

    Ok(())
}

#[tokio::test]
async fn unmount_ends_the_recheck_wait() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(Method::GET, "/admin", Reply::ok(json!({})));
    let lifecycle = Lifecycle::new();
    let timer = TokioTimer;
    let mut answers = Vec::new();

    let guard = guard_admin(
        &app.client,
        &lifecycle,
        &timer,
        GateConfig::default(),
        |a| answers.push(a),
    );
    let unmount = async {
        tokio::time::sleep(Duration::from_millis(200)).await;
        lifecycle.unmount();
    };

    // the recheck interval is an hour; the guard must not wait it out
    tokio::time::timeout(Duration::from_secs(5), async {
        tokio::join!(guard, unmount)
    })
    .await?;

    assert_eq!(answers, vec![AdminAccess::Granted]);
    assert_eq!(app.backend.requests_to(Method::GET, "/admin").len(), 1);

    Ok(())
}
