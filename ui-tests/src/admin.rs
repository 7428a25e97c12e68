use anyhow::Result;
use fantoccini::Locator;
use jiff::Timestamp;
use serde_json::json;
use test_helpers::mock::DevDataset;
use test_helpers::{Method, Reply};
use tracing::info;

use crate::framework::{
    TestEnvironment, fill_input, wait_for, wait_for_path, wait_for_text,
};

const REGISTER_INPUT: &str = "register-admin-email";
const REGISTER_SUBMIT: &str =
    "//form[.//input[@id='register-admin-email']]//button[@type='submit']";

/// The register-admin form validates locally, then reports the server's
/// answer and clears its input.
///
/// Steps:
/// - Serve the development dataset, with POST /admin answering `{detail: "ok"}`
/// - Open the dashboard and submit "invalid"
/// - Verify the validation message and that nothing was posted
/// - Submit "admin@example.com"
/// - Verify the "ok" message, the cleared input and the posted body
#[tokio::test]
async fn test_register_admin_form() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    DevDataset::new(Timestamp::now()).install(&env.api.backend);
    env.api
        .backend
        .on(Method::POST, "/admin", Reply::ok(json!({ "detail": "ok" })));

    info!("🔐 Opening admin dashboard");
    env.open("/admin/dashboard").await?;
    wait_for(&env.browser, Locator::Id(REGISTER_INPUT)).await?;

    info!("✍️ Submitting an invalid address");
    fill_input(&env.browser, REGISTER_INPUT, "invalid").await?;
    env.browser
        .find(Locator::XPath(REGISTER_SUBMIT))
        .await?
        .click()
        .await?;
    wait_for_text(&env.browser, "Please enter a valid email address").await?;
    assert!(env.api.backend.requests_to(Method::POST, "/admin").is_empty());

    info!("✍️ Submitting a valid address");
    fill_input(&env.browser, REGISTER_INPUT, "admin@example.com").await?;
    env.browser
        .find(Locator::XPath(REGISTER_SUBMIT))
        .await?
        .click()
        .await?;
    wait_for_text(&env.browser, "ok").await?;

    let input = env.browser.find(Locator::Id(REGISTER_INPUT)).await?;
    assert_eq!(input.prop("value").await?.as_deref(), Some(""));
    let sent = env.api.backend.requests_to(Method::POST, "/admin");
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].body, Some(json!({ "email": "admin@example.com" })));

    info!("✅ Register admin form test completed successfully");
    Ok(())
}

/// A dashboard visit without admin rights ends on /auth-failed.
///
/// Steps:
/// - Make GET /admin answer 401
/// - Open the dashboard
/// - Verify the redirect and that no dashboard content was rendered
#[tokio::test]
async fn test_dashboard_redirects_without_admin_rights() -> Result<()> {
    let env = TestEnvironment::setup().await?;
    env.api.backend.on(
        Method::GET,
        "/admin",
        Reply::detail(401, "Not authenticated"),
    );

    info!("🔐 Opening admin dashboard as a non-admin");
    env.open("/admin/dashboard").await?;
    wait_for_path(&env.browser, "/auth-failed").await?;

    wait_for_text(&env.browser, "Authentication Failed").await?;
    let actions = env
        .browser
        .find_all(Locator::XPath("//h2[text()='Admin Actions']"))
        .await?;
    assert!(actions.is_empty());
    assert!(
        env.api
            .backend
            .requests_to(Method::GET, "/admin/active-users")
            .is_empty()
    );

    info!("✅ Dashboard redirect test completed successfully");
    Ok(())
}
