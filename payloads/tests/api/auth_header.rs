use serde_json::json;
use test_helpers::{Method, Reply, spawn_app};

#[tokio::test]
async fn token_attached_to_every_verb() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.sign_in("secret-token");
    for method in [Method::GET, Method::POST, Method::PUT, Method::DELETE] {
        app.backend.on(method, "/echo", Reply::ok(json!({})));
    }

    app.client.get::<serde_json::Value>("/echo", None).await?;
    app.client.post::<serde_json::Value>("/echo", &json!({})).await?;
    app.client.put::<serde_json::Value>("/echo", &json!({})).await?;
    app.client.delete::<serde_json::Value>("/echo").await?;

    let requests = app.backend.requests();
    assert_eq!(requests.len(), 4);
    for request in requests {
        assert_eq!(
            request.authorization.as_deref(),
            Some("Bearer secret-token"),
            "{} {}",
            request.method,
            request.path
        );
    }

    Ok(())
}

#[tokio::test]
async fn no_header_without_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(Method::GET, "/echo", Reply::ok(json!({})));

    app.client.get::<serde_json::Value>("/echo", None).await?;

    let requests = app.backend.requests_to(Method::GET, "/echo");
    assert_eq!(requests[0].authorization, None);

    Ok(())
}

#[tokio::test]
async fn signing_out_stops_sending_the_token() -> anyhow::Result<()> {
    let app = spawn_app().await;
    app.backend.on(Method::GET, "/echo", Reply::ok(json!({})));
    app.sign_in("secret-token");

    app.client.get::<serde_json::Value>("/echo", None).await?;
    payloads::TokenStore::clear(app.tokens.as_ref());
    app.client.get::<serde_json::Value>("/echo", None).await?;

    let requests = app.backend.requests_to(Method::GET, "/echo");
    assert!(requests[0].authorization.is_some());
    assert_eq!(requests[1].authorization, None);

    Ok(())
}
