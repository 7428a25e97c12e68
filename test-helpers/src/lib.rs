pub mod backend;
pub mod images;
pub mod mock;
pub mod telemetry;

pub use actix_web::http::Method;
pub use backend::{MockBackend, RecordedRequest, Reply};

use actix_cors::Cors;
use actix_web::dev::Server;
use actix_web::{App, HttpServer, web};
use payloads::{APIClient, MemoryTokenStore, TokenStore};
use secrecy::SecretString;
use std::net::TcpListener;
use std::sync::Arc;
use tracing_log::LogTracer;
use tracing_subscriber::util::SubscriberInitExt;

pub struct TestApp {
    #[allow(unused)]
    pub port: u16,
    pub client: APIClient,
    pub backend: MockBackend,
    pub tokens: Arc<MemoryTokenStore>,
}

impl TestApp {
    /// Store a bearer token, as a completed sign-in would.
    pub fn sign_in(&self, token: &str) {
        self.tokens.set(SecretString::from(token.to_string()));
    }

    pub fn address(&self) -> String {
        format!("http://127.0.0.1:{}", self.port)
    }
}

/// Build the mock server, but not await it.
///
/// Returns the port that the server has bound to; pass 0 to get an
/// OS-assigned one.
pub fn build(
    backend: MockBackend,
    ip: &str,
    port: u16,
) -> std::io::Result<(Server, u16)> {
    let listener = TcpListener::bind(format!("{ip}:{port}"))?;
    let port = listener.local_addr()?.port();
    let data = web::Data::new(backend);
    let server = HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .app_data(data.clone())
            .default_service(web::to(backend::respond))
    })
    .workers(1)
    .listen(listener)?
    .run();
    Ok((server, port))
}

pub async fn spawn_app_on(ip: &str, port: u16) -> anyhow::Result<TestApp> {
    let backend = MockBackend::default();
    let (server, port) = build(backend.clone(), ip, port)?;
    tokio::spawn(server);

    let tokens = Arc::new(MemoryTokenStore::default());
    let client =
        APIClient::new(format!("http://127.0.0.1:{port}"), tokens.clone());
    Ok(TestApp {
        port,
        client,
        backend,
        tokens,
    })
}

/// Use OS-assigned port for parallel testing.
pub async fn spawn_app() -> TestApp {
    let subscriber = telemetry::get_subscriber("error".into());
    let _ = LogTracer::init();
    let _ = subscriber.try_init();

    spawn_app_on("127.0.0.1", 0)
        .await
        .expect("Failed to start mock backend")
}
