//! Development server for the news client UI
//!
//! This binary runs the mock backend with a realistic dataset so the UI can
//! be developed without the real backend, its database or Google sign-in.
//!
//! Usage: cargo run -p dev-server

use anyhow::Result;
use jiff::Timestamp;
use test_helpers::mock::DevDataset;
use test_helpers::telemetry;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber);

    info!("🚀 Starting news client development server");

    let ip = std::env::var("IP_ADDRESS").unwrap_or_else(|_| "127.0.0.1".into());
    let port = match std::env::var("PORT") {
        Ok(port) => port.parse()?,
        Err(_) => 8000,
    };

    let app = test_helpers::spawn_app_on(&ip, port).await?;
    info!("✅ Mock API running on http://{ip}:{}", app.port);

    info!("📊 Installing development dataset...");
    let dataset = DevDataset::new(Timestamp::now());
    dataset.install(&app.backend);

    info!("🎯 Development server ready!");
    info!("   API: http://{ip}:{}", app.port);
    info!(
        "   UI:  cd ui && BACKEND_URL=http://{ip}:{} trunk serve",
        app.port
    );
    info!("");
    dataset.print_summary();
    info!("");
    info!("👋 Press Ctrl+C to shutdown");

    // Keep server running until Ctrl+C
    tokio::signal::ctrl_c().await?;
    info!("🛑 Shutting down development server");
    Ok(())
}
