//! Browser tests run as standard #[tokio::test]s:
//! `cargo test -p ui-tests`
//!
//! For human-in-the-loop debugging, main() serves the development dataset
//! and opens a headed browser on it.

#![allow(unused)]

use anyhow::Result;
use jiff::Timestamp;
use test_helpers::mock::DevDataset;
use test_helpers::telemetry;
use tracing::info;

mod framework;

#[cfg(test)]
mod admin;
#[cfg(test)]
mod news;

use crate::framework::TestEnvironment;

#[tokio::main]
async fn main() -> Result<()> {
    let subscriber = telemetry::get_subscriber("info".into());
    telemetry::init_subscriber(subscriber);

    info!("🚀 Starting UI test environment");

    info!("🔧 Setting up test environment with headed browser");
    let env = TestEnvironment::setup_headed().await?;

    info!("📊 Installing development dataset");
    let dataset = DevDataset::new(Timestamp::now());
    dataset.install(&env.api.backend);

    env.open("/").await?;

    dataset.print_summary();
    info!("");
    info!("🎯 You can now check:");
    info!("   • the landing page and the news list");
    info!("   • the admin dashboard at /admin/dashboard");
    info!("");
    let current_url = env.browser.current_url().await?;
    info!("🌐 Browser is now open at: {}", current_url);
    info!("👋 Press Ctrl+C to exit and close the browser");

    tokio::signal::ctrl_c().await?;
    info!("📝 Received keyboard interrupt, shutting down...");

    info!("🧹 Cleaning up and closing browser");
    Ok(())
}
