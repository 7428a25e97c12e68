//! Run with debugging output:
//!
//! ```shell
//! RUST_LOG=ui_tests=debug,test_helpers=info cargo test -p ui-tests -- --nocapture
//! ```

use anyhow::{Context, Result};
use fantoccini::elements::Element;
use fantoccini::{Client, ClientBuilder, Locator};
use rand::Rng;
use std::process::{Child, Command, Stdio};
use std::time::Duration;
use test_helpers::TestApp;
use tokio::time::sleep;
use tracing::{debug, info, warn};

pub struct TestEnvironment {
    pub api: TestApp,
    pub browser: Client,
    pub frontend_process: Child,
    pub geckodriver_process: Child,
    pub frontend_url: String,
}

impl TestEnvironment {
    #[cfg(test)]
    pub async fn setup() -> Result<Self> {
        Self::setup_with_options(false).await
    }

    pub async fn setup_headed() -> Result<Self> {
        Self::setup_with_options(true).await
    }

    async fn setup_with_options(headed: bool) -> Result<Self> {
        info!("🔧 Setting up test environment");

        info!("🚀 Starting mock backend");
        let api = test_helpers::spawn_app().await;
        let api_url = api.address();
        info!("✅ Mock backend running on {}", api_url);

        info!("🦎 Starting geckodriver");
        let (geckodriver_process, gecko_port) =
            start_geckodriver_with_retry(4444).await?;
        info!("✅ Geckodriver running on port {}", gecko_port);

        // The UI reads BACKEND_URL at compile time, so every environment
        // builds its own bundle.
        info!("🎨 Starting frontend");
        let (frontend_process, frontend_port) =
            start_frontend_with_retry(8080, &api_url).await?;
        let frontend_url = format!("http://localhost:{}", frontend_port);

        wait_for_frontend(&frontend_url).await?;
        info!("✅ Frontend ready at {}", frontend_url);

        info!("🌐 Connecting to browser");
        let browser = connect_to_browser(gecko_port, headed).await?;
        info!("✅ Browser connected");

        Ok(TestEnvironment {
            api,
            browser,
            frontend_process,
            geckodriver_process,
            frontend_url,
        })
    }

    pub async fn open(&self, path: &str) -> Result<()> {
        debug!("Opening {}", path);
        self.browser
            .goto(&format!("{}{}", self.frontend_url, path))
            .await?;
        Ok(())
    }
}

impl Drop for TestEnvironment {
    fn drop(&mut self) {
        info!("🧹 Cleaning up test environment");

        if let Err(e) = self.frontend_process.kill() {
            warn!("Failed to kill frontend process: {}", e);
        }
        if let Err(e) = self.geckodriver_process.kill() {
            warn!("Failed to kill geckodriver process: {}", e);
        }

        info!("✅ Cleanup complete");
    }
}

/// Start a helper process on a random port near `base_port`, retrying when
/// it exits right away (usually because the port is taken).
async fn spawn_on_free_port(
    name: &str,
    base_port: u16,
    command: impl Fn(u16) -> Command,
) -> Result<(Child, u16)> {
    for attempt in 1..=5 {
        let port = base_port + rand::thread_rng().gen_range(0..=100);
        debug!(
            "Attempting to start {} on port {} (attempt {})",
            name, port, attempt
        );

        match command(port)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
        {
            Ok(mut child) => {
                sleep(Duration::from_millis(500)).await;

                match child.try_wait() {
                    Ok(Some(status)) => {
                        debug!(
                            "{} exited with status {}, trying different port",
                            name, status
                        );
                    }
                    Ok(None) => return Ok((child, port)),
                    Err(e) => {
                        debug!("Error checking {} status: {}", name, e);
                        let _ = child.kill();
                    }
                }
            }
            Err(e) => {
                debug!("Failed to start {}: {}", name, e);
            }
        }

        if attempt < 5 {
            sleep(Duration::from_millis(100)).await;
        }
    }

    Err(anyhow::anyhow!("Failed to start {} after 5 attempts", name))
}

async fn start_geckodriver_with_retry(base_port: u16) -> Result<(Child, u16)> {
    spawn_on_free_port("geckodriver", base_port, |port| {
        let mut command = Command::new("geckodriver");
        command.arg("--port").arg(port.to_string());
        command
    })
    .await
}

async fn start_frontend_with_retry(
    base_port: u16,
    backend_url: &str,
) -> Result<(Child, u16)> {
    debug!("Building frontend with trunk build");
    let status = Command::new("trunk")
        .arg("build")
        .current_dir("../ui")
        .env("BACKEND_URL", backend_url)
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .context("Failed to run trunk build")?;
    if !status.success() {
        return Err(anyhow::anyhow!(
            "Frontend build failed with status: {}",
            status
        ));
    }

    spawn_on_free_port("frontend", base_port, |port| {
        let mut command = Command::new("trunk");
        command
            .arg("serve")
            .arg("--port")
            .arg(port.to_string())
            .current_dir("../ui")
            .env("BACKEND_URL", backend_url);
        command
    })
    .await
}

async fn wait_for_frontend(url: &str) -> Result<()> {
    for i in 1..=30 {
        match reqwest::get(url).await {
            Ok(response) if response.status().is_success() => {
                debug!("Frontend ready after {} attempts", i);
                return Ok(());
            }
            _ => sleep(Duration::from_secs(1)).await,
        }
    }
    Err(anyhow::anyhow!("Frontend failed to start after 30 attempts"))
}

async fn connect_to_browser(gecko_port: u16, headed: bool) -> Result<Client> {
    let gecko_url = format!("http://localhost:{}", gecko_port);

    let mut caps = serde_json::Map::new();
    let firefox_opts = if headed {
        info!("🖥️ Starting browser in headed mode");
        serde_json::json!({
            "log": {"level": "error"}
        })
    } else {
        info!("👻 Starting browser in headless mode");
        serde_json::json!({
            "args": ["--headless"],
            "log": {"level": "error"}
        })
    };
    caps.insert("moz:firefoxOptions".to_string(), firefox_opts);

    ClientBuilder::native()
        .capabilities(caps)
        .connect(&gecko_url)
        .await
        .context("Failed to connect to geckodriver")
}

/// Poll for an element until it shows up, for at most ten seconds.
pub async fn wait_for(browser: &Client, locator: Locator<'_>) -> Result<Element> {
    for _ in 0..50 {
        if let Ok(element) = browser.find(locator).await {
            return Ok(element);
        }
        sleep(Duration::from_millis(200)).await;
    }
    let body = browser.find(Locator::Css("body")).await?.text().await?;
    debug!("Element never appeared. Page content: {}", body);
    Err(anyhow::anyhow!("Timed out waiting for {:?}", locator))
}

/// Wait for an element whose own text is exactly `text`.
pub async fn wait_for_text(browser: &Client, text: &str) -> Result<Element> {
    let xpath = format!("//*[normalize-space(text())='{}']", text);
    wait_for(browser, Locator::XPath(&xpath)).await
}

/// Poll until the browser sits on `path`, for at most ten seconds.
pub async fn wait_for_path(browser: &Client, path: &str) -> Result<()> {
    for _ in 0..50 {
        if browser.current_url().await?.path() == path {
            return Ok(());
        }
        sleep(Duration::from_millis(200)).await;
    }
    let current = browser.current_url().await?;
    Err(anyhow::anyhow!("Expected {}, still on {}", path, current))
}

/// Replace the content of the input with id `id`.
pub async fn fill_input(browser: &Client, id: &str, text: &str) -> Result<()> {
    let field = browser.find(Locator::Id(id)).await?;
    field.click().await?;
    field.clear().await?;
    field.send_keys(text).await?;
    Ok(())
}
