//! Access check guarding the admin dashboard.

use crate::{Cycle, Lifecycle, timer::Timer};
use payloads::APIClient;
use reqwest::StatusCode;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminAccess {
    Granted,
    Denied,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GateConfig {
    /// How often a mounted dashboard asks again.
    pub recheck_interval: Duration,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            recheck_interval: Duration::from_secs(60 * 60),
        }
    }
}

/// Ask the backend whether the stored token is an admin's.
///
/// Only a 200 grants access. Returns `None` when the answer no longer
/// matters because the cycle was cancelled or superseded.
pub async fn check_admin(
    client: &APIClient,
    cycle: &Cycle,
) -> Option<AdminAccess> {
    let access = match client.admin_check(Some(cycle.token())).await {
        Ok(StatusCode::OK) => AdminAccess::Granted,
        Ok(status) => {
            tracing::info!("admin check answered {status}");
            AdminAccess::Denied
        }
        Err(e) if e.is_cancelled() => {
            tracing::debug!("admin check cancelled");
            return None;
        }
        Err(e) => {
            tracing::warn!("admin check failed: {e}");
            AdminAccess::Denied
        }
    };
    cycle.is_current().then_some(access)
}

/// Check access now and then every `recheck_interval` while `lifecycle`
/// stays mounted, reporting each answer. Stops after the first denial.
pub async fn guard_admin<T: Timer>(
    client: &APIClient,
    lifecycle: &Lifecycle,
    timer: &T,
    config: GateConfig,
    mut on_access: impl FnMut(AdminAccess),
) {
    loop {
        let cycle = lifecycle.begin();
        let Some(access) = check_admin(client, &cycle).await else {
            return;
        };
        on_access(access);
        if access == AdminAccess::Denied {
            return;
        }

        // unmounting cancels the live cycle, which ends the wait at once
        let slept =
            cycle.token().run(timer.sleep(config.recheck_interval)).await;
        if slept.is_err() || !lifecycle.is_mounted() {
            return;
        }
    }
}
