use crate::{FetchError, Resource, ok_data};
use payloads::{APIClient, ApiResponse, CancelToken, Metric, Stat};

/// The three tiles at the top of the admin dashboard. A metric is `None`
/// when its endpoint answered 2xx without a usable stat.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AdminMetrics {
    pub active_users: Option<Stat>,
    pub new_signups: Option<Stat>,
    pub reports_generated: Option<Stat>,
}

impl AdminMetrics {
    pub fn get(&self, metric: Metric) -> Option<&Stat> {
        match metric {
            Metric::ActiveUsers => self.active_users.as_ref(),
            Metric::NewSignups => self.new_signups.as_ref(),
            Metric::ReportsGenerated => self.reports_generated.as_ref(),
        }
    }

    pub fn is_complete(&self) -> bool {
        Metric::ALL.iter().all(|m| self.get(*m).is_some())
    }
}

impl Resource for AdminMetrics {
    const ERROR_MESSAGE: &'static str = "Failed to load admin metrics";

    fn warning(&self) -> Option<String> {
        (!self.is_complete()).then(|| "Failed to fetch data".to_string())
    }
}

/// Fetch all three metrics concurrently.
///
/// Any endpoint answering with an error status, or any transport failure,
/// fails the whole fetch. An endpoint that answers 2xx without a usable
/// stat only blanks its own tile, unless none of them is usable.
pub async fn fetch_metrics(
    client: &APIClient,
    cancel: &CancelToken,
) -> Result<AdminMetrics, FetchError> {
    let (active_users, new_signups, reports_generated) = futures::join!(
        client.active_users(Some(cancel)),
        client.new_signups(Some(cancel)),
        client.reports_generated(Some(cancel)),
    );

    let metrics = AdminMetrics {
        active_users: usable(Metric::ActiveUsers, active_users?)?,
        new_signups: usable(Metric::NewSignups, new_signups?)?,
        reports_generated: usable(
            Metric::ReportsGenerated,
            reports_generated?,
        )?,
    };
    if Metric::ALL.iter().all(|m| metrics.get(*m).is_none()) {
        return Err(FetchError::Malformed(
            "no metric endpoint returned a stat".to_string(),
        ));
    }
    Ok(metrics)
}

fn usable(
    metric: Metric,
    response: ApiResponse<Stat>,
) -> Result<Option<Stat>, FetchError> {
    match ok_data(response) {
        Ok(stat) => Ok(Some(stat)),
        Err(FetchError::Malformed(reason)) => {
            tracing::warn!("{}: {reason}", metric.path());
            Ok(None)
        }
        Err(e) => {
            tracing::warn!("{} failed: {e}", metric.path());
            Err(e)
        }
    }
}
