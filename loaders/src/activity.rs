use crate::{FetchError, Resource, ok_data};
use payloads::{APIClient, CancelToken, responses::RecentActivities};

/// How many entries the dashboard's activity list shows.
pub const RECENT_ACTIVITY_LIMIT: u32 = 10;

impl Resource for RecentActivities {
    const ERROR_MESSAGE: &'static str = "Failed to load recent activity";
}

/// Fetch the newest page of the admin activity log.
pub async fn fetch_activity(
    client: &APIClient,
    cancel: &CancelToken,
) -> Result<RecentActivities, FetchError> {
    ok_data(
        client
            .recent_activities(RECENT_ACTIVITY_LIMIT, 0, Some(cancel))
            .await?,
    )
}
