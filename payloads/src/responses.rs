use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// Human-readable outcome message the backend attaches to writes and errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Detail {
    #[serde(default)]
    pub detail: Option<String>,
}

/// Reply to the Google sign-in callback.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    #[serde(default)]
    pub token: Option<String>,
}

/// One entry of the admin activity log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: i64,
    pub activity_type: String,
    pub description: String,
    #[serde(default, deserialize_with = "crate::decode::lenient_timestamp")]
    pub occurred_at: Option<Timestamp>,
    #[serde(default)]
    pub entity_id: Option<i64>,
    #[serde(default)]
    pub entity_type: Option<String>,
}

/// A page of the admin activity log, newest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentActivities {
    pub total: u64,
    pub activities: Vec<Activity>,
    pub limit: u32,
    pub offset: u32,
}
