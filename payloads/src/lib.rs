pub mod api_client;
pub mod cancel;
pub mod decode;
pub mod requests;
pub mod responses;
pub mod tokens;

pub use api_client::{APIClient, ApiResponse, ClientError};
pub use cancel::CancelToken;
pub use decode::Decoded;
pub use tokens::{AUTH_TOKEN_KEY, MemoryTokenStore, TokenStore};

use serde::{Deserialize, Serialize};

/// Identity of an [`Article`].
///
/// The backend has served ids both as integers and as strings holding an
/// integer, so deserialization accepts either.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    derive_more::Display,
)]
#[serde(transparent)]
pub struct ArticleId(pub i64);

impl<'de> Deserialize<'de> for ArticleId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        decode::coerce_i64(deserializer).map(ArticleId)
    }
}

/// A news item as served by `/news-report`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub id: ArticleId,
    pub headline: String,
    pub summary: String,
    pub url: String,
    #[serde(deserialize_with = "decode::coerce_f64")]
    pub peak_interest: f64,
    #[serde(deserialize_with = "decode::coerce_f64")]
    pub current_interest: f64,
    #[serde(default)]
    pub news_section: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
}

impl Article {
    pub fn popularity(&self) -> Popularity {
        Popularity::of(self.current_interest)
    }
}

/// Coarse bucket of an article's current search interest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popularity {
    High,
    Medium,
    Low,
}

impl Popularity {
    pub fn of(current_interest: f64) -> Self {
        if current_interest >= 75.0 {
            Self::High
        } else if current_interest >= 50.0 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

/// A dashboard metric value. The backend sends counts, but placeholder
/// values such as "—" are text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_more::Display)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

/// Data for one dashboard metric tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Not sent by the backend; filled in from the [`Metric`] that was
    /// requested.
    #[serde(default)]
    pub label: String,
    pub value_daily: StatValue,
    #[serde(default)]
    pub value_weekly: Option<StatValue>,
    /// Week-over-week change in percent.
    #[serde(default)]
    pub diff: Option<f64>,
}

/// The metrics shown on the admin dashboard, one endpoint each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ActiveUsers,
    NewSignups,
    ReportsGenerated,
}

impl Metric {
    pub const ALL: [Metric; 3] =
        [Self::ActiveUsers, Self::NewSignups, Self::ReportsGenerated];

    pub fn path(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "/admin/active-users",
            Self::NewSignups => "/admin/new-signups",
            Self::ReportsGenerated => "/admin/reports-generated",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ActiveUsers => "Active Users",
            Self::NewSignups => "New Signups",
            Self::ReportsGenerated => "Reports Generated",
        }
    }
}
