//! Fixtures for tests and the development dataset served by dev-server.

use crate::{MockBackend, Reply};
use actix_web::http::Method;
use jiff::{Span, Timestamp};
use loaders::news::sample_articles;
use serde_json::{Value, json};

/// An article as the backend serializes it, with its id as a string.
pub fn article(id: i64, headline: &str, current_interest: f64) -> Value {
    json!({
        "id": id.to_string(),
        "headline": headline,
        "summary": format!("Summary of {headline}"),
        "url": format!("https://news.example.com/articles/{id}"),
        "peak_interest": 100,
        "current_interest": current_interest,
        "news_section": "world",
        "thumbnail": format!("https://images.example.com/{id}.jpg"),
    })
}

pub fn stat(value_daily: i64, value_weekly: i64, diff: f64) -> Value {
    json!({
        "value_daily": value_daily,
        "value_weekly": value_weekly,
        "diff": diff,
    })
}

pub fn activity(
    id: i64,
    activity_type: &str,
    description: &str,
    at: Timestamp,
) -> Value {
    json!({
        "id": id,
        "activity_type": activity_type,
        "description": description,
        "occurred_at": at.to_string(),
        "entity_id": id * 10,
        "entity_type": "user",
    })
}

/// Realistic replies for every endpoint the UI calls.
pub struct DevDataset {
    pub articles: Vec<Value>,
    pub metrics: [(Method, &'static str, Value); 3],
    pub activities: Vec<Value>,
}

impl DevDataset {
    pub fn new(now: Timestamp) -> Self {
        let articles = sample_articles()
            .iter()
            .filter_map(|article| serde_json::to_value(article).ok())
            .collect();

        let ago = |minutes: i64| now - Span::new().minutes(minutes);
        let activities = vec![
            activity(1, "report_generated", "Daily news report generated", ago(12)),
            activity(2, "user_signup", "New user signed up: reader@example.com", ago(47)),
            activity(3, "admin_added", "admin@example.com was made an admin", ago(180)),
            activity(4, "recipient_added", "Digest recipient added for 08:00", ago(600)),
            activity(5, "report_generated", "Daily news report generated", ago(1452)),
        ];

        Self {
            articles,
            metrics: [
                (Method::GET, "/admin/active-users", stat(128, 742, 12.5)),
                (Method::GET, "/admin/new-signups", stat(9, 61, -4.2)),
                (Method::GET, "/admin/reports-generated", stat(3, 21, 0.0)),
            ],
            activities,
        }
    }

    /// Script `backend` to serve this dataset. The token is not checked, so
    /// the dashboard is always reachable.
    pub fn install(&self, backend: &MockBackend) {
        backend.on(Method::GET, "/news-report", Reply::ok(json!(self.articles)));
        backend.on(Method::GET, "/admin", Reply::ok(json!({ "detail": "ok" })));
        for (method, path, stat) in &self.metrics {
            backend.on(method.clone(), path, Reply::ok(stat.clone()));
        }
        backend.on(
            Method::GET,
            "/admin/recent-activities",
            Reply::ok(json!({
                "total": self.activities.len(),
                "activities": self.activities,
                "limit": 10,
                "offset": 0,
            })),
        );
        backend.on(
            Method::POST,
            "/admin",
            Reply::ok(json!({ "detail": "Admin registration received" })),
        );
        backend.on(
            Method::POST,
            "/admin/admin-config",
            Reply::ok(json!({ "detail": "Email recipient saved" })),
        );
        backend.on(
            Method::POST,
            "/auth/google/callback",
            Reply::ok(json!({ "token": "dev-token" })),
        );
    }

    pub fn print_summary(&self) {
        tracing::info!("📋 Available test data:");
        tracing::info!("   📰 {} articles at /news-report", self.articles.len());
        for (_, path, _) in &self.metrics {
            tracing::info!("   📊 metric at {path}");
        }
        tracing::info!(
            "   🕑 {} entries at /admin/recent-activities",
            self.activities.len()
        );
        tracing::info!("   🔑 /auth/google/callback answers with token \"dev-token\"");
    }
}
