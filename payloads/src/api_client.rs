use crate::{
    Article, CancelToken, Decoded, Metric, Stat, TokenStore, cancel, decode,
    requests, responses,
};
use reqwest::{Method, StatusCode};
use secrecy::ExposeSecret;
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use std::sync::Arc;

type ClientResult<T> = Result<ApiResponse<T>, ClientError>;

/// An API client for interfacing with the backend.
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    /// Source of the bearer token attached to every request.
    pub tokens: Arc<dyn TokenStore>,
}

/// The envelope every request resolves to, whatever the HTTP verb.
///
/// `ok` is true iff the status is 2xx and the body parsed and decoded as the
/// expected JSON (or the status is 204, which has no body). `data` is only
/// present when `ok` is true.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    pub status: StatusCode,
    pub data: Option<T>,
    pub ok: bool,
    /// The `detail` message of a JSON object body, present on success and
    /// failure alike.
    pub detail: Option<String>,
}

impl<T> ApiResponse<T> {
    fn rejected(status: StatusCode, detail: Option<String>) -> Self {
        Self {
            status,
            data: None,
            ok: false,
            detail,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            status: self.status,
            data: self.data.map(f),
            ok: self.ok,
            detail: self.detail,
        }
    }

    /// Like [`ApiResponse::map`], but a `None` from `f` marks the response
    /// as not ok.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> Option<U>) -> ApiResponse<U> {
        let data = self.data.and_then(f);
        // 204 carries no data but is still ok
        let ok = self.ok
            && (data.is_some() || self.status == StatusCode::NO_CONTENT);
        ApiResponse {
            status: self.status,
            data: if ok { data } else { None },
            ok,
            detail: self.detail,
        }
    }
}

/// Helper methods for http actions
impl APIClient {
    pub fn new(
        address: impl Into<String>,
        tokens: Arc<dyn TokenStore>,
    ) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            tokens,
        }
    }

    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", &self.address)
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.inner_client.request(method, self.format_url(path));
        match self.tokens.get() {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<T> {
        let exchange = async {
            let response = request.send().await?;
            envelope(response).await
        };
        match cancel {
            Some(token) => token.run(exchange).await?,
            None => exchange.await,
        }
    }

    /// Only transport failures and cancellation are errors; HTTP failures
    /// come back as a not-ok envelope.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<T> {
        self.send(self.request(Method::GET, path), cancel).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        self.send(self.request(Method::POST, path).json(body), None)
            .await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> ClientResult<T> {
        self.send(self.request(Method::PUT, path).json(body), None)
            .await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> ClientResult<T> {
        self.send(self.request(Method::DELETE, path), None).await
    }
}

/// Methods on the backend API
impl APIClient {
    /// Fetch the news feed, decoding each article separately.
    pub async fn news_report(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<Vec<Decoded<Article>>> {
        let response = self.get::<Value>("/news-report", cancel).await?;
        Ok(response.and_then(|body| {
            let items = decode::list_items(body);
            if items.is_none() {
                tracing::warn!(
                    "news report body is neither a list nor {{data: [..]}}"
                );
            }
            items.map(decode::decode_each)
        }))
    }

    /// Check whether the current token grants admin access. Only the status
    /// is meaningful.
    pub async fn admin_check(
        &self,
        cancel: Option<&CancelToken>,
    ) -> Result<StatusCode, ClientError> {
        let response = self.get::<Value>("/admin", cancel).await?;
        Ok(response.status)
    }

    /// Fetch one dashboard metric, labelled with the metric's name.
    pub async fn metric(
        &self,
        metric: Metric,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<Stat> {
        let response = self.get::<Stat>(metric.path(), cancel).await?;
        Ok(response.map(|mut stat| {
            if stat.label.is_empty() {
                stat.label = metric.label().to_string();
            }
            stat
        }))
    }

    pub async fn active_users(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<Stat> {
        self.metric(Metric::ActiveUsers, cancel).await
    }

    pub async fn new_signups(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<Stat> {
        self.metric(Metric::NewSignups, cancel).await
    }

    pub async fn reports_generated(
        &self,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<Stat> {
        self.metric(Metric::ReportsGenerated, cancel).await
    }

    pub async fn recent_activities(
        &self,
        limit: u32,
        offset: u32,
        cancel: Option<&CancelToken>,
    ) -> ClientResult<responses::RecentActivities> {
        let path =
            format!("/admin/recent-activities?limit={limit}&offset={offset}");
        self.get(&path, cancel).await
    }

    pub async fn register_admin(
        &self,
        details: &requests::RegisterAdmin,
    ) -> ClientResult<responses::Detail> {
        self.post("/admin", details).await
    }

    pub async fn add_email_recipient(
        &self,
        details: &requests::AdminConfig,
    ) -> ClientResult<responses::Detail> {
        self.post("/admin/admin-config", details).await
    }

    /// Exchange a Google authorization code for a bearer token.
    pub async fn google_callback(
        &self,
        details: &requests::GoogleCallback,
    ) -> ClientResult<responses::AuthToken> {
        self.post("/auth/google/callback", details).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The request never produced a response, holding the transport's
    /// message.
    #[error("{0}")]
    Network(#[from] reqwest::Error),
    /// The caller cancelled the request. Never a user-facing failure.
    #[error("Request cancelled")]
    Cancelled,
}

impl ClientError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<cancel::Cancelled> for ClientError {
    fn from(_: cancel::Cancelled) -> Self {
        Self::Cancelled
    }
}

/// Read a response into the envelope.
pub async fn envelope<T: DeserializeOwned>(
    response: reqwest::Response,
) -> ClientResult<T> {
    let status = response.status();
    if status == StatusCode::NO_CONTENT {
        return Ok(ApiResponse {
            status,
            data: None,
            ok: status.is_success(),
            detail: None,
        });
    }
    let body = response.bytes().await?;
    Ok(parse_envelope(status, &body))
}

/// Build the envelope for a body that has already been read.
pub fn parse_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &[u8],
) -> ApiResponse<T> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("{status} response body is not JSON: {e}");
            return ApiResponse::rejected(status, None);
        }
    };

    let detail = value
        .get("detail")
        .and_then(Value::as_str)
        .map(str::to_owned);

    if !status.is_success() {
        return ApiResponse::rejected(status, detail);
    }

    match decode::decode::<T>(value) {
        Decoded::Valid(data) => ApiResponse {
            status,
            data: Some(data),
            ok: true,
            detail,
        },
        Decoded::Invalid(reason) => {
            tracing::warn!(
                "{status} response has an unexpected shape: {reason}"
            );
            ApiResponse::rejected(status, detail)
        }
    }
}
