//! A scriptable stand-in for the news backend.
//!
//! Every request is answered from a table of replies keyed by method and
//! path (query strings are ignored for matching) and then recorded, so
//! tests can check what the client actually sent.

use actix_web::http::{Method, StatusCode, header};
use actix_web::{HttpRequest, HttpResponse, web};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Json { status: u16, body: Value },
    /// A body that is not JSON.
    Raw { status: u16, body: String },
    NoContent,
    Delayed { delay: Duration, reply: Box<Reply> },
}

impl Reply {
    pub fn json(status: u16, body: Value) -> Self {
        Self::Json { status, body }
    }

    pub fn ok(body: Value) -> Self {
        Self::json(200, body)
    }

    /// An error status with a FastAPI style `{"detail": ...}` body.
    pub fn detail(status: u16, detail: &str) -> Self {
        Self::json(status, json!({ "detail": detail }))
    }

    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self::Raw {
            status,
            body: body.into(),
        }
    }

    /// Answer with `self`, but only after `delay`.
    pub fn after(self, delay: Duration) -> Self {
        Self::Delayed {
            delay,
            reply: Box::new(self),
        }
    }
}

/// What the mock saw of one request.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub query: String,
    pub authorization: Option<String>,
    pub body: Option<Value>,
}

#[derive(Debug, Clone, Default)]
pub struct MockBackend {
    inner: Arc<Mutex<State>>,
}

#[derive(Debug, Default)]
struct State {
    replies: HashMap<(Method, String), Reply>,
    requests: Vec<RecordedRequest>,
}

impl MockBackend {
    /// Answer `method path` with `reply` from now on.
    pub fn on(&self, method: Method, path: &str, reply: Reply) {
        self.state().replies.insert((method, path.to_string()), reply);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state().requests.clone()
    }

    pub fn requests_to(
        &self,
        method: Method,
        path: &str,
    ) -> Vec<RecordedRequest> {
        self.state()
            .requests
            .iter()
            .filter(|r| r.method == method && r.path == path)
            .cloned()
            .collect()
    }

    pub fn clear_requests(&self) {
        self.state().requests.clear();
    }

    fn state(&self) -> std::sync::MutexGuard<'_, State> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, request: RecordedRequest) -> Reply {
        let mut state = self.state();
        let reply = state
            .replies
            .get(&(request.method.clone(), request.path.clone()))
            .cloned()
            .unwrap_or_else(|| Reply::detail(404, "Not Found"));
        state.requests.push(request);
        reply
    }
}

/// Default service of the mock's actix app.
pub(crate) async fn respond(
    request: HttpRequest,
    body: web::Bytes,
    backend: web::Data<MockBackend>,
) -> HttpResponse {
    let recorded = RecordedRequest {
        method: request.method().clone(),
        path: request.path().to_string(),
        query: request.query_string().to_string(),
        authorization: request
            .headers()
            .get(header::AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string),
        body: serde_json::from_slice(&body).ok(),
    };
    tracing::debug!("{} {}", recorded.method, recorded.path);

    let mut reply = backend.record(recorded);
    loop {
        match reply {
            Reply::Delayed { delay, reply: next } => {
                tokio::time::sleep(delay).await;
                reply = *next;
            }
            Reply::Json { status, body } => {
                return HttpResponse::build(status_code(status)).json(body);
            }
            Reply::Raw { status, body } => {
                return HttpResponse::build(status_code(status))
                    .content_type("text/plain")
                    .body(body);
            }
            Reply::NoContent => return HttpResponse::NoContent().finish(),
        }
    }
}

fn status_code(status: u16) -> StatusCode {
    StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
}
