//! Submit flow shared by the admin forms that take an email address.

use payloads::requests::validate_email;
use payloads::{ApiResponse, ClientError};
use std::future::Future;

/// Shown after an accepted submit when the server sent no message.
pub const DEFAULT_SUCCESS: &str = "Registration request submitted";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The address failed validation; nothing was sent.
    Rejected(String),
    Accepted(String),
    ServerError(String),
    NetworkError(String),
}

impl SubmitOutcome {
    pub fn message(&self) -> &str {
        match self {
            Self::Rejected(message)
            | Self::Accepted(message)
            | Self::ServerError(message)
            | Self::NetworkError(message) => message,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }
}

/// Validate `email` and, if it passes, hand it to `send`.
///
/// Success is decided by the HTTP status alone; a 2xx reply whose body is
/// empty or not JSON is still accepted.
pub async fn submit<T, F, Fut>(email: &str, send: F) -> SubmitOutcome
where
    F: FnOnce(String) -> Fut,
    Fut: Future<Output = Result<ApiResponse<T>, ClientError>>,
{
    if let Some(message) = validate_email(email).error_message() {
        return SubmitOutcome::Rejected(message.to_string());
    }

    match send(email.to_string()).await {
        Ok(response) if response.status.is_success() => {
            SubmitOutcome::Accepted(
                response.detail.unwrap_or_else(|| DEFAULT_SUCCESS.to_string()),
            )
        }
        Ok(response) => {
            tracing::warn!("submit answered {}", response.status);
            SubmitOutcome::ServerError(response.detail.unwrap_or_else(|| {
                format!("Server returned {}", response.status.as_u16())
            }))
        }
        Err(e) => {
            tracing::warn!("submit failed: {e}");
            SubmitOutcome::NetworkError(e.to_string())
        }
    }
}

/// What an email form shows. At most one submit is in flight at a time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub input: String,
    pub submitting: bool,
    pub outcome: Option<SubmitOutcome>,
}

impl FormState {
    pub fn edit(&mut self, input: String) {
        self.input = input;
    }

    /// Enter the submitting state. Returns false if a submit is already in
    /// flight.
    pub fn start(&mut self) -> bool {
        if self.submitting {
            return false;
        }
        self.submitting = true;
        self.outcome = None;
        true
    }

    pub fn settle(&mut self, outcome: SubmitOutcome) {
        self.submitting = false;
        if outcome.is_success() {
            self.input.clear();
        }
        self.outcome = Some(outcome);
    }
}
