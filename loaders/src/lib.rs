//! Asynchronous state units behind the news client's views.
//!
//! Nothing in here touches the DOM. Each unit takes an [`APIClient`] and a
//! [`Cycle`], so the same code drives the browser hooks and the native
//! tests.
//!
//! [`APIClient`]: payloads::APIClient

pub mod activity;
pub mod auth;
pub mod cycle;
pub mod gate;
pub mod metrics;
pub mod news;
pub mod preload;
pub mod resource;
pub mod submit;
pub mod timer;

pub use cycle::{Cycle, Lifecycle};
pub use resource::{Phase, Resource, ResourceState, Transition, load};

use payloads::{ApiResponse, ClientError};
use reqwest::StatusCode;

/// Why a resource fetch produced no data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// The cycle was superseded or the view went away. Never shown.
    #[error("Request cancelled")]
    Cancelled,
    #[error("{0}")]
    Network(String),
    #[error("Server returned {0}")]
    Status(StatusCode),
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }
}

impl From<ClientError> for FetchError {
    fn from(e: ClientError) -> Self {
        match e {
            ClientError::Cancelled => Self::Cancelled,
            ClientError::Network(e) => Self::Network(e.to_string()),
        }
    }
}

/// Unwrap the data of an envelope, or explain why there is none.
pub fn ok_data<T>(response: ApiResponse<T>) -> Result<T, FetchError> {
    match response {
        ApiResponse {
            ok: true,
            data: Some(data),
            ..
        } => Ok(data),
        ApiResponse { status, .. } if !status.is_success() => {
            Err(FetchError::Status(status))
        }
        ApiResponse { status, .. } => Err(FetchError::Malformed(format!(
            "{status} response without the expected body"
        ))),
    }
}
