//! Cooperative cancellation for in-flight requests.

use futures::future::{AbortHandle, Abortable};
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};

/// The future was stopped by [`CancelToken::cancel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Request cancelled")]
pub struct Cancelled;

/// A handle that can stop any number of futures started under it.
///
/// Clones share state: cancelling one clone cancels futures run through any
/// of them. Once cancelled, the token stays cancelled.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Debug, Default)]
struct Inner {
    cancelled: bool,
    handles: Vec<AbortHandle>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        let mut inner =
            self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.cancelled = true;
        for handle in inner.handles.drain(..) {
            handle.abort();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .cancelled
    }

    /// Run `future` until it completes or the token is cancelled, whichever
    /// comes first. The future is dropped on cancellation.
    pub async fn run<F: Future>(
        &self,
        future: F,
    ) -> Result<F::Output, Cancelled> {
        let (handle, registration) = AbortHandle::new_pair();
        {
            let mut inner =
                self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            if inner.cancelled {
                return Err(Cancelled);
            }
            inner.handles.push(handle);
        }
        Abortable::new(future, registration).await.map_err(|_| Cancelled)
    }
}
