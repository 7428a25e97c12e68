//! Generation guard for asynchronous work owned by a view.
//!
//! A view owns one [`Lifecycle`]. Every fetch runs inside a [`Cycle`]
//! obtained from [`Lifecycle::begin`]; its results may only be written back
//! while the cycle is current, i.e. the view is still mounted and no newer
//! cycle has started. Starting a cycle or unmounting also cancels the
//! previous cycle's in-flight requests.

use payloads::CancelToken;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone)]
pub struct Lifecycle {
    inner: Rc<RefCell<State>>,
}

#[derive(Debug)]
struct State {
    generation: u64,
    mounted: bool,
    live: Option<CancelToken>,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for Lifecycle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Lifecycle {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(State {
                generation: 0,
                mounted: true,
                live: None,
            })),
        }
    }

    /// Start a new cycle, superseding (and cancelling) the previous one.
    pub fn begin(&self) -> Cycle {
        let mut state = self.inner.borrow_mut();
        if let Some(previous) = state.live.take() {
            previous.cancel();
        }
        state.generation += 1;
        let token = CancelToken::new();
        if !state.mounted {
            token.cancel();
        }
        state.live = Some(token.clone());
        Cycle {
            generation: state.generation,
            token,
            lifecycle: self.clone(),
        }
    }

    /// The owning view went away. No cycle is current afterwards.
    pub fn unmount(&self) {
        let mut state = self.inner.borrow_mut();
        state.mounted = false;
        if let Some(live) = state.live.take() {
            live.cancel();
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.inner.borrow().mounted
    }

    pub fn generation(&self) -> u64 {
        self.inner.borrow().generation
    }
}

/// One run of a fetch. Cheap to clone.
#[derive(Debug, Clone)]
pub struct Cycle {
    generation: u64,
    token: CancelToken,
    lifecycle: Lifecycle,
}

impl Cycle {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Pass to the client so superseded requests are aborted.
    pub fn token(&self) -> &CancelToken {
        &self.token
    }

    pub fn is_current(&self) -> bool {
        let state = self.lifecycle.inner.borrow();
        state.mounted && state.generation == self.generation
    }

    /// Run `f` only if this cycle is still current. Returns whether it ran.
    pub fn apply(&self, f: impl FnOnce()) -> bool {
        if self.is_current() {
            f();
            true
        } else {
            tracing::debug!(
                "dropping update from stale cycle {}",
                self.generation
            );
            false
        }
    }
}
