//! The fetch-on-mount state machine shared by every data-backed view.

use crate::{Cycle, FetchError};
use std::future::Future;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Failed,
}

/// A piece of server data a view fetches on mount.
pub trait Resource: Sized {
    /// Shown when a fetch fails for any reason other than cancellation.
    const ERROR_MESSAGE: &'static str;

    /// Data to show instead when the fetch fails.
    fn fallback() -> Option<Self> {
        None
    }

    /// A message to show next to successfully loaded but incomplete data.
    fn warning(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResourceState<T> {
    pub phase: Phase,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> Default for ResourceState<T> {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            data: None,
            error: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Transition<T> {
    Start,
    Load(T),
    Fail { error: String, fallback: Option<T> },
}

impl<T: Resource> ResourceState<T> {
    pub fn reduce(self, transition: Transition<T>) -> Self {
        match transition {
            Transition::Start => Self {
                phase: Phase::Loading,
                data: self.data,
                error: None,
            },
            Transition::Load(data) => Self {
                phase: Phase::Success,
                error: data.warning(),
                data: Some(data),
            },
            Transition::Fail { error, fallback } => Self {
                phase: Phase::Failed,
                data: fallback.or(self.data),
                error: Some(error),
            },
        }
    }
}

impl<T> ResourceState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Idle | Phase::Loading)
    }
}

/// Drive one fetch cycle, reporting transitions through `apply`.
///
/// Nothing is reported once `cycle` stops being current, and a cancelled
/// fetch reports nothing at all. Returns the phase the cycle ended in, or
/// `None` if its result was discarded.
pub async fn load<T, F>(
    cycle: &Cycle,
    fetch: F,
    mut apply: impl FnMut(Transition<T>),
) -> Option<Phase>
where
    T: Resource,
    F: Future<Output = Result<T, FetchError>>,
{
    if !cycle.apply(|| apply(Transition::Start)) {
        return None;
    }

    match fetch.await {
        Ok(data) => cycle
            .apply(|| apply(Transition::Load(data)))
            .then_some(Phase::Success),
        Err(e) if e.is_cancelled() => {
            tracing::debug!("cycle {} cancelled", cycle.generation());
            None
        }
        Err(e) => {
            tracing::warn!("{}: {e}", T::ERROR_MESSAGE);
            cycle
                .apply(|| {
                    apply(Transition::Fail {
                        error: T::ERROR_MESSAGE.to_string(),
                        fallback: T::fallback(),
                    })
                })
                .then_some(Phase::Failed)
        }
    }
}
