//! An [`ImageLoader`] whose outcomes are scripted per URL.

use futures::FutureExt;
use futures::future::{self, LocalBoxFuture};
use loaders::preload::{ImageError, ImageLoader};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageScript {
    #[default]
    Load,
    Fail,
    /// Never settles on its own.
    Hang,
    LoadAfter(Duration),
}

/// Unscripted URLs load immediately. The handle of a loaded image is its
/// URL.
#[derive(Debug, Clone, Default)]
pub struct FakeImageLoader {
    scripts: Rc<RefCell<HashMap<String, ImageScript>>>,
    calls: Rc<RefCell<Vec<String>>>,
    live: Rc<Cell<usize>>,
}

impl FakeImageLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn script(&self, url: &str, script: ImageScript) {
        self.scripts.borrow_mut().insert(url.to_string(), script);
    }

    /// Every URL passed to `load`, in call order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    pub fn load_count(&self, url: &str) -> usize {
        self.calls.borrow().iter().filter(|u| *u == url).count()
    }

    /// Loads started but neither settled nor dropped.
    pub fn live_loads(&self) -> usize {
        self.live.get()
    }
}

/// Counts a load as live until its future finishes or is dropped.
struct LiveGuard(Rc<Cell<usize>>);

impl LiveGuard {
    fn new(live: &Rc<Cell<usize>>) -> Self {
        live.set(live.get() + 1);
        Self(Rc::clone(live))
    }
}

impl Drop for LiveGuard {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

impl ImageLoader for FakeImageLoader {
    type Handle = String;

    fn load(
        &self,
        url: &str,
    ) -> LocalBoxFuture<'static, Result<String, ImageError>> {
        self.calls.borrow_mut().push(url.to_string());
        let script =
            self.scripts.borrow().get(url).copied().unwrap_or_default();
        let guard = LiveGuard::new(&self.live);
        let url = url.to_string();

        async move {
            let _guard = guard;
            match script {
                ImageScript::Load => Ok(url),
                ImageScript::Fail => Err(ImageError::Failed(url)),
                ImageScript::Hang => future::pending().await,
                ImageScript::LoadAfter(delay) => {
                    tokio::time::sleep(delay).await;
                    Ok(url)
                }
            }
        }
        .boxed_local()
    }
}
