use futures::FutureExt;
use futures::future::LocalBoxFuture;
use std::time::Duration;

/// Source of delays, so timing-dependent code runs the same in the browser
/// and under a paused tokio clock.
pub trait Timer: Clone + 'static {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()>;
}

/// Browser timer backed by `setTimeout`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTimer;

#[cfg(target_arch = "wasm32")]
impl Timer for GlooTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        gloo_timers::future::sleep(duration).boxed_local()
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTimer;

#[cfg(not(target_arch = "wasm32"))]
impl Timer for TokioTimer {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        tokio::time::sleep(duration).boxed_local()
    }
}

#[cfg(target_arch = "wasm32")]
pub type DefaultTimer = GlooTimer;

#[cfg(not(target_arch = "wasm32"))]
pub type DefaultTimer = TokioTimer;
