//! One-shot dismissal timer.
//!
//! The timer is a spawned task that sleeps for the dismissal delay and then
//! runs a callback. [`DismissTimer`] is the cancellation handle: cancelling or
//! dropping it aborts the task, so the callback can never run after the form
//! that owns the handle is gone.

use std::time::Duration;

use tokio::task::JoinHandle;

use crate::Environment;

/// Handle to a pending deferred dismissal.
///
/// Must be created inside a tokio runtime.
#[derive(Debug)]
pub struct DismissTimer {
    handle: JoinHandle<()>,
}

impl DismissTimer {
    /// Run `on_fire` once `delay` has elapsed on `env`'s clock.
    pub fn start<E, F>(env: &E, delay: Duration, on_fire: F) -> Self
    where
        E: Environment,
        F: FnOnce() + Send + 'static,
    {
        let env = env.clone();
        let handle = tokio::spawn(async move {
            env.sleep(delay).await;
            on_fire();
        });
        Self { handle }
    }

    /// Discard the pending callback.
    pub fn cancel(self) {
        drop(self);
    }
}

impl Drop for DismissTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
