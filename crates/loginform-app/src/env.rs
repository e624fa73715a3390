//! Environment abstraction for time.
//!
//! Decouples the runtime from the system clock so dismissal timing can be
//! tested against a paused or virtual clock.

use std::{future::Future, ops::Sub, time::Duration};

/// Abstract environment providing a monotonic clock and async sleep.
///
/// # Invariants
///
/// - `now()` never goes backwards.
/// - `sleep(d)` completes no earlier than `d` after it was first polled.
pub trait Environment: Clone + Send + Sync + 'static {
    /// Instant type. Production uses tokio's clock, which honours a paused
    /// test runtime.
    type Instant: Copy + Ord + Send + Sync + Sub<Output = Duration>;

    /// Current time (monotonic).
    fn now(&self) -> Self::Instant;

    /// Sleep for the given duration.
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Environment backed by the tokio clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl SystemEnv {
    /// Create a new system environment.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Environment for SystemEnv {
    type Instant = tokio::time::Instant;

    #[allow(clippy::disallowed_methods)]
    fn now(&self) -> Self::Instant {
        tokio::time::Instant::now()
    }

    fn sleep(&self, duration: Duration) -> impl Future<Output = ()> + Send {
        tokio::time::sleep(duration)
    }
}
