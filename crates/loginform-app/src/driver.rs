//! Driver trait for abstracting the presentation layer.
//!
//! The [`Driver`] trait decouples the form runtime from any particular UI
//! toolkit. Each frontend implements the trait to deliver input and draw the
//! form, while the generic [`crate::Runtime`] handles all orchestration.

use std::future::Future;

use crate::{FormEvent, LoginForm};

/// Abstracts presentation I/O for the form runtime.
///
/// Implementations provide toolkit-specific input and rendering while the
/// generic [`Runtime`](crate::Runtime) handles submission and dismissal. This
/// ensures the same orchestration code runs in a terminal, a GUI and tests.
///
/// # Implementations
///
/// - **Terminal**: crossterm for key events, ratatui for drawing
/// - **Tests**: scripted events from a channel, renders recorded in memory
pub trait Driver: Send {
    /// Toolkit-specific error type.
    type Error: std::error::Error + Send + 'static;

    /// Wait for the next input event.
    ///
    /// Returns `None` once the presentation layer is gone, which unmounts the
    /// form. The future must be cancel-safe: the runtime drops it whenever a
    /// submission result or timer event arrives first.
    fn poll_event(&mut self) -> impl Future<Output = Result<Option<FormEvent>, Self::Error>> + Send;

    /// Render the form state.
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    fn render(&mut self, form: &LoginForm) -> Result<(), Self::Error>;

    /// Outbound dismissal notification. Called at most once per form.
    fn dismiss(&mut self);

    /// Release presentation resources.
    fn stop(&mut self);
}
