//! Form side-effects and intents.
//!
//! This module defines the [`FormAction`] enum, which represents instructions
//! produced by the [`crate::LoginForm`] state machine for the runtime to
//! execute.

use std::{fmt, time::Duration};

use zeroize::Zeroizing;

/// Actions produced by the form state machine.
#[derive(Clone, PartialEq, Eq)]
pub enum FormAction {
    /// Observable state changed; render the form.
    Render,

    /// Invoke the view model's submit operation exactly once.
    Submit {
        /// Monotonic attempt number, echoed back in the completion event.
        attempt: u64,
        /// Username to submit.
        username: String,
        /// Password to submit. Wiped when the action is dropped.
        password: Zeroizing<String>,
    },

    /// Start the one-shot dismissal timer.
    ScheduleDismiss {
        /// Time until [`crate::FormEvent::DismissTimerFired`] is due.
        delay: Duration,
    },

    /// Notify the owner that the form should be dismissed.
    Dismiss,

    /// The user abandoned the form.
    Cancel,
}

impl fmt::Debug for FormAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Render => f.write_str("Render"),
            Self::Submit { attempt, username, .. } => f
                .debug_struct("Submit")
                .field("attempt", attempt)
                .field("username_len", &username.len())
                .field("password", &"<redacted>")
                .finish(),
            Self::ScheduleDismiss { delay } => {
                f.debug_struct("ScheduleDismiss").field("delay", delay).finish()
            },
            Self::Dismiss => f.write_str("Dismiss"),
            Self::Cancel => f.write_str("Cancel"),
        }
    }
}
