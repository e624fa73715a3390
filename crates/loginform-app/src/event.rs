//! Form input events.
//!
//! This module defines [`FormEvent`], the complete set of inputs that drive
//! the [`crate::LoginForm`] state machine.
//!
//! Events originate from two sources:
//! - The presentation layer (mount, key presses, field edits, button presses).
//! - The runtime (submission results, the dismissal timer).

use crate::{FormField, KeyInput, SubmissionError};

/// Events processed by the form state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    /// The form became visible. Focus moves to the username input.
    Mounted,

    /// The presentation layer needs a repaint (e.g. the terminal resized).
    Redraw,

    /// Keyboard input applied to the focused field.
    Key(KeyInput),

    /// A field's whole value was replaced.
    FieldChanged {
        /// Edited field.
        field: FormField,
        /// New value.
        value: String,
    },

    /// The user finished editing a field (e.g. pressed Return in it).
    FieldCommitted(FormField),

    /// The submit button was pressed.
    SubmitPressed,

    /// The cancel button was pressed.
    CancelPressed,

    /// The view model accepted a submission.
    SubmitSucceeded {
        /// Attempt number from [`crate::FormAction::Submit`].
        attempt: u64,
    },

    /// The view model rejected a submission.
    SubmitFailed {
        /// Attempt number from [`crate::FormAction::Submit`].
        attempt: u64,
        /// Rejection reason.
        error: SubmissionError,
    },

    /// The post-success dismissal delay elapsed.
    DismissTimerFired,
}
