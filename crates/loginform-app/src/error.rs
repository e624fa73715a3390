//! Error types for the login form.
//!
//! Two kinds of failure reach the form: [`ValidationError`] is raised locally
//! before any submission starts and only redirects focus, while
//! [`SubmissionError`] comes back from the view model's submit operation and
//! is shown to the user verbatim. Neither is fatal; the form always returns to
//! an interactive state.

use thiserror::Error;

use crate::{FocusTarget, FormField};

/// A field rejected by the validation policy.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Username failed validation.
    #[error("username is not valid")]
    Username,

    /// Password failed validation.
    #[error("password is not valid")]
    Password,
}

impl ValidationError {
    /// Field that failed validation.
    pub fn field(self) -> FormField {
        match self {
            Self::Username => FormField::Username,
            Self::Password => FormField::Password,
        }
    }

    /// Where focus moves after this failure.
    pub fn focus_target(self) -> FocusTarget {
        self.field().into()
    }
}

/// Failure reported by the view model's submit operation.
///
/// The message is displayed as-is, so it should be written for the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct SubmissionError {
    message: String,
}

impl SubmissionError {
    /// Create an error with a user-facing message.
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    /// User-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for SubmissionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for SubmissionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Errors that end [`crate::Runtime::run`].
#[derive(Error, Debug)]
pub enum RuntimeError<E: std::error::Error + 'static> {
    /// The driver failed to poll input or render.
    #[error("driver error: {0}")]
    Driver(#[source] E),
}
