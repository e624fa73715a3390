//! View-model contract supplied by the embedding application.

use std::{future::Future, time::Duration};

use zeroize::Zeroizing;

use crate::{LoginPolicy, Prompt, SubmissionError};

/// Capabilities the login form needs from its owner.
///
/// Only [`prompt`](LoginViewModel::prompt) and
/// [`submit`](LoginViewModel::submit) are required. Validation lives in a
/// separate [`LoginPolicy`] so it stays pure and can be tested without a view
/// model.
///
/// The form treats the view model as read-only: it never mutates it and calls
/// `submit` at most once per accepted submit press.
pub trait LoginViewModel: Send + Sync + 'static {
    /// Title, message and icon shown above the inputs.
    fn prompt(&self) -> Prompt;

    /// Attempt to log in with the given credentials.
    ///
    /// This is the only side-effecting operation. Transport, credential
    /// storage and the authentication protocol are entirely up to the
    /// implementation. The returned error message is displayed verbatim.
    ///
    /// The password is wiped when `password` is dropped; copies the
    /// implementation makes are its own to wipe.
    fn submit(
        &self,
        username: String,
        password: Zeroizing<String>,
    ) -> impl Future<Output = Result<(), SubmissionError>> + Send;

    /// Time to keep the form up after a successful submission before
    /// dismissing it. Zero dismisses immediately.
    fn dismiss_delay(&self) -> Duration {
        Duration::ZERO
    }

    /// Validation and enablement rules.
    fn policy(&self) -> LoginPolicy {
        LoginPolicy::default()
    }
}
