//! Observable form state types.
//!
//! This module defines the data the presentation layer reads to render the
//! form: the entered [`Credentials`], the [`SubmissionPhase`], the
//! [`FocusTarget`] and the [`Prompt`] supplied by the view model.
//!
//! None of these types perform I/O. They are owned by [`crate::LoginForm`] and
//! exposed read-only.

use std::fmt;

use zeroize::Zeroize;

use crate::SubmissionError;

/// One of the two editable inputs of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    /// Username input.
    Username,
    /// Password input.
    Password,
}

impl FormField {
    /// The other field.
    pub fn other(self) -> Self {
        match self {
            Self::Username => Self::Password,
            Self::Password => Self::Username,
        }
    }
}

/// Which input should hold keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Username input is focused.
    Username,
    /// Password input is focused.
    Password,
    /// Neither input is focused.
    #[default]
    None,
}

impl FocusTarget {
    /// Focused field. `None` if nothing is focused.
    pub fn field(self) -> Option<FormField> {
        match self {
            Self::Username => Some(FormField::Username),
            Self::Password => Some(FormField::Password),
            Self::None => None,
        }
    }
}

impl From<FormField> for FocusTarget {
    fn from(field: FormField) -> Self {
        match field {
            FormField::Username => Self::Username,
            FormField::Password => Self::Password,
        }
    }
}

/// Lifecycle of a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    /// Waiting for input. Initial state.
    #[default]
    Idle,
    /// A submission is outstanding. Inputs and the submit control are locked.
    InFlight,
    /// The last submission was accepted. Dismissal follows.
    Succeeded,
    /// The last submission was rejected. Fields were cleared and the error is
    /// shown until the next edit that makes a field non-empty.
    Failed(SubmissionError),
}

impl SubmissionPhase {
    /// Whether a submission is outstanding.
    pub fn is_in_flight(&self) -> bool {
        matches!(self, Self::InFlight)
    }

    /// Error to display. `None` unless the last submission failed.
    pub fn error(&self) -> Option<&SubmissionError> {
        match self {
            Self::Failed(error) => Some(error),
            Self::Idle | Self::InFlight | Self::Succeeded => None,
        }
    }
}

/// Username and password held by the form.
///
/// The current password buffer is wiped when cleared and when the value is
/// dropped, including in clones. Buffers the `String` gave up while growing
/// are not tracked. The password handed to
/// [`LoginViewModel::submit`](crate::LoginViewModel::submit) travels as its
/// own [`zeroize::Zeroizing`] copy.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    /// Entered username.
    pub username: String,
    /// Entered password.
    pub password: String,
}

impl Credentials {
    /// Create credentials from the given values.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Value of the given field.
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Username => &self.username,
            FormField::Password => &self.password,
        }
    }

    /// Mutable buffer of the given field.
    pub fn get_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Username => &mut self.username,
            FormField::Password => &mut self.password,
        }
    }

    /// Both fields are empty.
    pub fn is_empty(&self) -> bool {
        self.username.is_empty() && self.password.is_empty()
    }

    /// Wipe both fields.
    pub fn clear(&mut self) {
        self.username.zeroize();
        self.password.zeroize();
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl Drop for Credentials {
    fn drop(&mut self) {
        self.password.zeroize();
    }
}

/// Icon shown next to the prompt.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PromptIcon {
    /// No icon.
    #[default]
    None,
    /// Padlock.
    Lock,
    /// Key.
    Key,
    /// Person silhouette.
    User,
    /// Toolkit-specific icon identifier.
    Named(String),
}

/// Prompt content displayed above the inputs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Prompt {
    /// Headline, e.g. "Sign in".
    pub title: String,
    /// Explanatory text below the title. May be empty.
    pub message: String,
    /// Icon rendered beside the title.
    pub icon: PromptIcon,
}

impl Prompt {
    /// Create a prompt without an icon.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into(), icon: PromptIcon::None }
    }

    /// Set the icon.
    #[must_use]
    pub fn with_icon(mut self, icon: PromptIcon) -> Self {
        self.icon = icon;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_empties_both_fields() {
        let mut credentials = Credentials::new("alice", "secret");
        credentials.clear();

        assert!(credentials.is_empty());
        assert_eq!(credentials.get(FormField::Username), "");
        assert_eq!(credentials.get(FormField::Password), "");
    }

    #[test]
    fn debug_redacts_password() {
        let credentials = Credentials::new("alice", "hunter2");
        let rendered = format!("{credentials:?}");

        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("hunter2"));
    }

    #[test]
    fn focus_maps_to_field() {
        assert_eq!(FocusTarget::Username.field(), Some(FormField::Username));
        assert_eq!(FocusTarget::Password.field(), Some(FormField::Password));
        assert_eq!(FocusTarget::None.field(), None);
        assert_eq!(FocusTarget::from(FormField::Password), FocusTarget::Password);
    }

    #[test]
    fn only_failed_phase_carries_error() {
        let failed = SubmissionPhase::Failed(SubmissionError::new("bad credentials"));

        assert_eq!(failed.error().map(SubmissionError::message), Some("bad credentials"));
        assert!(SubmissionPhase::Idle.error().is_none());
        assert!(SubmissionPhase::InFlight.is_in_flight());
        assert!(!SubmissionPhase::Succeeded.is_in_flight());
    }
}
