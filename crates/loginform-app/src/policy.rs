//! Validation and enablement policy.
//!
//! [`LoginPolicy`] holds the pure rules the form consults before submitting:
//! per-field validators and the submit-button enablement rule. Every rule has
//! a default and can be replaced independently by the embedding application.

use std::{fmt, sync::Arc};

type FieldRule = Arc<dyn Fn(&str) -> bool + Send + Sync>;
type ButtonRule = Arc<dyn Fn(&str, &str) -> bool + Send + Sync>;

/// Pure validation and enablement rules.
///
/// # Defaults
///
/// - Username is valid when non-empty.
/// - Password is valid when non-empty.
/// - The submit button is enabled when both fields are valid under the
///   (possibly overridden) field rules.
#[derive(Clone, Default)]
pub struct LoginPolicy {
    username_rule: Option<FieldRule>,
    password_rule: Option<FieldRule>,
    button_rule: Option<ButtonRule>,
}

impl LoginPolicy {
    /// Replace the username validator.
    #[must_use]
    pub fn with_username_rule(
        mut self,
        rule: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.username_rule = Some(Arc::new(rule));
        self
    }

    /// Replace the password validator.
    #[must_use]
    pub fn with_password_rule(
        mut self,
        rule: impl Fn(&str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.password_rule = Some(Arc::new(rule));
        self
    }

    /// Replace the submit-button enablement rule.
    #[must_use]
    pub fn with_button_rule(
        mut self,
        rule: impl Fn(&str, &str) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.button_rule = Some(Arc::new(rule));
        self
    }

    /// Whether `username` is acceptable.
    pub fn validate_username(&self, username: &str) -> bool {
        self.username_rule.as_ref().map_or(!username.is_empty(), |rule| rule(username))
    }

    /// Whether `password` is acceptable.
    pub fn validate_password(&self, password: &str) -> bool {
        self.password_rule.as_ref().map_or(!password.is_empty(), |rule| rule(password))
    }

    /// Whether the submit control should be enabled for these values.
    pub fn button_enabled(&self, username: &str, password: &str) -> bool {
        match &self.button_rule {
            Some(rule) => rule(username, password),
            None => self.validate_username(username) && self.validate_password(password),
        }
    }
}

impl fmt::Debug for LoginPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginPolicy")
            .field("custom_username_rule", &self.username_rule.is_some())
            .field("custom_password_rule", &self.password_rule.is_some())
            .field("custom_button_rule", &self.button_rule.is_some())
            .finish()
    }
}
