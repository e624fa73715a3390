//! Login form state machine.
//!
//! This module defines [`LoginForm`], which manages the interactive state of a
//! username/password form completely decoupled from rendering and from the
//! submit operation itself.
//!
//! This is a pure state machine: it consumes [`crate::FormEvent`] inputs and
//! produces [`crate::FormAction`] instructions for the runtime to execute.
//!
//! # Responsibilities
//!
//! - Holds the entered credentials and which input has focus.
//! - Validates before submitting and redirects focus to the offending field.
//! - Tracks the submission lifecycle and guarantees a single outstanding
//!   submission.
//! - Decides when dismissal happens after a successful submission.

use std::time::Duration;

use zeroize::{Zeroize, Zeroizing};

use crate::{
    Credentials, FocusTarget, FormAction, FormEvent, FormField, KeyInput, LoginPolicy,
    LoginViewModel, Prompt, SubmissionError, SubmissionPhase, ValidationError,
};

/// Login form state machine.
///
/// Pure state machine that processes events and produces actions.
/// No I/O dependencies - fully testable without a runtime.
#[derive(Debug, Clone)]
pub struct LoginForm {
    /// Prompt content from the view model.
    prompt: Prompt,
    /// Validation and enablement rules.
    policy: LoginPolicy,
    /// Delay between success and dismissal.
    dismiss_delay: Duration,
    /// Entered credentials.
    credentials: Credentials,
    /// Submission lifecycle.
    phase: SubmissionPhase,
    /// Input that should hold focus.
    focus: FocusTarget,
    /// Number of submissions started. Identifies the in-flight attempt.
    attempt: u64,
    /// Dismiss has been emitted.
    dismissed: bool,
}

impl LoginForm {
    /// Create a form with the given prompt, policy and dismissal delay.
    pub fn new(prompt: Prompt, policy: LoginPolicy, dismiss_delay: Duration) -> Self {
        Self {
            prompt,
            policy,
            dismiss_delay,
            credentials: Credentials::default(),
            phase: SubmissionPhase::Idle,
            focus: FocusTarget::None,
            attempt: 0,
            dismissed: false,
        }
    }

    /// Create a form configured from a view model.
    pub fn from_view_model<V: LoginViewModel>(view_model: &V) -> Self {
        Self::new(view_model.prompt(), view_model.policy(), view_model.dismiss_delay())
    }

    /// Process an event and return actions.
    pub fn handle(&mut self, event: FormEvent) -> Vec<FormAction> {
        match event {
            FormEvent::Mounted => {
                self.focus = FocusTarget::Username;
                vec![FormAction::Render]
            },
            FormEvent::Redraw => vec![FormAction::Render],
            FormEvent::Key(key) => self.handle_key(key),
            FormEvent::FieldChanged { field, mut value } => {
                let actions = self.edit(field, |buffer| {
                    buffer.zeroize();
                    buffer.push_str(&value);
                });
                value.zeroize();
                actions
            },
            FormEvent::FieldCommitted(_) | FormEvent::SubmitPressed => self.submit(),
            FormEvent::CancelPressed => self.cancel(),
            FormEvent::SubmitSucceeded { attempt } => self.submit_succeeded(attempt),
            FormEvent::SubmitFailed { attempt, error } => self.submit_failed(attempt, error),
            FormEvent::DismissTimerFired => self.dismiss_timer_fired(),
        }
    }

    /// Validate both fields in order, username first.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.policy.validate_username(&self.credentials.username) {
            return Err(ValidationError::Username);
        }
        if !self.policy.validate_password(&self.credentials.password) {
            return Err(ValidationError::Password);
        }
        Ok(())
    }

    /// Run validation and, if it passes, start a submission.
    pub fn submit(&mut self) -> Vec<FormAction> {
        match self.phase {
            SubmissionPhase::InFlight => {
                tracing::debug!(attempt = self.attempt, "submission already in flight, ignoring");
                return vec![];
            },
            SubmissionPhase::Succeeded => {
                tracing::debug!("already signed in, ignoring submit");
                return vec![];
            },
            SubmissionPhase::Idle | SubmissionPhase::Failed(_) => {},
        }

        if let Err(err) = self.validate() {
            tracing::debug!(%err, "validation failed");
            self.focus = err.focus_target();
            return vec![FormAction::Render];
        }

        if !self.policy.button_enabled(&self.credentials.username, &self.credentials.password) {
            tracing::debug!("submit control disabled by policy");
            return vec![];
        }

        self.attempt += 1;
        self.phase = SubmissionPhase::InFlight;
        tracing::info!(
            attempt = self.attempt,
            username_len = self.credentials.username.len(),
            "submitting credentials"
        );

        vec![FormAction::Render, FormAction::Submit {
            attempt: self.attempt,
            username: self.credentials.username.clone(),
            password: Zeroizing::new(self.credentials.password.clone()),
        }]
    }

    /// Abandon the form.
    ///
    /// An in-flight submission is left alone; stopping it is the view model's
    /// concern.
    pub fn cancel(&mut self) -> Vec<FormAction> {
        tracing::info!(in_flight = self.phase.is_in_flight(), "login cancelled");
        vec![FormAction::Cancel]
    }

    fn handle_key(&mut self, key: KeyInput) -> Vec<FormAction> {
        match key {
            KeyInput::Esc => self.cancel(),
            KeyInput::Tab | KeyInput::BackTab | KeyInput::Up | KeyInput::Down => {
                self.focus = match self.focus.field() {
                    Some(field) => field.other().into(),
                    None => FocusTarget::Username,
                };
                vec![FormAction::Render]
            },
            KeyInput::Enter => match self.focus.field() {
                Some(field) => self.handle(FormEvent::FieldCommitted(field)),
                None => vec![],
            },
            KeyInput::Char(c) => match self.focus.field() {
                Some(field) => self.edit(field, |buffer| buffer.push(c)),
                None => vec![],
            },
            KeyInput::Backspace => match self.focus.field() {
                Some(field) => self.edit(field, |buffer| {
                    buffer.pop();
                }),
                None => vec![],
            },
        }
    }

    /// Apply an edit to a field. Inputs are locked while a submission is in
    /// flight and once it has succeeded.
    fn edit(&mut self, field: FormField, apply: impl FnOnce(&mut String)) -> Vec<FormAction> {
        if matches!(self.phase, SubmissionPhase::InFlight | SubmissionPhase::Succeeded) {
            return vec![];
        }

        apply(self.credentials.get_mut(field));

        if matches!(self.phase, SubmissionPhase::Failed(_)) && !self.credentials.is_empty() {
            self.phase = SubmissionPhase::Idle;
        }
        vec![FormAction::Render]
    }

    fn submit_succeeded(&mut self, attempt: u64) -> Vec<FormAction> {
        if !self.is_current_attempt(attempt) {
            tracing::warn!(attempt, current = self.attempt, "ignoring stale submission result");
            return vec![];
        }

        self.phase = SubmissionPhase::Succeeded;
        tracing::info!(attempt, "submission accepted");

        if self.dismiss_delay.is_zero() {
            self.dismissed = true;
            vec![FormAction::Render, FormAction::Dismiss]
        } else {
            vec![FormAction::Render, FormAction::ScheduleDismiss { delay: self.dismiss_delay }]
        }
    }

    fn submit_failed(&mut self, attempt: u64, error: SubmissionError) -> Vec<FormAction> {
        if !self.is_current_attempt(attempt) {
            tracing::warn!(attempt, current = self.attempt, "ignoring stale submission result");
            return vec![];
        }

        tracing::warn!(attempt, %error, "submission rejected");
        self.credentials.clear();
        self.phase = SubmissionPhase::Failed(error);
        vec![FormAction::Render]
    }

    fn dismiss_timer_fired(&mut self) -> Vec<FormAction> {
        if self.phase != SubmissionPhase::Succeeded || self.dismissed {
            return vec![];
        }
        self.dismissed = true;
        vec![FormAction::Dismiss]
    }

    fn is_current_attempt(&self, attempt: u64) -> bool {
        self.phase.is_in_flight() && attempt == self.attempt
    }

    /// Whether the submit control should be enabled.
    pub fn submit_enabled(&self) -> bool {
        !self.phase.is_in_flight()
            && self.phase != SubmissionPhase::Succeeded
            && self.policy.button_enabled(&self.credentials.username, &self.credentials.password)
    }

    /// Entered username.
    pub fn username(&self) -> &str {
        &self.credentials.username
    }

    /// Entered password.
    pub fn password(&self) -> &str {
        &self.credentials.password
    }

    /// Both entered values.
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Submission lifecycle.
    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    /// Input that should hold focus.
    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    /// Error text to display. `None` if there is nothing to show.
    pub fn error_text(&self) -> Option<&str> {
        self.phase.error().map(SubmissionError::message)
    }

    /// Prompt content.
    pub fn prompt(&self) -> &Prompt {
        &self.prompt
    }

    /// Validation and enablement rules.
    pub fn policy(&self) -> &LoginPolicy {
        &self.policy
    }

    /// Delay between success and dismissal.
    pub fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay
    }

    /// Number of submissions started so far.
    pub fn attempt(&self) -> u64 {
        self.attempt
    }

    /// Dismissal has been requested.
    pub fn is_dismissed(&self) -> bool {
        self.dismissed
    }
}
