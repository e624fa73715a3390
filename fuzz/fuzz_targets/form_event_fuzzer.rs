//! Fuzz target for the LoginForm state machine
//!
//! # Strategy
//!
//! - Key input: printable characters, editing and focus keys
//! - Field replacement with arbitrary (possibly empty, non-ASCII) strings
//! - Submit presses and field commits in any phase
//! - Submission results for the current attempt, stale attempts and attempts
//!   that never existed
//! - Dismissal timer firing at any time
//!
//! # Invariants
//!
//! - At most one Submit is outstanding at any time
//! - Submit carries exactly the values the form holds
//! - Dismiss is emitted at most once, and only after success
//! - A displayed error implies both fields are empty
//! - The attempt counter never decreases

#![no_main]

use std::time::Duration;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use loginform_app::{
    FormAction, FormEvent, FormField, KeyInput, LoginForm, LoginPolicy, Prompt, SubmissionError,
    SubmissionPhase,
};

#[derive(Debug, Clone, Arbitrary)]
struct FormScenario {
    dismiss_delay_ms: u8,
    min_username_len: u8,
    ops: Vec<FuzzedOp>,
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedKey {
    Char(char),
    Enter,
    Backspace,
    Tab,
    BackTab,
    Up,
    Down,
}

#[derive(Debug, Clone, Arbitrary)]
enum AttemptChoice {
    Current,
    Previous,
    Next,
    Raw(u64),
}

#[derive(Debug, Clone, Arbitrary)]
enum FuzzedOp {
    Key(FuzzedKey),
    Change { password: bool, value: String },
    Commit { password: bool },
    Submit,
    Succeed(AttemptChoice),
    Fail(AttemptChoice, String),
    TimerFired,
}

fn field(password: bool) -> FormField {
    if password { FormField::Password } else { FormField::Username }
}

fn attempt(choice: &AttemptChoice, form: &LoginForm) -> u64 {
    match choice {
        AttemptChoice::Current => form.attempt(),
        AttemptChoice::Previous => form.attempt().wrapping_sub(1),
        AttemptChoice::Next => form.attempt().wrapping_add(1),
        AttemptChoice::Raw(n) => *n,
    }
}

fn to_event(op: FuzzedOp, form: &LoginForm) -> FormEvent {
    match op {
        FuzzedOp::Key(key) => FormEvent::Key(match key {
            FuzzedKey::Char(c) => KeyInput::Char(c),
            FuzzedKey::Enter => KeyInput::Enter,
            FuzzedKey::Backspace => KeyInput::Backspace,
            FuzzedKey::Tab => KeyInput::Tab,
            FuzzedKey::BackTab => KeyInput::BackTab,
            FuzzedKey::Up => KeyInput::Up,
            FuzzedKey::Down => KeyInput::Down,
        }),
        FuzzedOp::Change { password, value } => {
            FormEvent::FieldChanged { field: field(password), value }
        },
        FuzzedOp::Commit { password } => FormEvent::FieldCommitted(field(password)),
        FuzzedOp::Submit => FormEvent::SubmitPressed,
        FuzzedOp::Succeed(choice) => {
            FormEvent::SubmitSucceeded { attempt: attempt(&choice, form) }
        },
        FuzzedOp::Fail(choice, message) => FormEvent::SubmitFailed {
            attempt: attempt(&choice, form),
            error: SubmissionError::new(message),
        },
        FuzzedOp::TimerFired => FormEvent::DismissTimerFired,
    }
}

fuzz_target!(|scenario: FormScenario| {
    let min_len = usize::from(scenario.min_username_len % 8);
    let policy =
        LoginPolicy::default().with_username_rule(move |u| u.chars().count() >= min_len.max(1));
    let delay = Duration::from_millis(u64::from(scenario.dismiss_delay_ms % 4));

    let mut form = LoginForm::new(Prompt::new("Sign in", ""), policy, delay);
    let _ = form.handle(FormEvent::Mounted);

    let mut dismissals = 0usize;

    for op in scenario.ops {
        let attempt_before = form.attempt();
        let was_in_flight = form.phase().is_in_flight();
        let (username, password) = (form.username().to_owned(), form.password().to_owned());

        let event = to_event(op, &form);
        let actions = form.handle(event);

        for action in &actions {
            match action {
                FormAction::Submit { username: u, password: p, .. } => {
                    assert!(!was_in_flight, "submit while another is in flight");
                    assert_eq!(u, &username);
                    assert_eq!(p.as_str(), password);
                    assert!(form.phase().is_in_flight());
                },
                FormAction::Dismiss => {
                    dismissals += 1;
                    assert_eq!(form.phase(), &SubmissionPhase::Succeeded);
                },
                FormAction::Render | FormAction::ScheduleDismiss { .. } | FormAction::Cancel => {},
            }
        }

        assert!(dismissals <= 1, "dismissed more than once");
        assert!(form.attempt() >= attempt_before, "attempt counter went backwards");
        if form.error_text().is_some() {
            assert!(form.credentials().is_empty(), "error shown with non-empty fields");
        }
    }
});
