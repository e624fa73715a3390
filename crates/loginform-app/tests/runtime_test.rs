//! Integration tests for the form Runtime.
//!
//! # Strategy
//!
//! A scripted driver feeds events from a channel and records every render and
//! dismissal. The view model sleeps for a configurable latency before
//! answering. All tests run on a paused tokio clock, so timings are exact and
//! the tests run instantly.
//!
//! # Oracle Pattern
//!
//! Tests end with oracle checks that verify:
//! - The outcome returned by the runtime
//! - How many times submit and dismiss were invoked
//! - The last rendered form state

use std::{
    convert::Infallible,
    sync::{Arc, Mutex},
    time::Duration,
};

use loginform_app::{
    Driver, FocusTarget, FormEvent, FormField, FormOutcome, LoginForm, LoginViewModel, Prompt,
    PromptIcon, Runtime, RuntimeError, SubmissionError, SubmissionPhase, SystemEnv, Zeroizing,
};
use tokio::{sync::mpsc, task::JoinHandle, time::Instant};

/// Form state as seen by the driver at render time.
#[derive(Debug, Clone)]
struct RenderedForm {
    phase: SubmissionPhase,
    username: String,
    password: String,
    error: Option<String>,
    focus: FocusTarget,
    submit_enabled: bool,
}

#[derive(Debug, Default)]
struct DriverLog {
    renders: Vec<RenderedForm>,
    dismissals: usize,
    dismissed_at: Option<Instant>,
    stopped: bool,
}

struct ScriptedDriver {
    events: mpsc::UnboundedReceiver<FormEvent>,
    log: Arc<Mutex<DriverLog>>,
}

impl Driver for ScriptedDriver {
    type Error = Infallible;

    async fn poll_event(&mut self) -> Result<Option<FormEvent>, Self::Error> {
        Ok(self.events.recv().await)
    }

    fn render(&mut self, form: &LoginForm) -> Result<(), Self::Error> {
        self.log.lock().unwrap().renders.push(RenderedForm {
            phase: form.phase().clone(),
            username: form.username().to_owned(),
            password: form.password().to_owned(),
            error: form.error_text().map(str::to_owned),
            focus: form.focus(),
            submit_enabled: form.submit_enabled(),
        });
        Ok(())
    }

    fn dismiss(&mut self) {
        let mut log = self.log.lock().unwrap();
        log.dismissals += 1;
        log.dismissed_at = Some(Instant::now());
    }

    fn stop(&mut self) {
        self.log.lock().unwrap().stopped = true;
    }
}

type Calls = Arc<Mutex<Vec<(String, String)>>>;

struct MockViewModel {
    latency: Duration,
    outcome: Result<(), SubmissionError>,
    panics: bool,
    dismiss_delay: Duration,
    calls: Calls,
}

impl MockViewModel {
    fn accepting(latency: Duration) -> Self {
        Self {
            latency,
            outcome: Ok(()),
            panics: false,
            dismiss_delay: Duration::ZERO,
            calls: Calls::default(),
        }
    }

    fn rejecting(latency: Duration, message: &str) -> Self {
        Self { outcome: Err(SubmissionError::new(message)), ..Self::accepting(latency) }
    }

    fn panicking(latency: Duration) -> Self {
        Self { panics: true, ..Self::accepting(latency) }
    }

    fn with_dismiss_delay(mut self, delay: Duration) -> Self {
        self.dismiss_delay = delay;
        self
    }
}

impl LoginViewModel for MockViewModel {
    fn prompt(&self) -> Prompt {
        Prompt::new("Sign in", "Use your account").with_icon(PromptIcon::Lock)
    }

    async fn submit(
        &self,
        username: String,
        password: Zeroizing<String>,
    ) -> Result<(), SubmissionError> {
        self.calls.lock().unwrap().push((username, password.as_str().to_owned()));
        tokio::time::sleep(self.latency).await;
        if self.panics {
            #[allow(clippy::panic)]
            {
                panic!("view model crashed");
            }
        }
        self.outcome.clone()
    }

    fn dismiss_delay(&self) -> Duration {
        self.dismiss_delay
    }
}

/// Running form plus handles to script and observe it.
struct Harness {
    tx: mpsc::UnboundedSender<FormEvent>,
    log: Arc<Mutex<DriverLog>>,
    calls: Calls,
    handle: JoinHandle<Result<FormOutcome, RuntimeError<Infallible>>>,
}

impl Harness {
    fn start(view_model: MockViewModel) -> Self {
        let (tx, events) = mpsc::unbounded_channel();
        let log = Arc::new(Mutex::new(DriverLog::default()));
        let calls = Arc::clone(&view_model.calls);

        let driver = ScriptedDriver { events, log: Arc::clone(&log) };
        let runtime = Runtime::new(driver, Arc::new(view_model), SystemEnv::new());
        let handle = tokio::spawn(runtime.run());

        Self { tx, log, calls, handle }
    }

    fn send(&self, event: FormEvent) {
        self.tx.send(event).unwrap();
    }

    fn fill(&self, username: &str, password: &str) {
        self.send(FormEvent::FieldChanged { field: FormField::Username, value: username.into() });
        self.send(FormEvent::FieldChanged { field: FormField::Password, value: password.into() });
    }

    fn last_render(&self) -> RenderedForm {
        self.log.lock().unwrap().renders.last().cloned().unwrap()
    }

    fn dismissals(&self) -> usize {
        self.log.lock().unwrap().dismissals
    }

    fn submit_calls(&self) -> Vec<(String, String)> {
        self.calls.lock().unwrap().clone()
    }

    /// Wait for the runtime to finish on its own.
    async fn finish(self) -> (FormOutcome, Arc<Mutex<DriverLog>>, Calls) {
        let Self { tx, log, calls, handle } = self;
        let outcome = handle.await.unwrap().unwrap();
        drop(tx);
        (outcome, log, calls)
    }

    /// Close the input channel, unmounting the form.
    async fn unmount(self) -> (FormOutcome, Arc<Mutex<DriverLog>>, Calls) {
        let Self { tx, log, calls, handle } = self;
        drop(tx);
        let outcome = handle.await.unwrap().unwrap();
        (outcome, log, calls)
    }
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(1)).await;
}

#[tokio::test(start_paused = true)]
async fn mount_renders_with_username_focused() {
    let harness = Harness::start(MockViewModel::accepting(Duration::ZERO));
    settle().await;

    let first = harness.last_render();
    assert_eq!(first.focus, FocusTarget::Username);
    assert_eq!(first.phase, SubmissionPhase::Idle);
    assert!(!first.submit_enabled);

    let (outcome, log, _) = harness.unmount().await;
    assert_eq!(outcome, FormOutcome::Unmounted);
    assert!(log.lock().unwrap().stopped);
}

#[tokio::test(start_paused = true)]
async fn successful_submit_dismisses_after_latency() {
    let harness = Harness::start(MockViewModel::accepting(Duration::from_millis(10)));
    let pressed_at = Instant::now();
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);

    let (outcome, log, calls) = harness.finish().await;

    assert_eq!(outcome, FormOutcome::Dismissed);
    assert_eq!(*calls.lock().unwrap(), vec![("alice".to_owned(), "secret".to_owned())]);

    let log = log.lock().unwrap();
    assert_eq!(log.dismissals, 1);
    let elapsed = log.dismissed_at.unwrap() - pressed_at;
    assert!(elapsed >= Duration::from_millis(10), "dismissed too early: {elapsed:?}");
    assert!(elapsed < Duration::from_millis(20), "dismissed too late: {elapsed:?}");
    assert_eq!(log.renders.last().map(|r| r.phase.clone()), Some(SubmissionPhase::Succeeded));
}

#[tokio::test(start_paused = true)]
async fn dismissal_waits_for_delay() {
    let view_model = MockViewModel::accepting(Duration::from_millis(10))
        .with_dismiss_delay(Duration::from_millis(50));
    let harness = Harness::start(view_model);
    let pressed_at = Instant::now();
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);

    tokio::time::sleep(Duration::from_millis(40)).await;
    assert_eq!(harness.last_render().phase, SubmissionPhase::Succeeded);
    assert_eq!(harness.dismissals(), 0);

    let (outcome, log, _) = harness.finish().await;

    assert_eq!(outcome, FormOutcome::Dismissed);
    let log = log.lock().unwrap();
    assert_eq!(log.dismissals, 1);
    assert!(log.dismissed_at.unwrap() - pressed_at >= Duration::from_millis(60));
}

#[tokio::test(start_paused = true)]
async fn second_press_while_in_flight_is_ignored() {
    let harness = Harness::start(MockViewModel::accepting(Duration::from_millis(10)));
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);
    harness.send(FormEvent::SubmitPressed);
    harness.send(FormEvent::FieldCommitted(FormField::Password));

    let (outcome, _, calls) = harness.finish().await;

    assert_eq!(outcome, FormOutcome::Dismissed);
    assert_eq!(calls.lock().unwrap().len(), 1);
}

#[tokio::test(start_paused = true)]
async fn missing_password_never_submits() {
    let harness = Harness::start(MockViewModel::accepting(Duration::ZERO));
    harness.fill("alice", "");
    harness.send(FormEvent::SubmitPressed);
    settle().await;

    assert!(harness.submit_calls().is_empty());
    assert_eq!(harness.last_render().focus, FocusTarget::Password);

    let (outcome, log, _) = harness.unmount().await;
    assert_eq!(outcome, FormOutcome::Unmounted);
    assert_eq!(log.lock().unwrap().dismissals, 0);
}

#[tokio::test(start_paused = true)]
async fn rejected_submit_clears_fields_and_allows_retry() {
    let harness =
        Harness::start(MockViewModel::rejecting(Duration::from_millis(10), "bad credentials"));
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let failed = harness.last_render();
    assert!(matches!(failed.phase, SubmissionPhase::Failed(_)));
    assert_eq!(failed.username, "");
    assert_eq!(failed.password, "");
    assert_eq!(failed.error.as_deref(), Some("bad credentials"));
    assert!(!failed.submit_enabled);

    harness.fill("alice", "secret");
    settle().await;

    let refilled = harness.last_render();
    assert_eq!(refilled.error, None);
    assert!(refilled.submit_enabled);

    let (outcome, log, calls) = harness.unmount().await;
    assert_eq!(outcome, FormOutcome::Unmounted);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(log.lock().unwrap().dismissals, 0);
}

#[tokio::test(start_paused = true)]
async fn unmount_discards_pending_dismissal() {
    let view_model =
        MockViewModel::accepting(Duration::ZERO).with_dismiss_delay(Duration::from_secs(1));
    let harness = Harness::start(view_model);
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);
    tokio::time::sleep(Duration::from_millis(100)).await;
    assert_eq!(harness.last_render().phase, SubmissionPhase::Succeeded);

    let (outcome, log, _) = harness.unmount().await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(outcome, FormOutcome::Unmounted);
    assert_eq!(log.lock().unwrap().dismissals, 0);
}

#[tokio::test(start_paused = true)]
async fn cancel_ends_form_without_dismissal() {
    let harness = Harness::start(MockViewModel::accepting(Duration::ZERO));
    harness.send(FormEvent::CancelPressed);

    let (outcome, log, calls) = harness.finish().await;

    assert_eq!(outcome, FormOutcome::Cancelled);
    let log = log.lock().unwrap();
    assert!(log.stopped);
    assert_eq!(log.dismissals, 0);
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn cancel_leaves_in_flight_submission_alone() {
    let harness = Harness::start(MockViewModel::accepting(Duration::from_secs(1)));
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);
    harness.send(FormEvent::CancelPressed);

    let (outcome, log, calls) = harness.finish().await;
    tokio::time::sleep(Duration::from_secs(2)).await;

    assert_eq!(outcome, FormOutcome::Cancelled);
    assert_eq!(calls.lock().unwrap().len(), 1);
    assert_eq!(log.lock().unwrap().dismissals, 0);
}

#[tokio::test(start_paused = true)]
async fn panicking_submit_fails_and_unlocks_form() {
    let harness = Harness::start(MockViewModel::panicking(Duration::from_millis(10)));
    harness.fill("alice", "secret");
    harness.send(FormEvent::SubmitPressed);
    tokio::time::sleep(Duration::from_millis(20)).await;

    let failed = harness.last_render();
    assert!(matches!(failed.phase, SubmissionPhase::Failed(_)));
    assert_eq!(failed.error.as_deref(), Some("login failed"));
    assert_eq!(failed.username, "");
    assert_eq!(failed.password, "");

    // Inputs are usable again and a retry reaches the view model
    harness.fill("alice", "secret");
    settle().await;
    let refilled = harness.last_render();
    assert_eq!(refilled.username, "alice");
    assert!(refilled.submit_enabled);

    harness.send(FormEvent::SubmitPressed);
    settle().await;
    assert_eq!(harness.last_render().phase, SubmissionPhase::InFlight);
    assert_eq!(harness.submit_calls().len(), 2);

    let (outcome, log, _) = harness.unmount().await;
    assert_eq!(outcome, FormOutcome::Unmounted);
    assert_eq!(log.lock().unwrap().dismissals, 0);
}
