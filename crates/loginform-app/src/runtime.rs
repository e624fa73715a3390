//! Generic runtime for form orchestration.
//!
//! The Runtime drives one login form from mount to dismissal, coordinating
//! between:
//! - [`LoginForm`]: form state machine
//! - [`LoginViewModel`]: the owner's submit operation
//! - [`Driver`]: toolkit-specific input and rendering
//! - [`DismissTimer`]: deferred dismissal after success

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::{
    DismissTimer, Driver, Environment, FormAction, FormEvent, LoginForm, LoginViewModel,
    RuntimeError, SubmissionError, Zeroizing,
};

/// Error shown when the view model's submit task dies without answering.
const SUBMIT_ABORTED_MESSAGE: &str = "login failed";

/// How a form run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormOutcome {
    /// Submission succeeded and the dismiss notification was delivered.
    Dismissed,
    /// The user cancelled the form.
    Cancelled,
    /// The presentation layer went away before the form finished.
    Unmounted,
}

/// Generic runtime that orchestrates a form, its view model and a driver.
///
/// # Type Parameters
///
/// - `D`: Toolkit-specific driver
/// - `V`: View model supplying the prompt, policy and submit operation
/// - `E`: Environment providing the clock for the dismissal timer
pub struct Runtime<D, V, E>
where
    D: Driver,
    V: LoginViewModel,
    E: Environment,
{
    driver: D,
    view_model: Arc<V>,
    env: E,
    form: LoginForm,
    internal_tx: mpsc::UnboundedSender<FormEvent>,
    internal_rx: mpsc::UnboundedReceiver<FormEvent>,
    dismiss_timer: Option<DismissTimer>,
    submitted_at: Option<E::Instant>,
}

impl<D, V, E> Runtime<D, V, E>
where
    D: Driver,
    V: LoginViewModel,
    E: Environment,
{
    /// Create a runtime for a fresh form configured from `view_model`.
    pub fn new(driver: D, view_model: Arc<V>, env: E) -> Self {
        let form = LoginForm::from_view_model(view_model.as_ref());
        let (internal_tx, internal_rx) = mpsc::unbounded_channel();
        Self {
            driver,
            view_model,
            env,
            form,
            internal_tx,
            internal_rx,
            dismiss_timer: None,
            submitted_at: None,
        }
    }

    /// Run the form until it is dismissed, cancelled or unmounted.
    ///
    /// A pending dismissal timer is discarded on exit. An in-flight submission
    /// keeps running; its result is dropped.
    ///
    /// # Errors
    ///
    /// Returns an error if the driver fails to poll input or render.
    pub async fn run(mut self) -> Result<FormOutcome, RuntimeError<D::Error>> {
        let result = self.drive().await;

        if let Some(timer) = self.dismiss_timer.take() {
            tracing::debug!("discarding pending dismissal");
            timer.cancel();
        }
        self.driver.stop();

        match &result {
            Ok(outcome) => tracing::info!(?outcome, "login form finished"),
            Err(e) => tracing::error!(%e, "login form aborted"),
        }
        result
    }

    async fn drive(&mut self) -> Result<FormOutcome, RuntimeError<D::Error>> {
        let actions = self.form.handle(FormEvent::Mounted);
        if let Some(outcome) = self.process_actions(actions)? {
            return Ok(outcome);
        }

        loop {
            let event = tokio::select! {
                biased;

                // Submission results and timer. The runtime holds a sender,
                // so the channel stays open.
                Some(internal) = self.internal_rx.recv() => internal,

                // Presentation input
                polled = self.driver.poll_event() => {
                    match polled.map_err(RuntimeError::Driver)? {
                        Some(event) => event,
                        None => return Ok(FormOutcome::Unmounted),
                    }
                }
            };

            self.trace_completion(&event);
            let actions = self.form.handle(event);
            if let Some(outcome) = self.process_actions(actions)? {
                return Ok(outcome);
            }
        }
    }

    /// Execute actions returned by the form.
    ///
    /// Returns the outcome if the form is finished.
    fn process_actions(
        &mut self,
        actions: Vec<FormAction>,
    ) -> Result<Option<FormOutcome>, RuntimeError<D::Error>> {
        for action in actions {
            match action {
                FormAction::Render => {
                    self.driver.render(&self.form).map_err(RuntimeError::Driver)?;
                },
                FormAction::Submit { attempt, username, password } => {
                    self.spawn_submission(attempt, username, password);
                },
                FormAction::ScheduleDismiss { delay } => {
                    tracing::debug!(?delay, "scheduling dismissal");
                    let tx = self.internal_tx.clone();
                    let timer = DismissTimer::start(&self.env, delay, move || {
                        // Receiver is gone once the form has finished
                        let _ = tx.send(FormEvent::DismissTimerFired);
                    });
                    self.dismiss_timer = Some(timer);
                },
                FormAction::Dismiss => {
                    self.dismiss_timer = None;
                    self.driver.dismiss();
                    return Ok(Some(FormOutcome::Dismissed));
                },
                FormAction::Cancel => return Ok(Some(FormOutcome::Cancelled)),
            }
        }
        Ok(None)
    }

    /// Call the view model's submit on a separate task and route the result
    /// back through the internal channel.
    ///
    /// A submit task that panics is reported as a failed submission so the
    /// form never stays locked in flight.
    fn spawn_submission(
        &mut self,
        attempt: u64,
        username: String,
        password: Zeroizing<String>,
    ) {
        let view_model = Arc::clone(&self.view_model);
        let tx = self.internal_tx.clone();
        self.submitted_at = Some(self.env.now());

        tokio::spawn(async move {
            let submission =
                tokio::spawn(async move { view_model.submit(username, password).await });

            let event = match submission.await {
                Ok(Ok(())) => FormEvent::SubmitSucceeded { attempt },
                Ok(Err(error)) => FormEvent::SubmitFailed { attempt, error },
                Err(e) => {
                    tracing::error!(attempt, %e, "submit task aborted");
                    FormEvent::SubmitFailed {
                        attempt,
                        error: SubmissionError::new(SUBMIT_ABORTED_MESSAGE),
                    }
                },
            };
            let _ = tx.send(event);
        });
    }

    fn trace_completion(&mut self, event: &FormEvent) {
        if let FormEvent::SubmitSucceeded { attempt } | FormEvent::SubmitFailed { attempt, .. } =
            event
            && let Some(started) = self.submitted_at.take()
        {
            let elapsed = self.env.now() - started;
            tracing::debug!(attempt, ?elapsed, "submission completed");
        }
    }
}
