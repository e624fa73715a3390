//! Demo view model.
//!
//! Accepts a single configured username/password pair after a simulated
//! network latency. Stands in for a real authentication backend.

use std::time::Duration;

use loginform_app::{
    LoginPolicy, LoginViewModel, Prompt, PromptIcon, SubmissionError, Zeroizing,
};

/// Settings for [`DemoViewModel`].
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Username that is accepted.
    pub username: String,
    /// Password that is accepted.
    pub password: String,
    /// Simulated round-trip time of a login request.
    pub latency: Duration,
    /// Time the success indicator stays up before dismissal.
    pub dismiss_delay: Duration,
    /// Prompt title.
    pub title: String,
    /// Prompt message.
    pub message: String,
    /// Minimum password length enforced by the policy.
    pub min_password_len: usize,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            username: "admin".into(),
            password: "admin".into(),
            latency: Duration::from_millis(600),
            dismiss_delay: Duration::from_millis(800),
            title: "Sign in".into(),
            message: "Enter your credentials to continue.".into(),
            min_password_len: 1,
        }
    }
}

/// View model that checks credentials against [`DemoConfig`].
#[derive(Debug, Clone)]
pub struct DemoViewModel {
    config: DemoConfig,
}

impl DemoViewModel {
    /// Create a demo view model.
    pub fn new(config: DemoConfig) -> Self {
        Self { config }
    }
}

impl LoginViewModel for DemoViewModel {
    fn prompt(&self) -> Prompt {
        Prompt::new(&self.config.title, &self.config.message).with_icon(PromptIcon::Lock)
    }

    async fn submit(
        &self,
        username: String,
        password: Zeroizing<String>,
    ) -> Result<(), SubmissionError> {
        tokio::time::sleep(self.config.latency).await;

        if username == self.config.username && *password == self.config.password {
            tracing::info!("demo credentials accepted");
            Ok(())
        } else {
            Err(SubmissionError::new("bad credentials"))
        }
    }

    fn dismiss_delay(&self) -> Duration {
        self.config.dismiss_delay
    }

    fn policy(&self) -> LoginPolicy {
        let min_len = self.config.min_password_len;
        LoginPolicy::default()
            .with_password_rule(move |p| !p.is_empty() && p.chars().count() >= min_len)
    }
}
