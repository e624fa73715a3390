//! Login form TUI entry point.

use std::{
    fs::OpenOptions,
    process::ExitCode,
    sync::{Arc, Mutex},
    time::Duration,
};

use clap::Parser;
use loginform_app::SystemEnv;
use loginform_tui::{DemoConfig, DemoViewModel, FormOutcome, Runtime, TerminalDriver};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Login form terminal demo
#[derive(Parser, Debug)]
#[command(name = "loginform-tui")]
#[command(about = "Terminal demo of the login form")]
#[command(version)]
struct Args {
    /// Username the demo backend accepts
    #[arg(short, long, default_value = "admin")]
    username: String,

    /// Password the demo backend accepts
    #[arg(short, long, default_value = "admin")]
    password: String,

    /// Simulated login latency in milliseconds
    #[arg(long, default_value = "600")]
    latency_ms: u64,

    /// How long the success indicator stays up, in milliseconds
    #[arg(long, default_value = "800")]
    dismiss_delay_ms: u64,

    /// Prompt title
    #[arg(long, default_value = "Sign in")]
    title: String,

    /// Minimum password length
    #[arg(long, default_value = "1")]
    min_password_len: usize,

    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    log_file: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

impl Args {
    fn demo_config(&self) -> DemoConfig {
        DemoConfig {
            username: self.username.clone(),
            password: self.password.clone(),
            latency: Duration::from_millis(self.latency_ms),
            dismiss_delay: Duration::from_millis(self.dismiss_delay_ms),
            title: self.title.clone(),
            min_password_len: self.min_password_len,
            ..DemoConfig::default()
        }
    }
}

/// Install the tracing subscriber. The terminal is owned by the form, so logs
/// only ever go to a file.
fn init_logging(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = &args.log_file else {
        return Ok(());
    };

    let file = OpenOptions::new().create(true).append(true).open(path)?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(Mutex::new(file)).with_ansi(false))
        .with(filter)
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(&args)?;

    tracing::info!(
        latency_ms = args.latency_ms,
        dismiss_delay_ms = args.dismiss_delay_ms,
        "login form starting"
    );

    let view_model = Arc::new(DemoViewModel::new(args.demo_config()));
    let driver = TerminalDriver::new()?;
    let outcome = Runtime::new(driver, view_model, SystemEnv::new()).run().await?;

    Ok(match outcome {
        FormOutcome::Dismissed => ExitCode::SUCCESS,
        FormOutcome::Cancelled | FormOutcome::Unmounted => ExitCode::from(1),
    })
}
