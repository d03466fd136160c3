//! Vigil CLI
//!
//! Command-line front end for the vigil poller: checks a job status URL at
//! a fixed interval until the job completes, fails, or the attempt budget
//! runs out, then reports the outcome.

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use colored::*;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vigil_client::{JobPoller, PollError, PollObserver, PollOutcome, PollRequest};
use vigil_core::{DEFAULT_INTERVAL, DEFAULT_MAX_ATTEMPTS};

#[derive(Parser)]
#[command(name = "vigil")]
#[command(about = "Poll a job status URL until it completes", long_about = None)]
struct Cli {
    /// Status endpoint URL
    #[arg(env = "VIGIL_STATUS_URL", default_value = "http://localhost:3000/status")]
    url: String,

    /// Maximum number of status checks before giving up
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    max_attempts: u32,

    /// Delay between status checks, in milliseconds
    #[arg(long, default_value_t = DEFAULT_INTERVAL.as_millis() as u64)]
    interval_ms: u64,

    /// Print the final outcome as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Logging from the libraries is opt-in; progress reporting goes
    // through the console observer below.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "vigil=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match run(cli).await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{} {:#}", "error:".red().bold(), err);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<ExitCode> {
    let request = PollRequest::new(
        &cli.url,
        cli.max_attempts,
        Duration::from_millis(cli.interval_ms),
    )?;

    let mut poller = JobPoller::new();
    if !cli.json {
        poller = poller.with_observer(Arc::new(ConsoleObserver));
    }

    // Ctrl-C aborts mid-sleep as well as mid-attempt.
    let cancel = poller.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel.cancel();
        }
    });

    let outcome = match poller.poll_until_complete(&request).await {
        Ok(outcome) => outcome,
        Err(PollError::Cancelled { .. }) => {
            eprintln!("{}", "Poll cancelled.".yellow());
            // Conventional exit status for SIGINT
            return Ok(ExitCode::from(130));
        }
        Err(err) => return Err(err.into()),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }

    Ok(match outcome {
        PollOutcome::Completed(_) => ExitCode::SUCCESS,
        PollOutcome::Errored(_) => ExitCode::FAILURE,
        PollOutcome::Exhausted { .. } => ExitCode::from(2),
    })
}

/// Observer that narrates poll progress on stdout
struct ConsoleObserver;

impl PollObserver for ConsoleObserver {
    fn on_attempt(&self, attempt: u32, max_attempts: u32) {
        println!(
            "{}",
            format!("Checking status (attempt {}/{})...", attempt, max_attempts).dimmed()
        );
    }

    fn on_retry(&self, _attempt: u32, delay: Duration) {
        println!(
            "{}",
            format!("Still pending, retrying in {:?}...", delay).yellow()
        );
    }

    fn on_completed(&self, attempts: u32) {
        println!(
            "{}",
            format!("Job completed after {} attempt(s).", attempts)
                .green()
                .bold()
        );
    }

    fn on_job_failed(&self, attempts: u32) {
        println!(
            "{}",
            format!("Job failed after {} attempt(s).", attempts).red().bold()
        );
    }

    fn on_exhausted(&self, attempts: u32) {
        println!(
            "{}",
            format!("Gave up after {} attempt(s); job still pending.", attempts)
                .yellow()
                .bold()
        );
    }
}
