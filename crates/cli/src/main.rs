//! Monday automator CLI entry point.
//!
//! This binary is the composition root for the workspace. Responsibilities:
//!
//! 1. **Parse arguments** — subcommand, rule configuration path, credential
//!    sources, logging options.
//! 2. **Wire observability** — configure `tracing-subscriber` with an env
//!    filter, a pretty or JSON formatter, and optionally an OpenTelemetry OTLP
//!    exporter. Every span and event from the workspace flows through it.
//! 3. **Construct infrastructure** — load credentials, build the
//!    [`monday_api::MondayClient`] and hand it to an
//!    [`automations::Automator`].
//! 4. **Dispatch** — run the selected routine or listing, or serve the test
//!    endpoint.

use std::process::ExitCode;

use clap::Parser;
use monday::AutomationRunId;
use tracing::{error, info_span, Instrument};

mod args;
mod commands;
mod credentials;
mod telemetry;

use args::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let telemetry = match telemetry::init(cli.verbose, cli.log_format, cli.otlp_endpoint.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let run_id = AutomationRunId::new_random();
    let result = commands::execute(&cli)
        .instrument(info_span!("monday_automator", %run_id))
        .await;

    let code = match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(%run_id, error = %format!("{e:#}"), "Run failed");
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    };
    telemetry.shutdown();
    code
}
