mod cli;
mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use teikningar_core::TeikningarError;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::Cli;

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();
    let operation = cli.command.operation();
    match commands::run_from_root(&cli.root, cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            report_error(operation, &error);
            ExitCode::FAILURE
        }
    }
}

fn report_error(operation: &str, error: &anyhow::Error) {
    let message = format!("{error:#}");
    let mut payload = match error.downcast_ref::<TeikningarError>() {
        Some(core_error) => core_error.to_payload(operation, None),
        None => TeikningarError::Internal(message.clone()).to_payload(operation, None),
    };
    payload.message = message;

    let mut stderr = io::stderr().lock();
    if serde_json::to_writer_pretty(&mut stderr, &payload).is_ok() {
        let _ = writeln!(stderr);
    }
}
