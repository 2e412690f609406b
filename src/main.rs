//! Terminal front end for tic-tac-toe with time travel.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod cli;
mod tui;

fn main() -> Result<()> {
    let args = cli::Cli::parse();
    init_tracing(&args)?;

    info!("Starting tic-tac-toe TUI");
    tui::run()
}

/// Initializes tracing. Logs go to a file when `--log-file` is given,
/// otherwise to stderr, so they never corrupt the drawn UI.
fn init_tracing(args: &cli::Cli) -> Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));

    match &args.log_file {
        Some(path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::sync::Arc::new(file))
                .with_ansi(false)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
    Ok(())
}
