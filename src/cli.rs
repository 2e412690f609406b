//! Command-line interface for the terminal front end.

use clap::Parser;
use std::path::PathBuf;

/// Tic-tac-toe with move history and time travel
#[derive(Parser, Debug)]
#[command(name = "tictactoe_replay")]
#[command(about = "Play tic-tac-toe and rewind to any earlier move", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Tracing filter directive (overridden by RUST_LOG)
    #[arg(long, default_value = "info")]
    pub log: String,

    /// Write logs to this file instead of stderr
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
