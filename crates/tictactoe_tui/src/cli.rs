//! Command-line interface for the tic-tac-toe terminal UI.

use clap::Parser;
use std::path::PathBuf;

/// Tic Tac Toe - two players, one terminal
#[derive(Parser, Debug, Default)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./tictactoe.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write logs to this file instead of the configured one
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture
    #[arg(long)]
    pub no_mouse: bool,
}
