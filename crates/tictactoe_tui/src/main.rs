//! Tic Tac Toe in the terminal.

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::Cli;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    tictactoe_tui::run(cli)
}
