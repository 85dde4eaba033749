//! Terminal UI for tic-tac-toe.
//!
//! A thin presentation layer over [`tictactoe::Game`]: it draws the latest
//! snapshot, maps keys and clicks to [`Action`]s and forwards them.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod logging;
mod terminal;
pub mod ui;

pub use app::App;
pub use cli::Cli;
pub use config::{ConfigError, DEFAULT_CONFIG_FILE, Theme, ThemeConfig, TuiConfig};
pub use input::{Action, CursorMove, map_event, map_key, map_mouse, move_cursor};
pub use logging::init_tracing;
pub use terminal::{TerminalGuard, setup_terminal};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::{Terminal, backend::Backend};
use std::time::Duration;
use tracing::{info, instrument};

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Loads config, sets up logging and the terminal, and plays until quit.
pub fn run(cli: Cli) -> Result<()> {
    let config = TuiConfig::load(cli.config.as_deref())?.merge_cli(&cli);
    init_tracing(config.log_file(), config.log_filter())?;
    info!(?config, "Starting Tic Tac Toe");

    let theme = config.theme().resolve()?;
    let mut app = App::new(theme, *config.show_cell_numbers());

    let (mut terminal, _guard) =
        setup_terminal(*config.mouse()).context("Failed to set up terminal")?;
    let res = run_app(&mut terminal, &mut app);

    info!("Exiting");
    res
}

/// Event loop: draw, wait for one event, handle it, repeat.
#[instrument(skip_all)]
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    <B as Backend>::Error: Send + Sync + 'static,
{
    loop {
        let area = terminal.draw(|f| ui::draw(f, app))?.area;
        app.set_viewport(area);

        if app.should_quit() {
            return Ok(());
        }

        if event::poll(POLL_INTERVAL)?
            && let Some(action) = map_event(&event::read()?, app.viewport())
        {
            app.handle(action);
        }
    }
}
