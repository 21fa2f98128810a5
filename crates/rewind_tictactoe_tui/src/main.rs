//! Rewind Tic-Tac-Toe - terminal UI
//!
//! Play tic-tac-toe, then click any earlier move to rewind the board.
//! Moving from a rewound board starts a new branch.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod config;
mod input;
mod terminal;
mod ui;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};
use std::path::Path;
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

use app::App;
use cli::Cli;
use config::TuiConfig;
use terminal::TerminalGuard;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = TuiConfig::load(cli.config.as_deref())?.with_overrides(cli.descending, cli.log_file);

    init_tracing(config.log_file())?;
    info!(?config, "Starting Rewind Tic-Tac-Toe");

    terminal::install_panic_hook();
    let mut app = App::new(*config.sort_ascending());

    let res = {
        let _guard = TerminalGuard::enter()?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;
        run_app(&mut terminal, &mut app)
    };

    if let Err(err) = res {
        error!(error = ?err, "Event loop error");
        return Err(err);
    }

    info!(
        entries = app.game().history().len(),
        step = app.game().step_number(),
        "Exiting"
    );
    Ok(())
}

/// Sends logs to a file so they never draw over the UI.
fn init_tracing(log_file: &Path) -> Result<()> {
    let file = std::fs::File::create(log_file)
        .with_context(|| format!("Failed to create log file {}", log_file.display()))?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}

/// Draw, wait for one event, apply it; until the user quits.
#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
