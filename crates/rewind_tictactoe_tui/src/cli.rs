//! Command-line interface for rewind_tictactoe_tui.

use clap::Parser;
use std::path::PathBuf;

/// Rewind Tic-Tac-Toe - play, then step back through the move history
#[derive(Parser, Debug)]
#[command(name = "rewind_tictactoe_tui")]
#[command(about = "Tic-tac-toe with a rewindable move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML config file (defaults to ./rewind_tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List moves newest first
    #[arg(long)]
    pub descending: bool,

    /// Log file (overrides the config file)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}
