//! Terminal setup and restoration.
//!
//! Raw mode, the alternate screen and mouse capture are undone on every
//! exit path: normal return, early `?` return, and panic.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io::{self, Write};
use tracing::{debug, warn};

/// Puts the terminal in UI mode; restores it on drop.
#[derive(Debug)]
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    /// Enables raw mode, enters the alternate screen and captures the mouse.
    ///
    /// If a later step fails, the guard built so far is dropped and the
    /// earlier steps are undone before the error is returned.
    pub fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = Self { _private: () };
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        debug!("Terminal entered UI mode");
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        restore();
    }
}

/// Chains a panic hook that restores the terminal before the panic message
/// is printed.
pub fn install_panic_hook() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        restore();
        previous(info);
    }));
}

/// Leaves raw mode and writes the reset sequences to stdout.
fn restore() {
    if let Err(e) = disable_raw_mode() {
        warn!(error = %e, "Failed to disable raw mode");
    }
    if let Err(e) = write_restore_sequence(&mut io::stdout()) {
        warn!(error = %e, "Failed to restore terminal screen");
    }
}

/// Writes the commands that leave the alternate screen, release the mouse
/// and show the cursor.
pub fn write_restore_sequence(out: &mut impl Write) -> io::Result<()> {
    execute!(out, LeaveAlternateScreen, DisableMouseCapture, Show)
}
