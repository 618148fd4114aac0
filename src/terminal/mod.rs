//! Terminal management with RAII cleanup.
//!
//! `TerminalManager` puts the terminal into TUI mode on creation and restores
//! it when dropped. The panic hook from [`setup_panic_hook`] covers the paths
//! where `Drop` never runs.
//!
//! # Example
//!
//! ```no_run
//! use luxxor::terminal::TerminalManager;
//!
//! fn main() -> color_eyre::Result<()> {
//!     let mut manager = TerminalManager::new(true)?;
//!     let terminal = manager.terminal();
//!     // ... draw ...
//!     Ok(())
//! }
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_tui_mode, leave_tui_mode};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    mouse: bool,
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new(mouse: bool) -> Self {
        Self {
            mouse,
            cleaned_up: false,
        }
    }

    /// Restore now. Subsequent calls are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_tui_mode(&mut io::stdout(), self.mouse);
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the TUI.
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// Enable raw mode, enter the alternate screen and (optionally) capture
    /// the mouse.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn new(enable_mouse: bool) -> Result<Self> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        // Guard first so a failure below still restores raw mode
        let guard = TerminalGuard::new(enable_mouse);
        enter_tui_mode(&mut stdout, enable_mouse)?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        tracing::debug!(mouse = enable_mouse, "entered TUI mode");
        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
