//! Terminal setup and teardown functions.

use crossterm::{
    cursor::Show,
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Enter the alternate screen, capturing the mouse when `mouse` is set.
///
/// # Errors
///
/// Returns an error if any terminal commands fail.
pub fn enter_tui_mode<W: Write>(writer: &mut W, mouse: bool) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen)?;
    if mouse {
        execute!(writer, EnableMouseCapture)?;
    }
    Ok(())
}

/// Leave TUI mode and restore the terminal to normal state.
///
/// Errors are ignored; this runs on shutdown and from the panic hook.
pub fn leave_tui_mode<W: Write>(writer: &mut W, mouse: bool) {
    let _ = disable_raw_mode();

    if mouse {
        let _ = execute!(writer, DisableMouseCapture);
    }
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Restore the terminal without knowing what was enabled.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout(), true);
}
