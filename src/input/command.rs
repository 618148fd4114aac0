//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

/// Represents all commands that can be triggered by keyboard input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // =========================================================================
    // Global Commands
    // =========================================================================
    /// Quit the application
    Quit,

    // =========================================================================
    // Focus Navigation
    // =========================================================================
    /// Move focus to the next control (Tab, Down)
    FocusNext,
    /// Move focus to the previous control (Shift+Tab, Up)
    FocusPrev,
    /// Activate the focused control (Enter)
    Activate,
    /// Screen-specific back action, or close the menu (Esc)
    Back,
    /// Open/close the collapsed navbar menu
    ToggleMenu,

    // =========================================================================
    // Field Editing
    // =========================================================================
    /// Insert a character into the focused field
    InsertChar(char),
    /// Delete the character before the cursor
    Backspace,
    /// Delete the character under the cursor
    Delete,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    /// Line break in a multi-line field (Alt+Enter)
    InsertNewline,
}

impl Command {
    /// Whether this command edits a text field.
    pub fn is_editing(&self) -> bool {
        matches!(
            self,
            Command::InsertChar(_)
                | Command::Backspace
                | Command::Delete
                | Command::MoveCursorLeft
                | Command::MoveCursorRight
                | Command::MoveCursorHome
                | Command::MoveCursorEnd
                | Command::InsertNewline
        )
    }
}
