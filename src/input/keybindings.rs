//! Default keybindings for the application.
//!
//! Keys resolve in three layers: global bindings first, then either the
//! field-editing or the browsing layer depending on whether a text field has
//! focus. Printable characters fall through to [`Command::InsertChar`] while
//! editing.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }

    /// Normalize a crossterm event. BackTab arrives with or without SHIFT
    /// depending on the terminal, so its modifiers are dropped.
    pub fn from_event(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::BackTab => Self::plain(KeyCode::BackTab),
            code => Self::new(code, key.modifiers),
        }
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Always active
    pub global: HashMap<KeyCombo, Command>,
    /// Active when no text field has focus
    pub browsing: HashMap<KeyCombo, Command>,
    /// Active when a text field has focus
    pub editing: HashMap<KeyCombo, Command>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            browsing: HashMap::new(),
            editing: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_browsing_bindings();
        config.setup_editing_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        let global = &mut self.global;
        global.insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
        global.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        global.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        global.insert(KeyCombo::plain(KeyCode::Down), Command::FocusNext);
        global.insert(KeyCombo::plain(KeyCode::Up), Command::FocusPrev);
        global.insert(KeyCombo::plain(KeyCode::Enter), Command::Activate);
        global.insert(KeyCombo::plain(KeyCode::Esc), Command::Back);
    }

    fn setup_browsing_bindings(&mut self) {
        let browsing = &mut self.browsing;
        browsing.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        browsing.insert(KeyCombo::plain(KeyCode::Char('m')), Command::ToggleMenu);
        browsing.insert(KeyCombo::plain(KeyCode::Char('j')), Command::FocusNext);
        browsing.insert(KeyCombo::plain(KeyCode::Char('k')), Command::FocusPrev);
        browsing.insert(KeyCombo::plain(KeyCode::Right), Command::FocusNext);
        browsing.insert(KeyCombo::plain(KeyCode::Left), Command::FocusPrev);
        browsing.insert(KeyCombo::plain(KeyCode::Backspace), Command::Back);
    }

    fn setup_editing_bindings(&mut self) {
        let editing = &mut self.editing;
        editing.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
        editing.insert(KeyCombo::plain(KeyCode::Delete), Command::Delete);
        editing.insert(KeyCombo::plain(KeyCode::Left), Command::MoveCursorLeft);
        editing.insert(KeyCombo::plain(KeyCode::Right), Command::MoveCursorRight);
        editing.insert(KeyCombo::plain(KeyCode::Home), Command::MoveCursorHome);
        editing.insert(KeyCombo::plain(KeyCode::End), Command::MoveCursorEnd);
        editing.insert(KeyCombo::ctrl(KeyCode::Char('a')), Command::MoveCursorHome);
        editing.insert(KeyCombo::ctrl(KeyCode::Char('e')), Command::MoveCursorEnd);
        editing.insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);
    }

    /// Resolve a key event to a command.
    pub fn resolve(&self, key: &KeyEvent, editing: bool) -> Option<Command> {
        let combo = KeyCombo::from_event(key);

        if let Some(command) = self.global.get(&combo) {
            return Some(command.clone());
        }

        let layer = if editing { &self.editing } else { &self.browsing };
        if let Some(command) = layer.get(&combo) {
            return Some(command.clone());
        }

        match key.code {
            KeyCode::Char(c)
                if editing
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Command::InsertChar(c))
            }
            _ => None,
        }
    }
}
