//! Input handling module for keyboard and command processing.
//!
//! Keyboard input is translated to a [`Command`] by [`KeybindingConfig`] and
//! executed by `App::execute_command`:
//!
//! ```text
//! KeyEvent -> KeybindingConfig::resolve() -> Command -> App mutation
//! ```

pub mod command;
pub mod keybindings;

pub use command::Command;
pub use keybindings::{KeyCombo, KeybindingConfig};
