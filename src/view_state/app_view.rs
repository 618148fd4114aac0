//! Main view state struct for UI rendering
//!
//! This module provides the `AppViewState` struct, which contains all data
//! that UI components need to render without requiring access to the full App.

use crate::app::{LoginForm, Screen, Selection};
use crate::catalog::Catalog;
use crate::contact::ContactForm;
use crate::ui::interaction::ClickAction;
use crate::ui::LayoutContext;

/// Complete view state for UI rendering.
///
/// Borrowed from `App` for the duration of one frame. Views are pure
/// functions of this struct plus the hit-area registry they write into.
#[derive(Debug, Clone, Copy)]
pub struct AppViewState<'a> {
    /// Current screen being displayed
    pub screen: Screen,
    /// Active course and lesson
    pub selection: Selection,
    pub catalog: &'a Catalog,
    /// Control with keyboard focus
    pub focused: Option<&'a ClickAction>,
    /// Narrow-terminal navbar menu
    pub menu_open: bool,
    pub contact: &'a ContactForm,
    pub login: &'a LoginForm,
    /// Terminal dimensions
    pub layout: LayoutContext,
}

impl<'a> AppViewState<'a> {
    /// Whether `action` is the keyboard-focused control.
    pub fn is_focused(&self, action: &ClickAction) -> bool {
        self.focused == Some(action)
    }
}
