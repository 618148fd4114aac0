//! Click action handler for the interaction system.
//!
//! Actions reach this module from two places: a mouse click that lands on a
//! registered hit area, and Enter on the keyboard-focused control.

use super::hit_area::ClickAction;
use crate::app::App;

/// Handle a click action by updating App state.
pub fn handle_click_action(app: &mut App, action: ClickAction) {
    app.mark_dirty();

    match action {
        ClickAction::Navigate(event) => {
            let changed = app.navigate(&event);
            tracing::debug!("Click: Navigate({:?}) changed={}", event, changed);
        }
        ClickAction::ToggleMenu => {
            app.toggle_menu();
            tracing::debug!("Click: ToggleMenu open={}", app.menu_open);
        }
        ClickAction::FocusField(field) => {
            app.focused = Some(ClickAction::FocusField(field));
            tracing::debug!("Click: FocusField({:?})", field);
        }
        ClickAction::SubmitContact => {
            app.focused = Some(ClickAction::SubmitContact);
            let started = app.submit_contact();
            tracing::debug!("Click: SubmitContact started={}", started);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{FormField, NavEvent, PublicPage, Screen};
    use crate::config::AppConfig;
    use crate::contact::ContactStatus;

    fn app() -> App {
        App::new(AppConfig::new().with_log_file(None))
    }

    #[test]
    fn test_navigate_action() {
        let mut app = app();
        handle_click_action(
            &mut app,
            ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)),
        );
        assert_eq!(app.screen(), Screen::Login);
    }

    #[test]
    fn test_focus_field_action() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        handle_click_action(&mut app, ClickAction::FocusField(FormField::ContactEmail));
        assert_eq!(app.editing_field(), Some(FormField::ContactEmail));
    }

    #[test]
    fn test_submit_invalid_form_fails_locally() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        handle_click_action(&mut app, ClickAction::SubmitContact);
        assert!(matches!(app.contact.status, ContactStatus::Failed(_)));
    }

    #[test]
    fn test_toggle_menu_needs_narrow_terminal() {
        let mut app = app();
        handle_click_action(&mut app, ClickAction::ToggleMenu);
        assert!(!app.menu_open);

        app.update_terminal_dimensions(50, 20);
        handle_click_action(&mut app, ClickAction::ToggleMenu);
        assert!(app.menu_open);
    }
}
