//! Input and message handling for the App.

use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::{App, AppMessage, FormField};
use crate::contact::ContactStatus;
use crate::input::Command;
use crate::ui::interaction::handle_click_action;
use crate::widgets::TextField;

impl App {
    /// Handle an incoming async message.
    pub fn handle_message(&mut self, msg: AppMessage) {
        // The form was reset or resubmitted while the request was in flight
        if !self.contact.is_sending() || msg.generation() != self.contact.generation() {
            tracing::debug!(
                ?msg,
                current = self.contact.generation(),
                "dropping contact result for a stale submission"
            );
            return;
        }
        self.mark_dirty();

        match msg {
            AppMessage::ContactDelivered { .. } => {
                tracing::info!("contact message delivered");
                self.contact.reset();
                self.contact.status = ContactStatus::Sent;
            }
            AppMessage::ContactFailed { error, .. } => {
                tracing::warn!(%error, "contact message failed");
                self.contact.status = ContactStatus::Failed(error.user_message());
            }
        }
    }

    /// Resolve a key press through the keybindings and execute it.
    pub fn handle_key(&mut self, key: KeyEvent) {
        let editing = self.editing_field().is_some();
        if let Some(command) = self.keybindings.resolve(&key, editing) {
            self.execute_command(command);
        }
    }

    /// Left clicks dispatch through the hit-area registry; movement drives hover.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = self.hit_areas.hit_test(mouse.column, mouse.row) {
                    handle_click_action(self, action);
                }
            }
            MouseEventKind::Moved => {
                if self.hit_areas.update_hover(mouse.column, mouse.row) {
                    self.mark_dirty();
                }
            }
            _ => {}
        }
    }

    pub fn execute_command(&mut self, command: Command) {
        if command.is_editing() {
            self.edit_focused_field(&command);
            return;
        }

        match command {
            Command::Quit => {
                tracing::info!("quit requested");
                self.quit();
            }
            Command::FocusNext => self.focus_next(),
            Command::FocusPrev => self.focus_prev(),
            Command::Activate => match self.focused_target() {
                Some(target) if target.field().is_some() => self.focus_next(),
                Some(target) => handle_click_action(self, target),
                None => {}
            },
            Command::Back => {
                if self.menu_open {
                    self.menu_open = false;
                    self.mark_dirty();
                } else if let Some(event) = self.screen().back_event() {
                    self.navigate(&event);
                }
            }
            Command::ToggleMenu => self.toggle_menu(),
            _ => {}
        }
    }

    fn edit_focused_field(&mut self, command: &Command) {
        let Some(field) = self.editing_field() else {
            return;
        };
        let Some(input) = self.text_field_mut(field) else {
            return;
        };

        match command {
            Command::InsertChar(c) => input.insert_char(*c),
            Command::InsertNewline if field.is_multiline() => input.insert_char('\n'),
            Command::Backspace => input.backspace(),
            Command::Delete => input.delete_char(),
            Command::MoveCursorLeft => input.move_cursor_left(),
            Command::MoveCursorRight => input.move_cursor_right(),
            Command::MoveCursorHome => input.move_cursor_home(),
            Command::MoveCursorEnd => input.move_cursor_end(),
            _ => return,
        }

        // Typing after a result clears the stale status line
        if field.is_contact() && !self.contact.is_sending() {
            self.contact.status = ContactStatus::Idle;
        }
        self.mark_dirty();
    }

    fn text_field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        if field.is_contact() {
            self.contact.field_mut(field)
        } else {
            self.login.field_mut(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{NavEvent, PublicPage, Screen};
    use crate::config::AppConfig;
    use crate::error::ContactError;
    use crate::models::CourseId;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn app() -> App {
        App::new(AppConfig::new().with_log_file(None))
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_q_quits_when_browsing() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_typing_into_login_fields() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Login));
        type_str(&mut app, "quinn");
        assert_eq!(app.login.username.value(), "quinn");
        assert!(!app.should_quit);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.editing_field(), Some(FormField::LoginPassword));
        type_str(&mut app, "pw");
        assert_eq!(app.login.password.value(), "pw");

        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_esc_goes_back_from_course() {
        let mut app = app();
        app.nav.screen = Screen::CourseOverview { course: CourseId(1) };
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Dashboard);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Dashboard);
    }

    #[test]
    fn test_esc_closes_menu_first() {
        let mut app = app();
        app.update_terminal_dimensions(60, 24);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.menu_open);
        press(&mut app, KeyCode::Esc);
        assert!(!app.menu_open);
    }

    #[test]
    fn test_stale_result_dropped() {
        let mut app = app();
        app.handle_message(AppMessage::ContactFailed {
            generation: app.contact.generation(),
            error: ContactError::Rejected { status: 500 },
        });
        assert_eq!(app.contact.status, ContactStatus::Idle);
    }

    #[test]
    fn test_result_for_earlier_submission_dropped() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        let first = app.contact.begin_submission();

        // Leave and come back, then send a new draft
        app.navigate(&NavEvent::SelectView(PublicPage::Landing));
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        type_str(&mut app, "Second");
        let second = app.contact.begin_submission();
        assert_ne!(first, second);

        app.handle_message(AppMessage::ContactDelivered { generation: first });
        assert!(app.contact.is_sending());
        assert_eq!(app.contact.name.value(), "Second");

        app.handle_message(AppMessage::ContactFailed {
            generation: second,
            error: ContactError::Rejected { status: 503 },
        });
        assert!(matches!(app.contact.status, ContactStatus::Failed(_)));
        assert_eq!(app.contact.name.value(), "Second");
    }

    #[test]
    fn test_delivery_resets_form() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        type_str(&mut app, "Ada");
        let generation = app.contact.begin_submission();

        app.handle_message(AppMessage::ContactDelivered { generation });
        assert_eq!(app.contact.status, ContactStatus::Sent);
        assert!(app.contact.name.is_empty());
    }

    #[test]
    fn test_failure_keeps_form() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        type_str(&mut app, "Ada");
        let generation = app.contact.begin_submission();

        app.handle_message(AppMessage::ContactFailed {
            generation,
            error: ContactError::Rejected { status: 422 },
        });
        assert!(matches!(app.contact.status, ContactStatus::Failed(_)));
        assert_eq!(app.contact.name.value(), "Ada");
    }
}
