//! Keyboard and mouse reach the same transitions.

mod common;

use common::{render_to_string, test_app};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use luxxor::app::{App, NavEvent, PublicPage, Screen};
use luxxor::models::CourseId;
use luxxor::ui::interaction::ClickAction;

fn press(app: &mut App, code: KeyCode) {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_str(app: &mut App, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn click(app: &mut App, action: &ClickAction) {
    render_to_string(app, 140, 40);
    let rect = app
        .hit_areas
        .rect_of(action)
        .unwrap_or_else(|| panic!("{:?} was not drawn", action));
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
}

/// Tab until `target` has focus, then press Enter.
fn activate_by_keyboard(app: &mut App, target: &ClickAction) {
    for _ in 0..app.focus_targets().len() {
        if app.focused_target().as_ref() == Some(target) {
            break;
        }
        press(app, KeyCode::Tab);
    }
    assert_eq!(app.focused_target().as_ref(), Some(target));
    press(app, KeyCode::Enter);
}

fn app_on(screen: Screen) -> App {
    let mut app = test_app();
    app.nav.screen = screen;
    app.nav.selection.course = screen.course();
    app.update_terminal_dimensions(140, 40);
    app
}

#[test]
fn test_keyboard_login_flow() {
    let mut app = test_app();
    // Access Portal has initial focus
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Login);

    type_str(&mut app, "exec@luxxor.co");
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "secret");
    assert_eq!(app.login.username.value(), "exec@luxxor.co");
    assert_eq!(app.login.password.value(), "secret");

    press(&mut app, KeyCode::Tab);
    assert_eq!(
        app.focused_target(),
        Some(ClickAction::Navigate(NavEvent::Login))
    );
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.screen(), Screen::Dashboard);
    assert!(app.login.username.is_empty());
}

#[test]
fn test_mouse_login_flow() {
    let mut app = test_app();
    click(
        &mut app,
        &ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)),
    );
    assert_eq!(app.screen(), Screen::Login);

    click(&mut app, &ClickAction::Navigate(NavEvent::Login));
    assert_eq!(app.screen(), Screen::Dashboard);

    click(
        &mut app,
        &ClickAction::Navigate(NavEvent::SelectCourse(CourseId(1))),
    );
    assert_eq!(app.screen(), Screen::CourseOverview { course: CourseId(1) });

    click(&mut app, &ClickAction::Navigate(NavEvent::Logout));
    assert_eq!(app.screen(), Screen::Landing);
}

#[test]
fn test_click_and_enter_agree_on_every_page_control() {
    let screens = [
        Screen::Landing,
        Screen::Login,
        Screen::Dashboard,
        Screen::CourseOverview { course: CourseId(1) },
        Screen::Assessment { course: CourseId(1) },
    ];
    for screen in screens {
        let targets = app_on(screen).page_targets();
        for target in targets.iter().filter(|t| t.field().is_none()) {
            let mut by_mouse = app_on(screen);
            click(&mut by_mouse, target);

            let mut by_key = app_on(screen);
            activate_by_keyboard(&mut by_key, target);

            assert_eq!(by_mouse.nav, by_key.nav, "{:?} on {}", target, screen.name());
        }
    }
}

#[test]
fn test_clicking_field_moves_focus() {
    let mut app = test_app();
    app.navigate(&NavEvent::SelectView(PublicPage::Contact));
    let email = ClickAction::FocusField(luxxor::app::FormField::ContactEmail);

    click(&mut app, &email);
    assert_eq!(app.focused_target(), Some(email));

    type_str(&mut app, "ada@example.com");
    assert_eq!(app.contact.email.value(), "ada@example.com");
    assert!(app.contact.name.is_empty());
}

#[test]
fn test_q_types_into_fields_but_quits_elsewhere() {
    let mut app = test_app();
    app.navigate(&NavEvent::SelectView(PublicPage::Contact));
    press(&mut app, KeyCode::Char('q'));
    assert!(!app.should_quit);
    assert_eq!(app.contact.name.value(), "q");

    let mut app = test_app();
    press(&mut app, KeyCode::Char('q'));
    assert!(app.should_quit);
}

#[test]
fn test_ctrl_c_quits_while_editing() {
    let mut app = test_app();
    app.navigate(&NavEvent::SelectView(PublicPage::Login));
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
}

#[test]
fn test_click_outside_controls_is_ignored() {
    let mut app = app_on(Screen::Dashboard);
    render_to_string(&mut app, 140, 40);
    let before = app.nav;
    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 139,
        row: 39,
        modifiers: KeyModifiers::NONE,
    });
    assert_eq!(app.nav, before);
}

#[test]
fn test_hover_requests_redraw() {
    let mut app = app_on(Screen::Landing);
    render_to_string(&mut app, 140, 40);
    let rect = app
        .hit_areas
        .rect_of(&ClickAction::Navigate(NavEvent::SelectView(PublicPage::Contact)))
        .unwrap();
    app.needs_redraw = false;

    app.handle_mouse(MouseEvent {
        kind: MouseEventKind::Moved,
        column: rect.x,
        row: rect.y,
        modifiers: KeyModifiers::NONE,
    });
    assert!(app.needs_redraw);
}
