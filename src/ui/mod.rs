//! UI rendering for the Luxxor portal.
//!
//! Every screen is drawn inside one of two shells, chosen by
//! [`Screen::shell`](crate::app::Screen::shell):
//!
//! ```text
//! Public                         Private
//! +--------------------------+   +--------+-----------------+
//! | navbar                   |   |        |                 |
//! +--------------------------+   | side-  |   main view     |
//! | page                     |   | bar    |                 |
//! +--------------------------+   |        |                 |
//! | footer                   |   |        |                 |
//! +--------------------------+   +--------+-----------------+
//! ```
//!
//! Rendering is a pure function of [`AppViewState`]; the only output besides
//! the frame buffer is the set of hit areas registered for mouse dispatch.

mod helpers;
pub mod interaction;
mod layout;
pub mod portal;
pub mod public;
mod theme;

// Re-export theme colors for external use
pub use theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_CHARCOAL, COLOR_DANGER, COLOR_DIM, COLOR_GOLD,
    COLOR_INPUT_BG, COLOR_MUTED, COLOR_OBSIDIAN, COLOR_SUCCESS,
};

// Re-export layout system for external use
pub use layout::{breakpoints, LayoutContext};

pub use helpers::truncate;

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{Screen, Shell};
use crate::view_state::AppViewState;
use interaction::HitAreaRegistry;

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the current screen inside its shell.
pub fn render(frame: &mut Frame, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let area = frame.area();
    frame.render_widget(Block::default().style(Style::default().bg(COLOR_OBSIDIAN)), area);

    match view.screen.shell() {
        Shell::Public => render_public(frame, area, view, registry),
        Shell::Private => render_private(frame, area, view, registry),
    }
}

fn render_public(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let footer_height = if view.layout.is_short() { 0 } else { public::footer::HEIGHT };
    let [navbar, page, footer] = Layout::vertical([
        Constraint::Length(public::navbar::height(view)),
        Constraint::Min(0),
        Constraint::Length(footer_height),
    ])
    .areas(area);

    match view.screen {
        Screen::Landing => public::landing::render(frame, page, view, registry),
        Screen::Contact => public::contact::render(frame, page, view, registry),
        Screen::Login => public::login::render(frame, page, view, registry),
        _ => {}
    }
    if footer_height > 0 {
        public::footer::render(frame, footer);
    }
    // Drawn last so the dropdown sits on top of the page
    public::navbar::render(frame, navbar, view, registry);
}

fn render_private(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let [sidebar, main] = Layout::horizontal([
        Constraint::Length(view.layout.sidebar_width()),
        Constraint::Min(0),
    ])
    .areas(area);

    portal::sidebar::render(frame, sidebar, view, registry);

    match view.screen {
        Screen::Dashboard => portal::dashboard::render(frame, main, view, registry),
        Screen::CourseOverview { course } => {
            portal::course_overview::render(frame, main, course, view, registry)
        }
        Screen::LessonView { course, lesson } => {
            portal::lesson_player::render(frame, main, course, lesson, view, registry)
        }
        Screen::Assessment { .. } => portal::assessment::render(frame, main, view, registry),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{App, NavEvent, PublicPage};
    use crate::config::AppConfig;
    use crate::models::{CourseId, LessonId};
    use interaction::ClickAction;
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    fn app() -> App {
        App::new(AppConfig::new().with_log_file(None))
    }

    #[test]
    fn test_landing_renders_navbar_and_footer() {
        let mut app = app();
        let text = draw(&mut app, 120, 40);
        assert!(text.contains("Portal Login"));
        assert!(text.contains("Access Portal"));
        assert!(text.contains("Enterprise Security"));
        assert!(text.contains("All rights reserved"));
    }

    #[test]
    fn test_private_screens_have_sidebar_not_navbar() {
        let mut app = app();
        app.nav.screen = Screen::Dashboard;
        let text = draw(&mut app, 120, 40);
        assert!(text.contains("Sign Out"));
        assert!(text.contains("Welcome back, Guest Learner"));
        assert!(!text.contains("Portal Login"));
        assert!(!text.contains("All rights reserved"));
    }

    #[test]
    fn test_hit_areas_cover_focus_targets() {
        let mut app = app();
        app.nav.screen = Screen::CourseOverview { course: CourseId(1) };
        draw(&mut app, 140, 40);
        for target in app.focus_targets() {
            assert!(
                app.hit_areas.actions().any(|a| *a == target),
                "{target:?} not registered"
            );
        }
    }

    #[test]
    fn test_locked_lessons_register_no_hit_area() {
        let mut app = app();
        app.nav.screen = Screen::CourseOverview { course: CourseId(2) };
        draw(&mut app, 140, 40);
        assert!(!app
            .hit_areas
            .actions()
            .any(|a| matches!(a, ClickAction::Navigate(NavEvent::StartLesson { .. }))));
    }

    #[test]
    fn test_unknown_ids_render_empty_main() {
        let mut app = app();
        app.nav.screen = Screen::LessonView {
            course: CourseId(1),
            lesson: LessonId(999),
        };
        let text = draw(&mut app, 100, 30);
        assert!(text.contains("Sign Out"));
        assert!(!text.contains("Playing Now"));
    }

    #[test]
    fn test_narrow_navbar_shows_menu_toggle() {
        let mut app = app();
        let text = draw(&mut app, 60, 30);
        assert!(text.contains("Menu"));
        assert!(!text.contains("Portal Login"));

        app.toggle_menu();
        let text = draw(&mut app, 60, 30);
        assert!(text.contains("Portal Login"));
        assert!(text.contains("Close"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        for screen in [
            Screen::Landing,
            Screen::Contact,
            Screen::Login,
            Screen::Dashboard,
            Screen::CourseOverview { course: CourseId(1) },
            Screen::LessonView {
                course: CourseId(1),
                lesson: LessonId(102),
            },
            Screen::Assessment { course: CourseId(1) },
        ] {
            app.nav.screen = screen;
            draw(&mut app, 10, 4);
            draw(&mut app, 1, 1);
        }
        app.navigate(&NavEvent::SelectView(PublicPage::Landing));
    }
}
