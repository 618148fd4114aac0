//! Keyboard focus over the controls of the current screen.
//!
//! Focus is stored as the [`ClickAction`] of the focused control rather than
//! an index, so it survives controls appearing or disappearing (the narrow
//! menu opening, a course that no longer resolves).

use super::{App, FormField, NavEvent, PublicPage, Screen};
use crate::contact::ContactForm;
use crate::ui::interaction::ClickAction;

impl App {
    /// Controls drawn by the navbar or sidebar, in tab order.
    pub fn chrome_targets(&self) -> Vec<ClickAction> {
        if self.screen().is_private() {
            return vec![
                ClickAction::Navigate(NavEvent::ReturnToDashboard),
                ClickAction::Navigate(NavEvent::Logout),
            ];
        }

        let links = PublicPage::ALL
            .into_iter()
            .map(|page| ClickAction::Navigate(NavEvent::SelectView(page)));

        if !self.layout().is_narrow() {
            return links.collect();
        }

        let mut targets = vec![ClickAction::ToggleMenu];
        if self.menu_open {
            targets.extend(links);
        }
        targets
    }

    /// Controls drawn by the page body, in tab order.
    pub fn page_targets(&self) -> Vec<ClickAction> {
        match self.screen() {
            Screen::Landing => vec![
                ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)),
                ClickAction::Navigate(NavEvent::SelectView(PublicPage::Contact)),
            ],
            Screen::Contact => ContactForm::FIELDS
                .into_iter()
                .map(ClickAction::FocusField)
                .chain(std::iter::once(ClickAction::SubmitContact))
                .collect(),
            Screen::Login => vec![
                ClickAction::FocusField(FormField::LoginUsername),
                ClickAction::FocusField(FormField::LoginPassword),
                ClickAction::Navigate(NavEvent::Login),
            ],
            Screen::Dashboard => self
                .catalog()
                .courses
                .iter()
                .map(|course| ClickAction::Navigate(NavEvent::SelectCourse(course.id)))
                .collect(),
            Screen::CourseOverview { course } => match self.catalog().course(course) {
                Some(found) => std::iter::once(ClickAction::Navigate(
                    NavEvent::BackFromCourseOverview,
                ))
                .chain(
                    found
                        .lessons
                        .iter()
                        .filter(|lesson| lesson.is_playable())
                        .map(|lesson| {
                            ClickAction::Navigate(NavEvent::StartLesson {
                                course,
                                lesson: lesson.clone(),
                            })
                        }),
                )
                .collect(),
                None => Vec::new(),
            },
            Screen::LessonView { course, lesson } => {
                if self.catalog().lesson(course, lesson).is_some() {
                    vec![
                        ClickAction::Navigate(NavEvent::BackFromLesson),
                        ClickAction::Navigate(NavEvent::CompleteLesson),
                    ]
                } else {
                    Vec::new()
                }
            }
            Screen::Assessment { .. } => {
                vec![ClickAction::Navigate(NavEvent::BackFromAssessment)]
            }
        }
    }

    /// Every focusable control, chrome first.
    pub fn focus_targets(&self) -> Vec<ClickAction> {
        let mut targets = self.chrome_targets();
        targets.extend(self.page_targets());
        targets
    }

    /// The control that currently has focus.
    ///
    /// Falls back to the first page control (or the first chrome control on
    /// a page with none) when nothing valid is focused.
    pub fn focused_target(&self) -> Option<ClickAction> {
        if let Some(focused) = &self.focused {
            if self.focus_targets().contains(focused) {
                return Some(focused.clone());
            }
        }
        self.page_targets()
            .into_iter()
            .next()
            .or_else(|| self.chrome_targets().into_iter().next())
    }

    /// The form field receiving typed characters, if any.
    pub fn editing_field(&self) -> Option<FormField> {
        self.focused_target().and_then(|target| target.field())
    }

    pub fn focus_next(&mut self) {
        self.move_focus(1);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(-1);
    }

    fn move_focus(&mut self, step: isize) {
        let targets = self.focus_targets();
        if targets.is_empty() {
            return;
        }
        let current = self
            .focused_target()
            .and_then(|target| targets.iter().position(|t| *t == target))
            .unwrap_or(0);
        let len = targets.len() as isize;
        let next = (current as isize + step).rem_euclid(len) as usize;
        self.focused = Some(targets[next].clone());
        self.mark_dirty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::models::{CourseId, LessonId};

    fn app() -> App {
        App::new(AppConfig::new().with_log_file(None))
    }

    #[test]
    fn test_landing_defaults_to_access_portal() {
        let app = app();
        assert_eq!(
            app.focused_target(),
            Some(ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)))
        );
    }

    #[test]
    fn test_focus_wraps_both_ways() {
        let mut app = app();
        let targets = app.focus_targets();
        // 3 navbar links + 2 hero buttons at 80 columns
        assert_eq!(targets.len(), 5);

        app.focus_prev();
        assert_eq!(app.focused_target().as_ref(), Some(&targets[2]));

        app.focused = Some(targets[4].clone());
        app.focus_next();
        assert_eq!(app.focused_target().as_ref(), Some(&targets[0]));
    }

    #[test]
    fn test_locked_lessons_not_focusable() {
        let mut app = app();
        app.nav.screen = Screen::CourseOverview { course: CourseId(1) };
        let starts: Vec<LessonId> = app
            .page_targets()
            .into_iter()
            .filter_map(|target| match target {
                ClickAction::Navigate(NavEvent::StartLesson { lesson, .. }) => Some(lesson.id),
                _ => None,
            })
            .collect();
        assert_eq!(starts, vec![LessonId(101), LessonId(102)]);
    }

    #[test]
    fn test_unknown_course_has_no_page_targets() {
        let mut app = app();
        app.nav.screen = Screen::CourseOverview { course: CourseId(42) };
        assert!(app.page_targets().is_empty());
        // Sidebar still works
        assert_eq!(
            app.focused_target(),
            Some(ClickAction::Navigate(NavEvent::ReturnToDashboard))
        );
    }

    #[test]
    fn test_narrow_navbar_collapses_links() {
        let mut app = app();
        app.update_terminal_dimensions(60, 24);
        assert_eq!(app.chrome_targets(), vec![ClickAction::ToggleMenu]);

        app.toggle_menu();
        assert_eq!(app.chrome_targets().len(), 4);

        app.update_terminal_dimensions(100, 30);
        assert!(!app.menu_open);
        assert_eq!(app.chrome_targets().len(), 3);
    }

    #[test]
    fn test_contact_focuses_first_field() {
        let mut app = app();
        app.navigate(&NavEvent::SelectView(PublicPage::Contact));
        assert_eq!(app.editing_field(), Some(FormField::ContactName));
    }

    #[test]
    fn test_stale_focus_falls_back() {
        let mut app = app();
        app.focused = Some(ClickAction::SubmitContact);
        // SubmitContact is not on the landing page
        assert_eq!(
            app.focused_target(),
            Some(ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)))
        );
    }
}
