//! Navigation state machine.
//!
//! [`transition`] is a pure function from the current [`NavState`] and a
//! [`NavEvent`] to the next state. Events whose precondition does not hold
//! return the state unchanged.

use crate::models::{CourseId, Lesson};

use super::{App, PublicPage, Screen, Selection};

/// User intents that move between screens.
#[derive(Debug, Clone, PartialEq)]
pub enum NavEvent {
    /// Navbar link or landing call-to-action
    SelectView(PublicPage),
    /// "Secure Login" on the login page
    Login,
    /// "Sign Out" in the sidebar
    Logout,
    /// Course card on the dashboard
    SelectCourse(CourseId),
    /// Syllabus row in a course overview
    StartLesson { course: CourseId, lesson: Lesson },
    BackFromCourseOverview,
    BackFromLesson,
    /// "Mark Complete" in the player; navigates only
    CompleteLesson,
    /// "Cancel" on the assessment screen
    BackFromAssessment,
    /// "Dashboard" in the sidebar
    ReturnToDashboard,
}

/// Everything navigation reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavState {
    pub screen: Screen,
    pub selection: Selection,
}

/// Compute the state that follows `event`.
pub fn transition(state: NavState, event: &NavEvent) -> NavState {
    let NavState { screen, selection } = state;

    match event {
        NavEvent::SelectView(page) => NavState {
            screen: Screen::from(*page),
            selection,
        },
        NavEvent::Login => match screen {
            Screen::Login => NavState {
                screen: Screen::Dashboard,
                selection,
            },
            _ => state,
        },
        NavEvent::Logout if screen.is_private() => NavState {
            screen: Screen::Landing,
            selection: Selection::default(),
        },
        NavEvent::SelectCourse(course) => NavState {
            screen: Screen::CourseOverview { course: *course },
            selection: Selection {
                course: Some(*course),
                ..selection
            },
        },
        NavEvent::StartLesson { course, lesson } => {
            if lesson.is_locked {
                state
            } else if lesson.is_quiz() {
                NavState {
                    screen: Screen::Assessment { course: *course },
                    selection,
                }
            } else {
                NavState {
                    screen: Screen::LessonView {
                        course: *course,
                        lesson: lesson.id,
                    },
                    selection: Selection {
                        lesson: Some(lesson.id),
                        ..selection
                    },
                }
            }
        }
        NavEvent::BackFromCourseOverview => match screen {
            Screen::CourseOverview { .. } => NavState {
                screen: Screen::Dashboard,
                selection,
            },
            _ => state,
        },
        NavEvent::BackFromLesson | NavEvent::CompleteLesson => match screen {
            Screen::LessonView { course, .. } => NavState {
                screen: Screen::CourseOverview { course },
                selection,
            },
            _ => state,
        },
        NavEvent::BackFromAssessment => match screen {
            Screen::Assessment { course } => NavState {
                screen: Screen::CourseOverview { course },
                selection,
            },
            _ => state,
        },
        NavEvent::ReturnToDashboard if screen.is_private() => NavState {
            screen: Screen::Dashboard,
            selection: Selection {
                course: None,
                ..selection
            },
        },
        NavEvent::Logout | NavEvent::ReturnToDashboard => state,
    }
}

impl Screen {
    /// The event Esc maps to on this screen.
    pub fn back_event(&self) -> Option<NavEvent> {
        match self {
            Screen::CourseOverview { .. } => Some(NavEvent::BackFromCourseOverview),
            Screen::LessonView { .. } => Some(NavEvent::BackFromLesson),
            Screen::Assessment { .. } => Some(NavEvent::BackFromAssessment),
            _ => None,
        }
    }
}

impl App {
    /// Apply a navigation event. Returns whether the screen or selection changed.
    ///
    /// Any change also drops page-local UI state: the mobile menu closes,
    /// focus returns to the page's first control, and forms on pages being
    /// left are cleared.
    pub fn navigate(&mut self, event: &NavEvent) -> bool {
        let before = self.nav;
        let after = transition(before, event);

        if after == before {
            tracing::debug!(screen = before.screen.name(), ?event, "navigation ignored");
            // A menu link to the current page still dismisses the menu
            if self.menu_open {
                self.menu_open = false;
                self.mark_dirty();
            }
            return false;
        }

        match event {
            NavEvent::Login => tracing::info!("learner signed in"),
            NavEvent::Logout => tracing::info!("learner signed out"),
            _ => tracing::debug!(
                from = before.screen.name(),
                to = after.screen.name(),
                "navigated"
            ),
        }

        self.nav = after;
        self.menu_open = false;
        if before.screen != after.screen {
            self.reset_page_state(before.screen);
            self.focused = None;
        }
        self.mark_dirty();
        true
    }

    /// Forms on a page behave like freshly mounted inputs each visit.
    fn reset_page_state(&mut self, left: Screen) {
        match left {
            Screen::Contact => self.contact.reset(),
            Screen::Login => self.login.reset(),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::LessonId;

    fn lesson(course: u32, id: u32) -> (CourseId, Lesson) {
        let lesson = Catalog::global()
            .lesson(CourseId(course), LessonId(id))
            .cloned()
            .unwrap();
        (CourseId(course), lesson)
    }

    fn at(screen: Screen) -> NavState {
        NavState {
            screen,
            selection: Selection::default(),
        }
    }

    #[test]
    fn test_login_only_from_login_page() {
        let from_landing = transition(at(Screen::Landing), &NavEvent::Login);
        assert_eq!(from_landing.screen, Screen::Landing);

        let from_login = transition(at(Screen::Login), &NavEvent::Login);
        assert_eq!(from_login.screen, Screen::Dashboard);
    }

    #[test]
    fn test_select_view_keeps_selection() {
        let state = NavState {
            screen: Screen::Landing,
            selection: Selection {
                course: Some(CourseId(1)),
                lesson: Some(LessonId(102)),
            },
        };
        let next = transition(state, &NavEvent::SelectView(PublicPage::Contact));
        assert_eq!(next.screen, Screen::Contact);
        assert_eq!(next.selection, state.selection);
    }

    #[test]
    fn test_quiz_does_not_select_lesson() {
        let (course, mut quiz) = lesson(1, 103);
        quiz.is_locked = false;
        let state = at(Screen::CourseOverview { course });

        let next = transition(state, &NavEvent::StartLesson { course, lesson: quiz });
        assert_eq!(next.screen, Screen::Assessment { course });
        assert_eq!(next.selection.lesson, None);
    }

    #[test]
    fn test_back_events_ignored_on_wrong_screen() {
        for event in [
            NavEvent::BackFromCourseOverview,
            NavEvent::BackFromLesson,
            NavEvent::CompleteLesson,
            NavEvent::BackFromAssessment,
        ] {
            let state = at(Screen::Dashboard);
            assert_eq!(transition(state, &event), state, "{event:?}");
        }
    }

    #[test]
    fn test_logout_and_sidebar_ignored_on_public_pages() {
        let state = NavState {
            screen: Screen::Contact,
            selection: Selection {
                course: Some(CourseId(2)),
                lesson: None,
            },
        };
        assert_eq!(transition(state, &NavEvent::Logout), state);
        assert_eq!(transition(state, &NavEvent::ReturnToDashboard), state);
    }

    #[test]
    fn test_return_to_dashboard_keeps_lesson() {
        let (course, video) = lesson(1, 102);
        let state = transition(at(Screen::Dashboard), &NavEvent::SelectCourse(course));
        let state = transition(state, &NavEvent::StartLesson { course, lesson: video });
        let state = transition(state, &NavEvent::ReturnToDashboard);

        assert_eq!(state.screen, Screen::Dashboard);
        assert_eq!(state.selection.course, None);
        assert_eq!(state.selection.lesson, Some(LessonId(102)));
    }

    #[test]
    fn test_back_from_assessment_returns_to_its_course() {
        let state = at(Screen::Assessment { course: CourseId(2) });
        let next = transition(state, &NavEvent::BackFromAssessment);
        assert_eq!(next.screen, Screen::CourseOverview { course: CourseId(2) });
    }

    #[test]
    fn test_back_event_mapping() {
        assert_eq!(Screen::Dashboard.back_event(), None);
        assert_eq!(Screen::Landing.back_event(), None);
        assert_eq!(
            Screen::CourseOverview { course: CourseId(1) }.back_event(),
            Some(NavEvent::BackFromCourseOverview)
        );
    }
}
