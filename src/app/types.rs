//! Type definitions for the application state.
//!
//! Contains enums and structs used for tracking UI state:
//! - [`Screen`] - Which screen is currently displayed
//! - [`Shell`] - Which chrome (navbar/footer or sidebar) wraps the screen
//! - [`PublicPage`] - Screens reachable from the navbar
//! - [`Selection`] - The active course and lesson
//! - [`FormField`] - Editable text inputs
//! - [`LoginForm`] - Login page inputs

use crate::models::{CourseId, LessonId};
use crate::widgets::TextField;

/// Screens reachable from the public navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PublicPage {
    Landing,
    Contact,
    Login,
}

impl PublicPage {
    /// Navbar order.
    pub const ALL: [PublicPage; 3] = [PublicPage::Landing, PublicPage::Contact, PublicPage::Login];

    pub fn label(self) -> &'static str {
        match self {
            PublicPage::Landing => "Home",
            PublicPage::Contact => "Contact",
            PublicPage::Login => "Portal Login",
        }
    }
}

impl From<PublicPage> for Screen {
    fn from(page: PublicPage) -> Self {
        match page {
            PublicPage::Landing => Screen::Landing,
            PublicPage::Contact => Screen::Contact,
            PublicPage::Login => Screen::Login,
        }
    }
}

/// Layout chrome around a screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    /// Navbar on top, footer below
    Public,
    /// Sidebar on the left, no navbar or footer
    Private,
}

/// Represents which screen is currently active.
///
/// Private screens carry the ids they render, so a lesson view without a
/// lesson cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Screen {
    #[default]
    Landing,
    Contact,
    Login,
    Dashboard,
    CourseOverview {
        course: CourseId,
    },
    LessonView {
        course: CourseId,
        lesson: LessonId,
    },
    Assessment {
        course: CourseId,
    },
}

impl Screen {
    /// Classification used to pick the layout. Exhaustive on purpose: a new
    /// variant has to declare its shell.
    pub fn shell(&self) -> Shell {
        match self {
            Screen::Landing | Screen::Contact | Screen::Login => Shell::Public,
            Screen::Dashboard
            | Screen::CourseOverview { .. }
            | Screen::LessonView { .. }
            | Screen::Assessment { .. } => Shell::Private,
        }
    }

    pub fn is_private(&self) -> bool {
        self.shell() == Shell::Private
    }

    /// The navbar page this screen corresponds to, if any.
    pub fn public_page(&self) -> Option<PublicPage> {
        match self {
            Screen::Landing => Some(PublicPage::Landing),
            Screen::Contact => Some(PublicPage::Contact),
            Screen::Login => Some(PublicPage::Login),
            _ => None,
        }
    }

    /// The course a private screen is showing.
    pub fn course(&self) -> Option<CourseId> {
        match self {
            Screen::CourseOverview { course }
            | Screen::LessonView { course, .. }
            | Screen::Assessment { course } => Some(*course),
            _ => None,
        }
    }

    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Landing => "landing",
            Screen::Contact => "contact",
            Screen::Login => "login",
            Screen::Dashboard => "dashboard",
            Screen::CourseOverview { .. } => "course-overview",
            Screen::LessonView { .. } => "lesson-view",
            Screen::Assessment { .. } => "assessment",
        }
    }
}

/// The active course and lesson.
///
/// Cleared by logout; the course alone is cleared by returning to the
/// dashboard from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Selection {
    pub course: Option<CourseId>,
    pub lesson: Option<LessonId>,
}

/// Editable text inputs across the public pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    ContactName,
    ContactSurname,
    ContactEmail,
    ContactMessage,
    LoginUsername,
    LoginPassword,
}

impl FormField {
    pub fn label(self) -> &'static str {
        match self {
            FormField::ContactName => "FIRST NAME",
            FormField::ContactSurname => "LAST NAME",
            FormField::ContactEmail => "EMAIL ADDRESS",
            FormField::ContactMessage => "MESSAGE",
            FormField::LoginUsername => "USERNAME / EMAIL",
            FormField::LoginPassword => "PASSWORD",
        }
    }

    pub fn is_masked(self) -> bool {
        self == FormField::LoginPassword
    }

    pub fn is_multiline(self) -> bool {
        self == FormField::ContactMessage
    }

    /// Whether the field belongs to the contact form (otherwise the login form).
    pub fn is_contact(self) -> bool {
        matches!(
            self,
            FormField::ContactName
                | FormField::ContactSurname
                | FormField::ContactEmail
                | FormField::ContactMessage
        )
    }
}

/// Login page inputs. Their values are never checked: sign-in always succeeds.
#[derive(Debug, Clone, Default)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
}

impl LoginForm {
    pub const FIELDS: [FormField; 2] = [FormField::LoginUsername, FormField::LoginPassword];

    pub fn field(&self, field: FormField) -> Option<&TextField> {
        match field {
            FormField::LoginUsername => Some(&self.username),
            FormField::LoginPassword => Some(&self.password),
            _ => None,
        }
    }

    pub fn field_mut(&mut self, field: FormField) -> Option<&mut TextField> {
        match field {
            FormField::LoginUsername => Some(&mut self.username),
            FormField::LoginPassword => Some(&mut self.password),
            _ => None,
        }
    }

    pub fn reset(&mut self) {
        self.username.clear();
        self.password.clear();
    }
}
