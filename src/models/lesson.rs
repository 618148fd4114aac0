use serde::{Deserialize, Serialize};
use std::fmt;

/// Catalog-wide lesson identifier (e.g. `101`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LessonId(pub u32);

impl fmt::Display for LessonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Content format of a lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonKind {
    Video,
    Slide,
    Quiz,
}

impl LessonKind {
    /// Lowercase tag as shown in syllabus rows.
    pub fn label(self) -> &'static str {
        match self {
            LessonKind::Video => "video",
            LessonKind::Slide => "slide",
            LessonKind::Quiz => "quiz",
        }
    }
}

/// A single syllabus entry. Always owned by exactly one [`Course`](super::Course).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub id: LessonId,
    pub title: String,
    /// Free-form duration label ("12:40", "15 min")
    pub duration: String,
    pub kind: LessonKind,
    pub is_locked: bool,
    pub is_completed: bool,
}

impl Lesson {
    /// Quizzes open the assessment screen instead of the player.
    pub fn is_quiz(&self) -> bool {
        self.kind == LessonKind::Quiz
    }

    /// Whether a click on this lesson should do anything at all.
    pub fn is_playable(&self) -> bool {
        !self.is_locked
    }
}
