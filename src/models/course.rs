use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Lesson, LessonId, Percent};

/// Catalog-wide course identifier; doubles as the "Module N" badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseId(pub u32);

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A downloadable toolkit item attached to a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    /// Short type tag such as `PDF` or `PPTX`
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    pub instructor: String,
    /// Opaque image reference; never fetched
    pub thumbnail: String,
    pub progress: Percent,
    pub lessons: Vec<Lesson>,
    pub resources: Vec<Resource>,
}

impl Course {
    pub fn lesson(&self, id: LessonId) -> Option<&Lesson> {
        self.lessons.iter().find(|l| l.id == id)
    }

    pub fn module_count(&self) -> usize {
        self.lessons.len()
    }
}
