//! Static learner and course fixtures.
//!
//! The portal has no content backend; everything the dashboard shows comes
//! from this table. It is built once on first access and never rewritten.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::{
    Course, CourseId, Lesson, LessonId, LessonKind, Percent, Resource, UserProfile,
};

static CATALOG: Lazy<Catalog> = Lazy::new(Catalog::builtin);

/// Read-only fixture data backing every private view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Catalog {
    pub user: UserProfile,
    pub courses: Vec<Course>,
}

impl Catalog {
    /// The process-wide catalog.
    pub fn global() -> &'static Catalog {
        &CATALOG
    }

    pub fn course(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Look up a lesson through its owning course.
    pub fn lesson(&self, course: CourseId, lesson: LessonId) -> Option<&Lesson> {
        self.course(course)?.lesson(lesson)
    }

    fn builtin() -> Self {
        Self {
            user: UserProfile {
                name: "Guest Learner".to_string(),
                role: "Aspiring Executive".to_string(),
                progress: Percent::new(15),
            },
            courses: vec![
                Course {
                    id: CourseId(1),
                    title: "Executive Leadership Strategy".to_string(),
                    description: "Master the art of high-stakes decision making and strategic \
                                  alignment in the modern corporate landscape."
                        .to_string(),
                    instructor: "Luxxor Academy".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1552664730-d307ca884978\
                                ?auto=format&fit=crop&q=80&w=1600"
                        .to_string(),
                    progress: Percent::new(35),
                    resources: vec![
                        resource("Strategic Framework.pdf", "PDF"),
                        resource("Leadership Toolkit.pptx", "PPTX"),
                    ],
                    lessons: vec![
                        lesson(101, "The Global Shift", "12:40", LessonKind::Video, false, true),
                        lesson(102, "Core Competencies", "18:15", LessonKind::Video, false, false),
                        lesson(103, "Mid-Term Assessment", "15 min", LessonKind::Quiz, true, false),
                    ],
                },
                Course {
                    id: CourseId(2),
                    title: "Digital Transformation 2025".to_string(),
                    description: "Navigate the complexities of AI adoption, data governance, \
                                  and digital scalability."
                        .to_string(),
                    instructor: "Tech Division".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1519389950473-47ba0277781c\
                                ?auto=format&fit=crop&q=80&w=1600"
                        .to_string(),
                    progress: Percent::ZERO,
                    resources: vec![resource("Implementation Guide.pdf", "PDF")],
                    lessons: vec![
                        lesson(201, "AI Fundamentals", "10:00", LessonKind::Video, true, false),
                        lesson(202, "Data Ethics", "25:00", LessonKind::Slide, true, false),
                    ],
                },
            ],
        }
    }
}

fn lesson(
    id: u32,
    title: &str,
    duration: &str,
    kind: LessonKind,
    is_locked: bool,
    is_completed: bool,
) -> Lesson {
    Lesson {
        id: LessonId(id),
        title: title.to_string(),
        duration: duration.to_string(),
        kind,
        is_locked,
        is_completed,
    }
}

fn resource(title: &str, kind: &str) -> Resource {
    Resource {
        title: title.to_string(),
        kind: kind.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_shape() {
        let catalog = Catalog::global();
        assert_eq!(catalog.courses.len(), 2);
        assert_eq!(catalog.courses[0].lessons.len(), 3);
        assert_eq!(catalog.courses[1].lessons.len(), 2);
        assert_eq!(catalog.user.name, "Guest Learner");
        assert_eq!(catalog.user.progress.value(), 15);
    }

    #[test]
    fn test_lesson_lookup_goes_through_owner() {
        let catalog = Catalog::global();
        let quiz = catalog.lesson(CourseId(1), LessonId(103)).unwrap();
        assert!(quiz.is_locked);
        assert!(quiz.is_quiz());

        // 201 belongs to course 2, not course 1
        assert!(catalog.lesson(CourseId(1), LessonId(201)).is_none());
        assert!(catalog.lesson(CourseId(2), LessonId(201)).is_some());
    }

    #[test]
    fn test_unknown_ids_resolve_to_none() {
        let catalog = Catalog::global();
        assert!(catalog.course(CourseId(99)).is_none());
        assert!(catalog.lesson(CourseId(1), LessonId(999)).is_none());
    }

    #[test]
    fn test_resource_type_serializes_as_type() {
        let json = serde_json::to_value(Catalog::global()).unwrap();
        assert_eq!(json["courses"][0]["resources"][1]["type"], "PPTX");
        assert_eq!(json["courses"][1]["lessons"][1]["kind"], "slide");
    }
}
