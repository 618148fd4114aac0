mod course;
mod lesson;
mod user;

pub use course::{Course, CourseId, Resource};
pub use lesson::{Lesson, LessonId, LessonKind};
pub use user::{Percent, UserProfile};
