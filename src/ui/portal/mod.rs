//! Private learning area: sidebar plus one main view.

pub mod assessment;
pub mod course_overview;
pub mod dashboard;
pub mod lesson_player;
pub mod sidebar;
