//! Mouse and keyboard activation.
//!
//! Renderers register a [`HitArea`] for every control they draw. Mouse clicks
//! are resolved against the registry; Enter on the focused control produces
//! the same [`ClickAction`], and both go through [`handle_click_action`].

mod click_handler;
mod hit_area;

pub use click_handler::handle_click_action;
pub use hit_area::{ClickAction, HitArea, HitAreaRegistry};
