//! Hit area system for clickable controls.
//!
//! Components register hit areas during rendering, and the event loop
//! queries the registry to determine what action to take on mouse events.

use ratatui::layout::Rect;

use crate::app::{FormField, NavEvent};

/// Represents an action that can be triggered by clicking a hit area.
#[derive(Debug, Clone, PartialEq)]
pub enum ClickAction {
    /// Any navigation control (links, buttons, course cards, syllabus rows)
    Navigate(NavEvent),
    /// Hamburger button on narrow terminals
    ToggleMenu,
    /// Put the text cursor in a form field
    FocusField(FormField),
    /// "Send Message" on the contact page
    SubmitContact,
}

impl ClickAction {
    /// The form field this action edits, if any.
    pub fn field(&self) -> Option<FormField> {
        match self {
            ClickAction::FocusField(field) => Some(*field),
            _ => None,
        }
    }
}

/// A clickable region with an associated action.
#[derive(Debug, Clone)]
pub struct HitArea {
    /// The rectangular region that responds to clicks
    pub rect: Rect,
    /// The action to trigger when this area is clicked
    pub action: ClickAction,
}

impl HitArea {
    pub fn new(rect: Rect, action: ClickAction) -> Self {
        Self { rect, action }
    }

    /// Check if a point is within this hit area.
    #[inline]
    pub fn contains(&self, x: u16, y: u16) -> bool {
        rect_contains(self.rect, x, y)
    }
}

fn rect_contains(rect: Rect, x: u16, y: u16) -> bool {
    x >= rect.x && x < rect.x + rect.width && y >= rect.y && y < rect.y + rect.height
}

/// Registry for managing hit areas across the UI.
///
/// Hit areas are cleared at the start of each render and re-registered by the
/// views that draw them. The last mouse position survives the clear so hover
/// highlighting stays stable between frames.
#[derive(Debug, Default)]
pub struct HitAreaRegistry {
    /// All registered hit areas (order matters for overlapping regions)
    areas: Vec<HitArea>,
    /// Last known mouse position
    pointer: Option<(u16, u16)>,
}

impl HitAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all registered areas. Call this at the start of each render.
    pub fn clear(&mut self) {
        self.areas.clear();
    }

    /// Register a new hit area. Later registrations win on overlap.
    pub fn register(&mut self, rect: Rect, action: ClickAction) {
        self.areas.push(HitArea::new(rect, action));
    }

    /// Return the action for the topmost area containing the point.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<ClickAction> {
        self.areas
            .iter()
            .rev()
            .find(|area| area.contains(x, y))
            .map(|area| area.action.clone())
    }

    /// Record the mouse position. Returns true if the hovered action changed.
    pub fn update_hover(&mut self, x: u16, y: u16) -> bool {
        let before = self.hovered_action();
        self.pointer = Some((x, y));
        before != self.hovered_action()
    }

    /// Whether the mouse is over `rect`.
    pub fn is_hovered(&self, rect: Rect) -> bool {
        self.pointer
            .is_some_and(|(x, y)| rect_contains(rect, x, y))
    }

    fn hovered_action(&self) -> Option<ClickAction> {
        let (x, y) = self.pointer?;
        self.hit_test(x, y)
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Where `action` was drawn in the last frame.
    pub fn rect_of(&self, action: &ClickAction) -> Option<Rect> {
        self.areas
            .iter()
            .find(|area| area.action == *action)
            .map(|area| area.rect)
    }

    /// All registered actions in registration order.
    pub fn actions(&self) -> impl Iterator<Item = &ClickAction> {
        self.areas.iter().map(|area| &area.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::PublicPage;

    fn make_rect(x: u16, y: u16, width: u16, height: u16) -> Rect {
        Rect::new(x, y, width, height)
    }

    fn link(page: PublicPage) -> ClickAction {
        ClickAction::Navigate(NavEvent::SelectView(page))
    }

    #[test]
    fn test_hit_area_contains() {
        let area = HitArea::new(make_rect(10, 10, 20, 10), ClickAction::ToggleMenu);

        assert!(area.contains(10, 10));
        assert!(area.contains(29, 19));
        assert!(area.contains(20, 15));

        assert!(!area.contains(9, 10));
        assert!(!area.contains(30, 10)); // x + width is exclusive
        assert!(!area.contains(10, 20)); // y + height is exclusive
    }

    #[test]
    fn test_hit_area_zero_size() {
        let area = HitArea::new(make_rect(5, 5, 0, 0), ClickAction::SubmitContact);
        assert!(!area.contains(5, 5));
    }

    #[test]
    fn test_hit_test_topmost_wins() {
        let mut registry = HitAreaRegistry::new();
        registry.register(make_rect(0, 0, 20, 5), link(PublicPage::Landing));
        registry.register(make_rect(5, 0, 5, 5), link(PublicPage::Login));

        assert_eq!(registry.hit_test(6, 1), Some(link(PublicPage::Login)));
        assert_eq!(registry.hit_test(1, 1), Some(link(PublicPage::Landing)));
        assert_eq!(registry.hit_test(30, 1), None);
    }

    #[test]
    fn test_clear_keeps_pointer() {
        let mut registry = HitAreaRegistry::new();
        let rect = make_rect(0, 0, 10, 2);
        registry.register(rect, ClickAction::SubmitContact);
        assert!(registry.update_hover(3, 1));
        assert!(!registry.update_hover(4, 1));

        registry.clear();
        assert!(registry.is_empty());
        assert!(registry.is_hovered(rect));
        assert!(!registry.is_hovered(make_rect(20, 0, 5, 1)));
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(
            ClickAction::FocusField(FormField::ContactEmail).field(),
            Some(FormField::ContactEmail)
        );
        assert_eq!(ClickAction::ToggleMenu.field(), None);
    }
}
