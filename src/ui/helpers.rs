//! Shared rendering helpers: row allocation, buttons, progress bars.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::interaction::{ClickAction, HitAreaRegistry};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DANGER, COLOR_GOLD, COLOR_GOLD_LIGHT, COLOR_MUTED,
    COLOR_OBSIDIAN, COLOR_PROGRESS_BG,
};
use crate::models::Percent;
use crate::view_state::AppViewState;

/// Hands out consecutive rows of an area, top to bottom.
///
/// Rows past the bottom of the area come back with zero height, so views can
/// lay themselves out without checking the remaining space at every step.
#[derive(Debug, Clone, Copy)]
pub struct RowCursor {
    area: Rect,
    y: u16,
}

impl RowCursor {
    pub fn new(area: Rect) -> Self {
        Self { area, y: area.y }
    }

    /// Take the next `height` rows (fewer if the area runs out).
    pub fn take(&mut self, height: u16) -> Rect {
        let available = self.area.bottom().saturating_sub(self.y);
        let height = height.min(available);
        let rect = Rect::new(self.area.x, self.y, self.area.width, height);
        self.y = self.y.saturating_add(height);
        rect
    }

    pub fn skip(&mut self, height: u16) {
        self.take(height);
    }

    /// Everything below the rows taken so far.
    pub fn rest(&self) -> Rect {
        let height = self.area.bottom().saturating_sub(self.y);
        Rect::new(self.area.x, self.y, self.area.width, height)
    }
}

/// A rect of `width` x `height` centered in `area`, clamped to fit.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

/// Shrink `area` by `margin` columns on each side.
pub fn inset(area: Rect, margin: u16) -> Rect {
    let margin = margin.min(area.width / 2);
    Rect::new(
        area.x + margin,
        area.y,
        area.width - margin * 2,
        area.height,
    )
}

/// Truncate to `max_width` display columns, ending with "…" when cut.
pub fn truncate(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// A one-row progress bar filled in gold.
pub fn progress_bar(percent: Percent, width: u16) -> Line<'static> {
    let width = width as usize;
    let filled = ((percent.ratio() * width as f64).round() as usize).min(width);
    Line::from(vec![
        Span::styled("━".repeat(filled), Style::default().fg(COLOR_GOLD)),
        Span::styled(
            "━".repeat(width - filled),
            Style::default().fg(COLOR_PROGRESS_BG),
        ),
    ])
}

/// Bold gold-barred section heading.
pub fn section_heading(text: &str) -> Line<'_> {
    Line::from(vec![
        Span::styled("▌ ", Style::default().fg(COLOR_GOLD)),
        Span::styled(
            text,
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

/// Visual weight of a [`Button`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ButtonKind {
    /// Solid gold call to action
    Primary,
    /// Outlined
    Secondary,
    /// Plain text
    Link,
    /// Sign out
    Danger,
}

/// A one-row clickable control.
///
/// Buttons without an action are drawn but neither registered nor focusable.
#[derive(Debug, Clone)]
pub struct Button<'a> {
    label: &'a str,
    kind: ButtonKind,
    action: Option<ClickAction>,
    active: bool,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, kind: ButtonKind, action: ClickAction) -> Self {
        Self {
            label,
            kind,
            action: Some(action),
            active: false,
        }
    }

    /// A control with no behavior.
    pub fn inert(label: &'a str, kind: ButtonKind) -> Self {
        Self {
            label,
            kind,
            action: None,
            active: false,
        }
    }

    /// Highlight as the current page or section.
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// Columns the button occupies, padding included.
    pub fn width(&self) -> u16 {
        match self.kind {
            ButtonKind::Link => self.label.width() as u16,
            _ => self.label.width() as u16 + 4,
        }
    }

    fn text(&self) -> String {
        match self.kind {
            ButtonKind::Link => self.label.to_string(),
            ButtonKind::Secondary => format!("[ {} ]", self.label),
            _ => format!("  {}  ", self.label),
        }
    }

    fn style(&self, focused: bool, hovered: bool) -> Style {
        let base = match self.kind {
            ButtonKind::Primary => Style::default()
                .fg(COLOR_OBSIDIAN)
                .bg(COLOR_GOLD)
                .add_modifier(Modifier::BOLD),
            ButtonKind::Secondary => Style::default().fg(COLOR_ACCENT),
            ButtonKind::Link if self.active => Style::default().fg(COLOR_GOLD),
            ButtonKind::Link => Style::default().fg(COLOR_MUTED),
            ButtonKind::Danger => Style::default().fg(COLOR_DANGER),
        };

        if focused {
            base.add_modifier(Modifier::REVERSED | Modifier::BOLD)
        } else if hovered {
            match self.kind {
                ButtonKind::Primary => base.bg(COLOR_GOLD_LIGHT),
                _ => base.fg(COLOR_GOLD_LIGHT).add_modifier(Modifier::UNDERLINED),
            }
        } else if self.action.is_none() && self.kind != ButtonKind::Primary {
            base.fg(COLOR_BORDER).add_modifier(Modifier::DIM)
        } else {
            base
        }
    }

    /// Draw at `(x, y)` clipped to `bounds` and register the hit area.
    /// Returns the rect actually drawn.
    pub fn render(
        self,
        frame: &mut Frame,
        x: u16,
        y: u16,
        bounds: Rect,
        view: &AppViewState,
        registry: &mut HitAreaRegistry,
    ) -> Rect {
        let rect = Rect::new(x, y, self.width(), 1).intersection(bounds);
        if rect.is_empty() {
            return rect;
        }

        let focused = self.action.as_ref().is_some_and(|a| view.is_focused(a));
        let hovered = self.action.is_some() && registry.is_hovered(rect);
        let style = self.style(focused, hovered);
        frame.render_widget(
            Line::from(Span::styled(truncate(&self.text(), rect.width as usize), style)),
            rect,
        );

        if let Some(action) = self.action {
            registry.register(rect, action);
        }
        rect
    }
}

/// Lay buttons out on one row with a two-column gap.
pub fn button_row(
    frame: &mut Frame,
    row: Rect,
    buttons: Vec<Button<'_>>,
    alignment: Alignment,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    if row.is_empty() {
        return;
    }
    let gap = 2;
    let total: u16 = buttons.iter().map(Button::width).sum::<u16>()
        + gap * (buttons.len().saturating_sub(1) as u16);
    let mut x = match alignment {
        Alignment::Left => row.x,
        Alignment::Center => row.x + row.width.saturating_sub(total) / 2,
        Alignment::Right => row.x + row.width.saturating_sub(total),
    };
    for button in buttons {
        let width = button.width();
        button.render(frame, x, row.y, row, view, registry);
        x = x.saturating_add(width + gap);
    }
}
