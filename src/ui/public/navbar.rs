//! Public navbar.
//!
//! ```text
//! LUXXORMEDIA                          Home   Contact   Portal Login
//! ──────────────────────────────────────────────────────────────────
//! ```
//!
//! Below the narrow breakpoint the links collapse behind a menu toggle and,
//! when open, drop down as one row each.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders},
    Frame,
};

use crate::app::{NavEvent, PublicPage};
use crate::ui::helpers::{button_row, Button, ButtonKind};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_GOLD};
use crate::view_state::AppViewState;

const BAR_HEIGHT: u16 = 3;

/// Rows the navbar needs, including an open dropdown.
pub fn height(view: &AppViewState) -> u16 {
    if view.layout.is_narrow() && view.menu_open {
        BAR_HEIGHT + PublicPage::ALL.len() as u16
    } else {
        BAR_HEIGHT
    }
}

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let bar = Rect::new(area.x, area.y, area.width, BAR_HEIGHT.min(area.height));
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(bar);
    frame.render_widget(block, bar);
    if inner.is_empty() {
        return;
    }
    let row = Rect::new(inner.x + 1, inner.y + inner.height / 2, inner.width.saturating_sub(2), 1);

    let brand = Line::from(vec![
        Span::styled(
            "LUXXOR",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("MEDIA", Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD)),
    ]);
    let brand_area = Rect::new(row.x, row.y, 11.min(row.width), 1);
    frame.render_widget(brand, brand_area);
    registry.register(
        brand_area,
        ClickAction::Navigate(NavEvent::SelectView(PublicPage::Landing)),
    );

    let current = view.screen.public_page();

    if !view.layout.is_narrow() {
        let links = PublicPage::ALL
            .into_iter()
            .map(|page| link(page, current))
            .collect();
        button_row(frame, row, links, Alignment::Right, view, registry);
        return;
    }

    let toggle_label = if view.menu_open { "✕ Close" } else { "☰ Menu" };
    button_row(
        frame,
        row,
        vec![Button::new(toggle_label, ButtonKind::Link, ClickAction::ToggleMenu)],
        Alignment::Right,
        view,
        registry,
    );

    if view.menu_open {
        for (i, page) in PublicPage::ALL.into_iter().enumerate() {
            let y = bar.bottom() + i as u16;
            if y >= area.bottom() {
                break;
            }
            let link_row = Rect::new(area.x + 2, y, area.width.saturating_sub(4), 1);
            button_row(
                frame,
                link_row,
                vec![link(page, current)],
                Alignment::Left,
                view,
                registry,
            );
        }
    }
}

fn link(page: PublicPage, current: Option<PublicPage>) -> Button<'static> {
    Button::new(
        page.label(),
        ButtonKind::Link,
        ClickAction::Navigate(NavEvent::SelectView(page)),
    )
    .active(current == Some(page))
}
