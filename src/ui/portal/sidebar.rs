//! Private-area sidebar.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{NavEvent, Screen};
use crate::ui::helpers::{button_row, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CHARCOAL};
use crate::view_state::AppViewState;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_CHARCOAL));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.width < 4 {
        return;
    }
    let content = Rect::new(inner.x + 2, inner.y, inner.width - 2, inner.height);

    let mut rows = RowCursor::new(content);
    rows.skip(1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "LUXXOR",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        )),
        rows.take(1),
    );
    rows.skip(2);

    let on_dashboard = view.screen == Screen::Dashboard;
    let dashboard_kind = if on_dashboard {
        ButtonKind::Primary
    } else {
        ButtonKind::Link
    };
    let items = [
        Button::new(
            "Dashboard",
            dashboard_kind,
            ClickAction::Navigate(NavEvent::ReturnToDashboard),
        )
        .active(on_dashboard),
        Button::inert("My Learning", ButtonKind::Link),
        Button::inert("Settings", ButtonKind::Link),
    ];
    for item in items {
        button_row(frame, rows.take(1), vec![item], Alignment::Left, view, registry);
        rows.skip(1);
    }

    // Sign out is pinned to the bottom
    if inner.height > 0 {
        let bottom = Rect::new(content.x, inner.bottom() - 1, content.width, 1);
        if bottom.y >= rows.rest().y {
            button_row(
                frame,
                bottom,
                vec![Button::new(
                    "Sign Out",
                    ButtonKind::Danger,
                    ClickAction::Navigate(NavEvent::Logout),
                )],
                Alignment::Left,
                view,
                registry,
            );
        }
    }
}
