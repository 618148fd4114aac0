//! Assessment gate. "Start Assessment" is not wired to anything.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::app::NavEvent;
use crate::ui::helpers::{button_row, centered_rect, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_GOLD, COLOR_MUTED};
use crate::view_state::AppViewState;

pub const PASS_MARK: &str = "You must achieve a score of 80% or higher to unlock the next \
certification level. This assessment contains 15 strategic scenario questions.";

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let panel = centered_rect(area, 64, 12);
    let mut rows = RowCursor::new(panel);

    frame.render_widget(
        Paragraph::new("◈")
            .style(Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center),
        rows.take(1),
    );
    rows.skip(1);
    frame.render_widget(
        Paragraph::new(Line::styled(
            "Mastery Check",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        rows.take(1),
    );
    rows.skip(1);
    frame.render_widget(
        Paragraph::new(PASS_MARK)
            .style(Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        rows.take(4),
    );
    rows.skip(1);

    button_row(
        frame,
        rows.take(1),
        vec![
            Button::new(
                "Cancel",
                ButtonKind::Secondary,
                ClickAction::Navigate(NavEvent::BackFromAssessment),
            ),
            Button::inert("Start Assessment", ButtonKind::Primary),
        ],
        Alignment::Center,
        view,
        registry,
    );
}
