//! Landing page: hero and feature cards.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::{NavEvent, PublicPage};
use crate::ui::helpers::{button_row, inset, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_GOLD, COLOR_MUTED};
use crate::view_state::AppViewState;

pub const TAGLINE: &str = "The premier Learning Experience Platform for high-performance teams. \
Scalable, secure, and designed for the modern executive.";

/// (icon, title, description)
pub const FEATURES: [(&str, &str, &str); 3] = [
    (
        "◆",
        "Enterprise Security",
        "Bank-grade encryption for your proprietary data.",
    ),
    (
        "◈",
        "Adaptive Learning",
        "AI-driven pathways that adjust to learner performance.",
    ),
    (
        "▶",
        "Immersive Content",
        "4K video streaming and interactive slide decks.",
    ),
];

const CARD_HEIGHT: u16 = 5;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let content = inset(area, 2);
    let mut rows = RowCursor::new(content);
    rows.skip(1);

    let headline = Line::from(vec![
        Span::styled(
            "Redefining ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Corporate Mastery",
            Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(
        Paragraph::new(headline).alignment(Alignment::Center),
        rows.take(1),
    );
    rows.skip(1);

    let tagline_width = content.width.min(72);
    let tagline_rows = if tagline_width >= 60 { 2 } else { 4 };
    let tagline_area = rows.take(tagline_rows);
    frame.render_widget(
        Paragraph::new(TAGLINE)
            .style(Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        Rect {
            x: tagline_area.x + (tagline_area.width - tagline_width.min(tagline_area.width)) / 2,
            width: tagline_width.min(tagline_area.width),
            ..tagline_area
        },
    );
    rows.skip(1);

    button_row(
        frame,
        rows.take(1),
        vec![
            Button::new(
                "Access Portal",
                ButtonKind::Primary,
                ClickAction::Navigate(NavEvent::SelectView(PublicPage::Login)),
            ),
            Button::new(
                "Request Demo",
                ButtonKind::Secondary,
                ClickAction::Navigate(NavEvent::SelectView(PublicPage::Contact)),
            ),
        ],
        Alignment::Center,
        view,
        registry,
    );
    rows.skip(2);

    render_features(frame, rows.rest(), view);
}

fn render_features(frame: &mut Frame, area: Rect, view: &AppViewState) {
    if area.height < CARD_HEIGHT || view.layout.is_tiny() {
        return;
    }

    if view.layout.is_narrow() {
        // One card per row while they fit
        let mut rows = RowCursor::new(area);
        for feature in FEATURES {
            let card = rows.take(CARD_HEIGHT);
            if card.height < CARD_HEIGHT {
                break;
            }
            render_card(frame, card, feature);
        }
        return;
    }

    let row = Rect::new(area.x, area.y, area.width, CARD_HEIGHT);
    let columns = Layout::horizontal([Constraint::Ratio(1, 3); 3])
        .spacing(2)
        .split(row);
    for (feature, column) in FEATURES.into_iter().zip(columns.iter()) {
        render_card(frame, *column, feature);
    }
}

fn render_card(frame: &mut Frame, area: Rect, (icon, title, desc): (&str, &str, &str)) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_GOLD));
    let lines = vec![
        Line::from(vec![
            Span::styled(format!("{} ", icon), Style::default().fg(COLOR_GOLD)),
            Span::styled(
                title,
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::styled(desc, Style::default().fg(COLOR_MUTED)),
    ];
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}
