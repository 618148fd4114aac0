//! Learner dashboard: greeting, overall mastery, enrolled course cards.
//!
//! ```text
//! Dashboard                                   15%
//! Welcome back, Guest Learner      OVERALL MASTERY
//!
//! ▌ Enrolled Courses
//! ╭───────────────────────╮ ╭───────────────────────╮
//! │ Module 1              │ │ Module 2              │
//! │ Executive Leadership… │ │ Digital Transformati… │
//! │ ...                   │ │ ...                   │
//! │ ━━━━━━━━━━   Resume › │ │ ━━━━━━━━━━   Resume › │
//! ╰───────────────────────╯ ╰───────────────────────╯
//! ```

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::NavEvent;
use crate::models::Course;
use crate::ui::helpers::{inset, progress_bar, section_heading, truncate, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GOLD, COLOR_MUTED, COLOR_OBSIDIAN,
};
use crate::view_state::AppViewState;

const CARD_HEIGHT: u16 = 8;
/// Cards go side by side when the main area is at least this wide
const TWO_COLUMN_WIDTH: u16 = 70;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let content = inset(area, 2);
    let mut rows = RowCursor::new(content);
    rows.skip(1);

    render_header(frame, rows.take(2), view);
    rows.skip(1);

    frame.render_widget(section_heading("Enrolled Courses"), rows.take(1));
    rows.skip(1);

    let columns = if content.width >= TWO_COLUMN_WIDTH { 2 } else { 1 };
    for chunk in view.catalog.courses.chunks(columns) {
        let row = rows.take(CARD_HEIGHT);
        if row.height < CARD_HEIGHT {
            break;
        }
        let cells = Layout::horizontal(vec![Constraint::Ratio(1, columns as u32); columns])
            .spacing(2)
            .split(row);
        for (course, cell) in chunk.iter().zip(cells.iter()) {
            render_card(frame, *cell, course, view, registry);
        }
        rows.skip(1);
    }
}

fn render_header(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let user = &view.catalog.user;
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                "Dashboard",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::from(vec![
                Span::styled("Welcome back, ", Style::default().fg(COLOR_MUTED)),
                Span::styled(user.name.as_str(), Style::default().fg(COLOR_GOLD)),
            ]),
        ]),
        area,
    );

    // Hidden on narrow terminals
    if !view.layout.is_narrow() {
        frame.render_widget(
            Paragraph::new(vec![
                Line::styled(
                    user.progress.to_string(),
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ),
                Line::styled("OVERALL MASTERY", Style::default().fg(COLOR_DIM)),
            ])
            .alignment(Alignment::Right),
            area,
        );
    }
}

fn render_card(
    frame: &mut Frame,
    area: Rect,
    course: &Course,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let action = ClickAction::Navigate(NavEvent::SelectCourse(course.id));
    let focused = view.is_focused(&action);
    let hovered = registry.is_hovered(area);
    let border = if focused || hovered { COLOR_GOLD } else { COLOR_BORDER };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    let inner = inset(block.inner(area), 1);
    frame.render_widget(block, area);

    let mut rows = RowCursor::new(inner);
    frame.render_widget(
        Line::styled(
            format!(" Module {} ", course.id),
            Style::default()
                .fg(COLOR_OBSIDIAN)
                .bg(COLOR_GOLD)
                .add_modifier(Modifier::BOLD),
        ),
        rows.take(1),
    );

    let title_style = if focused || hovered {
        Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    };
    frame.render_widget(
        Line::styled(truncate(&course.title, inner.width as usize), title_style),
        rows.take(1),
    );
    frame.render_widget(
        Paragraph::new(course.description.as_str())
            .style(Style::default().fg(COLOR_MUTED))
            .wrap(Wrap { trim: true }),
        rows.take(2),
    );
    rows.skip(1);

    let footer = rows.take(1);
    let resume = "Resume ›";
    let bar_width = footer.width.saturating_sub(resume.len() as u16 + 2).min(20);
    frame.render_widget(progress_bar(course.progress, bar_width), footer);
    frame.render_widget(
        Line::styled(resume, Style::default().fg(COLOR_MUTED)).alignment(Alignment::Right),
        footer,
    );

    registry.register(area, action);
}
