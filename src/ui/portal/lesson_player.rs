//! Lesson player with a mock video frame.
//!
//! "Mark Complete" only navigates back; the catalog is never mutated.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::NavEvent;
use crate::models::{CourseId, Lesson, LessonId, LessonKind, Percent};
use crate::ui::helpers::{button_row, centered_rect, inset, progress_bar, truncate, Button, ButtonKind};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_CHARCOAL, COLOR_DIM, COLOR_MUTED};
use crate::view_state::AppViewState;

/// Fixed playhead of the mock player.
pub const PLAYHEAD: &str = "05:30";
const PLAYHEAD_PROGRESS: Percent = Percent::new(33);

pub const NOTES: &str = "Key concepts discussed in this module include vertical integration \
strategy and the 3-point alignment technique.";
pub const DISCUSSION_DISABLED: &str = "Comments are disabled for this preview module.";

const TOP_BAR_HEIGHT: u16 = 3;
const NOTES_HEIGHT: u16 = 6;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    course: CourseId,
    lesson: LessonId,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let Some(lesson) = view.catalog.lesson(course, lesson) else {
        tracing::debug!(%course, %lesson, "lesson view for unknown lesson");
        return;
    };

    let notes_height = if area.height >= TOP_BAR_HEIGHT + NOTES_HEIGHT + 8 {
        NOTES_HEIGHT
    } else {
        0
    };
    let [top, player, notes] = Layout::vertical([
        Constraint::Length(TOP_BAR_HEIGHT),
        Constraint::Min(0),
        Constraint::Length(notes_height),
    ])
    .areas(area);

    render_top_bar(frame, top, lesson, view, registry);
    render_player(frame, player, lesson);
    if notes_height > 0 {
        render_notes(frame, notes, view);
    }
}

fn render_top_bar(
    frame: &mut Frame,
    area: Rect,
    lesson: &Lesson,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_CHARCOAL));
    let inner = inset(block.inner(area), 1);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let back_row = Rect { height: 1, ..inner };
    let back = Button::new(
        "‹",
        ButtonKind::Secondary,
        ClickAction::Navigate(NavEvent::BackFromLesson),
    );
    let back_width = back.width();
    button_row(frame, back_row, vec![back], Alignment::Left, view, registry);

    let complete = Button::new(
        "Mark Complete",
        ButtonKind::Primary,
        ClickAction::Navigate(NavEvent::CompleteLesson),
    );
    let complete_width = complete.width();
    button_row(frame, back_row, vec![complete], Alignment::Right, view, registry);

    let title_x = inner.x + back_width + 2;
    let title_width = inner
        .width
        .saturating_sub(back_width + complete_width + 4);
    let title_area = Rect::new(title_x, inner.y, title_width, inner.height.min(2));
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                truncate(&lesson.title, title_width as usize),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::styled("Playing Now", Style::default().fg(COLOR_DIM)),
        ]),
        title_area,
    );
}

fn render_player(frame: &mut Frame, area: Rect, lesson: &Lesson) {
    // 16:9 at roughly 2:1 cell aspect
    let width = area.width.saturating_sub(4).min(96);
    let height = (width * 9 / 32).clamp(5, area.height.saturating_sub(1).max(5));
    let frame_area = centered_rect(area, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = inset(block.inner(frame_area), 1);
    frame.render_widget(block, frame_area);
    if inner.height < 3 {
        return;
    }

    let glyph = match lesson.kind {
        LessonKind::Video => "▶",
        LessonKind::Slide | LessonKind::Quiz => "▤",
    };
    frame.render_widget(
        Paragraph::new(glyph)
            .style(Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Center),
        Rect::new(inner.x, inner.y + (inner.height - 2) / 2, inner.width, 1),
    );

    let bar_row = Rect::new(inner.x, inner.bottom() - 2, inner.width, 1);
    frame.render_widget(progress_bar(PLAYHEAD_PROGRESS, inner.width), bar_row);

    let time_row = Rect::new(inner.x, inner.bottom() - 1, inner.width, 1);
    frame.render_widget(
        Line::styled(PLAYHEAD, Style::default().fg(COLOR_MUTED)),
        time_row,
    );
    frame.render_widget(
        Line::styled(lesson.duration.as_str(), Style::default().fg(COLOR_MUTED))
            .alignment(Alignment::Right),
        time_row,
    );
}

fn render_notes(frame: &mut Frame, area: Rect, view: &AppViewState) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER))
        .style(Style::default().bg(COLOR_CHARCOAL));
    let inner = inset(block.inner(area), 2);
    frame.render_widget(block, area);

    let heading = Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD);
    let notes = Paragraph::new(vec![
        Line::styled("Lesson Notes", heading),
        Line::styled(NOTES, Style::default().fg(COLOR_MUTED)),
    ])
    .wrap(Wrap { trim: true });
    let discussion = Paragraph::new(vec![
        Line::styled("Discussion", heading),
        Line::styled(DISCUSSION_DISABLED, Style::default().fg(COLOR_DIM)),
    ])
    .wrap(Wrap { trim: true });

    if view.layout.is_narrow() {
        frame.render_widget(notes, inner);
        return;
    }
    let [left, right] = Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .spacing(4)
        .areas(inner);
    frame.render_widget(notes, left);
    frame.render_widget(discussion, right);
}
