//! Course overview: header, syllabus, toolkit.
//!
//! Locked syllabus rows are dimmed and register no hit area. An id that does
//! not resolve renders nothing.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::NavEvent;
use crate::models::{Course, CourseId, Lesson};
use crate::ui::helpers::{button_row, inset, section_heading, truncate, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GOLD, COLOR_INFO, COLOR_MUTED, COLOR_SUCCESS,
};
use crate::view_state::AppViewState;

const HEADER_HEIGHT: u16 = 7;
const LESSON_ROW_HEIGHT: u16 = 2;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    course_id: CourseId,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let Some(course) = view.catalog.course(course_id) else {
        tracing::debug!(%course_id, "course overview for unknown course");
        return;
    };

    let content = inset(area, 2);
    let mut rows = RowCursor::new(content);
    rows.skip(1);

    button_row(
        frame,
        rows.take(1),
        vec![Button::new(
            "‹ Back to Dashboard",
            ButtonKind::Link,
            ClickAction::Navigate(NavEvent::BackFromCourseOverview),
        )],
        Alignment::Left,
        view,
        registry,
    );
    rows.skip(1);

    render_header(frame, rows.take(HEADER_HEIGHT), course);
    rows.skip(1);

    let body = rows.rest();
    if view.layout.should_stack() {
        let mut body_rows = RowCursor::new(body);
        let syllabus_height = 2 + course.lessons.len() as u16 * (LESSON_ROW_HEIGHT + 1);
        render_syllabus(frame, body_rows.take(syllabus_height), course, view, registry);
        render_toolkit(frame, body_rows.rest(), course);
    } else {
        let [syllabus, toolkit] =
            Layout::horizontal([Constraint::Ratio(2, 3), Constraint::Ratio(1, 3)])
                .spacing(4)
                .areas(body);
        render_syllabus(frame, syllabus, course, view, registry);
        render_toolkit(frame, toolkit, course);
    }
}

fn render_header(frame: &mut Frame, area: Rect, course: &Course) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = inset(block.inner(area), 1);
    frame.render_widget(block, area);

    let mut rows = RowCursor::new(inner);
    frame.render_widget(
        Line::styled(
            course.title.as_str(),
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ),
        rows.take(1),
    );
    frame.render_widget(
        Paragraph::new(course.description.as_str())
            .style(Style::default().fg(COLOR_MUTED))
            .wrap(Wrap { trim: true }),
        rows.take(2),
    );
    rows.skip(1);
    frame.render_widget(
        Line::from(vec![
            Span::styled(
                format!("◆ {}", course.instructor),
                Style::default().fg(COLOR_GOLD),
            ),
            Span::raw("   "),
            Span::styled(
                format!("▤ {} Modules", course.module_count()),
                Style::default().fg(COLOR_INFO),
            ),
        ]),
        rows.take(1),
    );
}

fn render_syllabus(
    frame: &mut Frame,
    area: Rect,
    course: &Course,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let mut rows = RowCursor::new(area);
    frame.render_widget(section_heading("Syllabus"), rows.take(1));
    rows.skip(1);

    for (index, lesson) in course.lessons.iter().enumerate() {
        let row = rows.take(LESSON_ROW_HEIGHT);
        if row.height < LESSON_ROW_HEIGHT {
            break;
        }
        render_lesson_row(frame, row, index + 1, course.id, lesson, view, registry);
        rows.skip(1);
    }
}

#[allow(clippy::too_many_arguments)]
fn render_lesson_row(
    frame: &mut Frame,
    area: Rect,
    number: usize,
    course: CourseId,
    lesson: &Lesson,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    let action = lesson.is_playable().then(|| {
        ClickAction::Navigate(NavEvent::StartLesson {
            course,
            lesson: lesson.clone(),
        })
    });
    let focused = action.as_ref().is_some_and(|a| view.is_focused(a));
    let hovered = action.is_some() && registry.is_hovered(area);

    let marker = if lesson.is_completed {
        Span::styled(" ✓ ", Style::default().fg(COLOR_SUCCESS))
    } else {
        Span::styled(format!(" {} ", number), Style::default().fg(COLOR_MUTED))
    };
    let mut title_style = Style::default().fg(COLOR_ACCENT);
    if lesson.is_locked {
        title_style = Style::default().fg(COLOR_DIM);
    } else if focused {
        title_style = title_style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
    } else if hovered {
        title_style = Style::default().fg(COLOR_GOLD);
    }

    let trailer = if lesson.is_locked {
        Span::styled("LOCKED", Style::default().fg(COLOR_DIM))
    } else {
        Span::styled("▶", Style::default().fg(COLOR_GOLD))
    };
    let title_width = (area.width as usize).saturating_sub(12);

    let meta_style = if lesson.is_locked {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::DIM)
    } else {
        Style::default().fg(COLOR_DIM)
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                marker,
                Span::raw(" "),
                Span::styled(truncate(&lesson.title, title_width), title_style),
            ]),
            Line::from(vec![
                Span::raw("     "),
                Span::styled(
                    format!("{} • {}", lesson.kind.label().to_uppercase(), lesson.duration),
                    meta_style,
                ),
            ]),
        ]),
        area,
    );
    frame.render_widget(
        Line::from(trailer).alignment(Alignment::Right),
        Rect { height: 1, ..area },
    );

    if let Some(action) = action {
        registry.register(area, action);
    }
}

fn render_toolkit(frame: &mut Frame, area: Rect, course: &Course) {
    let mut rows = RowCursor::new(area);
    frame.render_widget(section_heading("Toolkit"), rows.take(1));
    rows.skip(1);

    for resource in &course.resources {
        let row = rows.take(2);
        if row.height < 2 {
            break;
        }
        frame.render_widget(
            Paragraph::new(vec![
                Line::from(vec![
                    Span::styled("▤ ", Style::default().fg(COLOR_GOLD)),
                    Span::styled(
                        truncate(&resource.title, (row.width as usize).saturating_sub(4)),
                        Style::default().fg(COLOR_ACCENT),
                    ),
                ]),
                Line::styled(format!("  {}", resource.kind), Style::default().fg(COLOR_DIM)),
            ]),
            row,
        );
        // Download is not wired to anything
        frame.render_widget(
            Line::styled("⤓", Style::default().fg(COLOR_MUTED)).alignment(Alignment::Right),
            Rect { height: 1, ..row },
        );
        rows.skip(1);
    }
}
