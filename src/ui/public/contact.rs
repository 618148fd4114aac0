//! Contact page: company details beside the contact form.
//!
//! The form posts to the relay in the background; its progress shows as a
//! status line under the submit button.

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::FormField;
use crate::contact::ContactStatus;
use crate::ui::helpers::{button_row, inset, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_DANGER, COLOR_GOLD, COLOR_MUTED, COLOR_SUCCESS,
};
use crate::view_state::AppViewState;
use crate::widgets::TextFieldWidget;

pub const INTRO: &str =
    "Ready to elevate your team's capabilities? Contact Luxxor Media to schedule a consultation.";

/// (icon, detail)
pub const DETAILS: [(&str, &str); 3] = [
    ("☎", "+263 772 391 374"),
    ("✉", "rukunim@gmail.com"),
    ("⌖", "Harare, Zimbabwe"),
];

const FIELD_HEIGHT: u16 = 3;
const MESSAGE_HEIGHT: u16 = 5;
/// name row + email + message + button + status, with gaps
const FORM_HEIGHT: u16 = FIELD_HEIGHT * 2 + MESSAGE_HEIGHT + 4;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let content = inset(area, 2);

    if view.layout.should_stack() {
        let mut rows = RowCursor::new(content);
        rows.skip(1);
        let details = rows.take(details_height(true));
        render_details(frame, details, true);
        rows.skip(1);
        render_form(frame, rows.rest(), view, registry);
        return;
    }

    let [left, right] = Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)])
        .spacing(4)
        .areas(content);
    let mut left_rows = RowCursor::new(left);
    left_rows.skip(1);
    render_details(frame, left_rows.rest(), false);

    let mut right_rows = RowCursor::new(right);
    right_rows.skip(1);
    render_form(frame, right_rows.rest(), view, registry);
}

fn details_height(compact: bool) -> u16 {
    if compact {
        // heading + one line of details
        2
    } else {
        // heading, gap, 3 intro rows, gap, one row per detail with gaps
        6 + DETAILS.len() as u16 * 2
    }
}

fn render_details(frame: &mut Frame, area: Rect, compact: bool) {
    let heading = Line::styled(
        "Get in Touch",
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
    );

    if compact {
        let mut spans = Vec::new();
        for (i, (icon, detail)) in DETAILS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled("  ", Style::default()));
            }
            spans.push(Span::styled(format!("{} ", icon), Style::default().fg(COLOR_GOLD)));
            spans.push(Span::styled(*detail, Style::default().fg(COLOR_MUTED)));
        }
        frame.render_widget(Paragraph::new(vec![heading, Line::from(spans)]), area);
        return;
    }

    let mut lines = vec![
        heading,
        Line::default(),
        Line::styled(INTRO, Style::default().fg(COLOR_MUTED)),
        Line::default(),
    ];
    for (icon, detail) in DETAILS {
        lines.push(Line::from(vec![
            Span::styled(format!(" {}  ", icon), Style::default().fg(COLOR_GOLD)),
            Span::styled(detail, Style::default().fg(COLOR_MUTED)),
        ]));
        lines.push(Line::default());
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), area);
}

fn render_form(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let panel = Rect {
        height: area.height.min(FORM_HEIGHT + 2),
        ..area
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let mut rows = RowCursor::new(inset(inner, 1));

    let name_row = rows.take(FIELD_HEIGHT);
    let [name, surname] =
        Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(2)
            .areas(name_row);
    render_field(frame, name, FormField::ContactName, view, registry);
    render_field(frame, surname, FormField::ContactSurname, view, registry);

    render_field(frame, rows.take(FIELD_HEIGHT), FormField::ContactEmail, view, registry);
    render_field(frame, rows.take(MESSAGE_HEIGHT), FormField::ContactMessage, view, registry);
    rows.skip(1);

    let label = if view.contact.is_sending() {
        "Sending..."
    } else {
        "Send Message"
    };
    button_row(
        frame,
        rows.take(1),
        vec![Button::new(label, ButtonKind::Primary, ClickAction::SubmitContact)],
        Alignment::Center,
        view,
        registry,
    );
    rows.skip(1);

    if let Some(status) = status_line(&view.contact.status) {
        frame.render_widget(
            Paragraph::new(status).alignment(Alignment::Center),
            rows.take(1),
        );
    }
}

fn render_field(
    frame: &mut Frame,
    area: Rect,
    field: FormField,
    view: &AppViewState,
    registry: &mut HitAreaRegistry,
) {
    if area.is_empty() {
        return;
    }
    let Some(input) = view.contact.field(field) else {
        return;
    };
    let action = ClickAction::FocusField(field);
    let widget = TextFieldWidget::new(input, field.label())
        .focused(view.is_focused(&action))
        .multiline(field.is_multiline());
    frame.render_widget(widget, area);
    registry.register(area, action);
}

/// The line under the submit button, if anything should be shown.
pub fn status_line(status: &ContactStatus) -> Option<Line<'static>> {
    match status {
        ContactStatus::Idle => None,
        ContactStatus::Sending => Some(Line::styled(
            "Sending your message...",
            Style::default().fg(COLOR_MUTED),
        )),
        ContactStatus::Sent => Some(Line::styled(
            "✓ Thank you! We will be in touch shortly.",
            Style::default().fg(COLOR_SUCCESS),
        )),
        ContactStatus::Failed(message) => Some(Line::styled(
            format!("✗ {}", message),
            Style::default().fg(COLOR_DANGER),
        )),
    }
}
