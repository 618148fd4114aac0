//! Login page. Any credentials are accepted.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{LoginForm, NavEvent};
use crate::ui::helpers::{button_row, centered_rect, inset, Button, ButtonKind, RowCursor};
use crate::ui::interaction::{ClickAction, HitAreaRegistry};
use crate::ui::theme::{COLOR_ACCENT, COLOR_GOLD, COLOR_MUTED};
use crate::view_state::AppViewState;
use crate::widgets::TextFieldWidget;

const PANEL_WIDTH: u16 = 52;
const PANEL_HEIGHT: u16 = 16;

pub fn render(frame: &mut Frame, area: Rect, view: &AppViewState, registry: &mut HitAreaRegistry) {
    let panel = centered_rect(area, PANEL_WIDTH, PANEL_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_GOLD));
    let inner = inset(block.inner(panel), 2);
    frame.render_widget(block, panel);

    let mut rows = RowCursor::new(inner);
    frame.render_widget(
        Paragraph::new(vec![
            Line::styled(
                "Welcome Back",
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Line::styled(
                "Sign in to your learner dashboard",
                Style::default().fg(COLOR_MUTED),
            ),
        ])
        .alignment(Alignment::Center),
        rows.take(2),
    );
    rows.skip(1);

    for field in LoginForm::FIELDS {
        let area = rows.take(3);
        let Some(input) = view.login.field(field) else {
            continue;
        };
        if area.is_empty() {
            continue;
        }
        let action = ClickAction::FocusField(field);
        frame.render_widget(
            TextFieldWidget::new(input, field.label())
                .focused(view.is_focused(&action))
                .masked(field.is_masked()),
            area,
        );
        registry.register(area, action);
    }
    rows.skip(1);

    button_row(
        frame,
        rows.take(1),
        vec![Button::new(
            "Secure Login",
            ButtonKind::Primary,
            ClickAction::Navigate(NavEvent::Login),
        )],
        Alignment::Center,
        view,
        registry,
    );
    rows.skip(1);

    button_row(
        frame,
        rows.take(1),
        vec![Button::inert("Forgot credentials?", ButtonKind::Link)],
        Alignment::Center,
        view,
        registry,
    );
}

