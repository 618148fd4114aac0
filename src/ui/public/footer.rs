//! Public footer.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::ui::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_GOLD, COLOR_MUTED};

pub const HEIGHT: u16 = 4;

pub const TAGLINE: &str = "Strategic Consulting • Corporate Training • Digital Systems";
pub const COPYRIGHT: &str = "© 2025 Luxxor Media. All rights reserved. Harare, Zimbabwe.";

pub fn render(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(COLOR_BORDER));

    let lines = vec![
        Line::from(vec![
            Span::styled("LUXXOR", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled("MEDIA", Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD)),
        ]),
        Line::styled(TAGLINE, Style::default().fg(COLOR_MUTED)),
        Line::styled(COPYRIGHT, Style::default().fg(COLOR_DIM)),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(block).alignment(Alignment::Center),
        area,
    );
}
