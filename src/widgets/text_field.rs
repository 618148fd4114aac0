use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

use unicode_width::UnicodeWidthChar;

use crate::ui::{COLOR_ACCENT, COLOR_BORDER, COLOR_GOLD, COLOR_INPUT_BG};

/// A form input with cursor handling.
///
/// Features:
/// - Basic text editing (insert, delete, backspace)
/// - Cursor movement (left/right/home/end), counted in chars
/// - Horizontal scrolling for single-line fields, measured in display columns
/// - Optional masking for password fields
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextField {
    /// The text content of the field
    content: String,
    /// Current cursor position (character index)
    cursor_position: usize,
}

impl TextField {
    /// Create a new empty field
    pub fn new() -> Self {
        Self::default()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.content.len())
    }

    /// Insert a character at the current cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor_position);
        self.content.insert(at, c);
        self.cursor_position += 1;
    }

    /// Delete the character before the cursor (like Backspace key)
    pub fn backspace(&mut self) {
        if self.cursor_position > 0 {
            self.cursor_position -= 1;
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    /// Delete the character at the cursor (like Delete key)
    pub fn delete_char(&mut self) {
        if self.cursor_position < self.len() {
            let at = self.byte_index(self.cursor_position);
            self.content.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_position < self.len() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_position = self.len();
    }

    /// Get the current text content
    pub fn value(&self) -> &str {
        &self.content
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// Set the text content and move the cursor to the end
    pub fn set_value(&mut self, content: impl Into<String>) {
        self.content = content.into();
        self.cursor_position = self.len();
    }

    pub fn clear(&mut self) {
        self.content.clear();
        self.cursor_position = 0;
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Length in characters
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    /// Text as it should appear on screen.
    pub fn display_text(&self, masked: bool) -> String {
        if masked {
            "•".repeat(self.len())
        } else {
            self.content.clone()
        }
    }
}

/// A renderable wrapper for [`TextField`].
pub struct TextFieldWidget<'a> {
    field: &'a TextField,
    label: &'a str,
    focused: bool,
    masked: bool,
    multiline: bool,
}

impl<'a> TextFieldWidget<'a> {
    pub fn new(field: &'a TextField, label: &'a str) -> Self {
        Self {
            field,
            label,
            focused: false,
            masked: false,
            multiline: false,
        }
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn masked(mut self, masked: bool) -> Self {
        self.masked = masked;
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }
}

impl Widget for TextFieldWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border_color = if self.focused { COLOR_GOLD } else { COLOR_BORDER };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(COLOR_INPUT_BG))
            .title(Span::styled(
                format!(" {} ", self.label),
                Style::default().fg(COLOR_GOLD).add_modifier(Modifier::BOLD),
            ));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let text = self.field.display_text(self.masked);
        let text_style = Style::default().fg(COLOR_ACCENT);
        let cursor_style = Style::default().fg(COLOR_INPUT_BG).bg(COLOR_GOLD);

        if self.multiline {
            let mut spans = vec![Span::styled(text, text_style)];
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            Paragraph::new(Line::from(spans))
                .wrap(Wrap { trim: false })
                .render(inner, buf);
            return;
        }

        let width = inner.width as usize;
        let cursor = self.field.cursor_position();
        let (visible, cursor_x) = visible_window(&text, cursor, width);
        buf.set_stringn(inner.x, inner.y, &visible, width, text_style);

        if self.focused && cursor_x < width {
            let under = text.chars().nth(cursor).unwrap_or(' ');
            buf.set_stringn(
                inner.x + cursor_x as u16,
                inner.y,
                under.to_string(),
                width - cursor_x,
                cursor_style,
            );
        }
    }
}

/// The slice of `text` shown in a `width`-column field, scrolled just far
/// enough that the cursor cell fits, plus the cursor's column in it.
///
/// Both are measured in display columns, so wide glyphs take two cells.
fn visible_window(text: &str, cursor: usize, width: usize) -> (String, usize) {
    let widths: Vec<usize> = text
        .chars()
        .map(|c| UnicodeWidthChar::width(c).unwrap_or(0))
        .collect();
    let cursor = cursor.min(widths.len());
    let cursor_cell = widths.get(cursor).copied().unwrap_or(1).max(1);

    let mut start = cursor;
    let mut used = cursor_cell;
    while start > 0 && used + widths[start - 1] <= width {
        start -= 1;
        used += widths[start];
    }

    let mut visible = String::new();
    let mut columns = 0;
    for (c, w) in text.chars().zip(&widths).skip(start) {
        if columns + w > width {
            break;
        }
        visible.push(c);
        columns += w;
    }

    let cursor_x = widths[start..cursor].iter().sum();
    (visible, cursor_x)
}
