// src/ui/widgets/message_box.rs - Modal message window

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Clear, Padding, Paragraph, Widget},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::dialog::MessageBox;
use crate::ui::theme::Theme;
use crate::ui::widgets::centered_rect;

/// Borders plus one column of padding on each side
const FRAME_WIDTH: u16 = 4;
/// Borders, the blank row and the hint row
const FRAME_HEIGHT: u16 = 4;

pub struct MessageBoxWindow<'a> {
    pub message: &'a MessageBox,
    pub theme: &'a Theme,
}

impl<'a> MessageBoxWindow<'a> {
    pub fn new(message: &'a MessageBox, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    pub fn calculate_position(&self, area: Rect) -> Rect {
        let widest = self
            .message
            .message
            .lines()
            .map(UnicodeWidthStr::width)
            .max()
            .unwrap_or(0) as u16;
        let width = (widest + FRAME_WIDTH).clamp(30, 70).min(area.width);
        let rows = wrap_lines(&self.message.message, width.saturating_sub(FRAME_WIDTH)).len();
        centered_rect(width, rows as u16 + FRAME_HEIGHT, area)
    }
}

/// Breaks every line of `text` so none is wider than `width` columns.
/// Paths rarely contain spaces, so lines break at any char.
fn wrap_lines(text: &str, width: u16) -> Vec<String> {
    let width = (width as usize).max(1);
    let mut rows = Vec::new();
    for line in text.lines() {
        let mut row = String::new();
        let mut row_width = 0;
        for c in line.chars() {
            let w = c.width().unwrap_or(0);
            if row_width + w > width && !row.is_empty() {
                rows.push(std::mem::take(&mut row));
                row_width = 0;
            }
            row.push(c);
            row_width += w;
        }
        rows.push(row);
    }
    rows
}

impl Widget for MessageBoxWindow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        // On a short screen the message is cut, never the hint
        let room = area.height.saturating_sub(FRAME_HEIGHT) as usize;
        let mut lines: Vec<Line> =
            wrap_lines(&self.message.message, area.width.saturating_sub(FRAME_WIDTH))
                .into_iter()
                .take(room)
                .map(Line::from)
                .collect();
        lines.push(Line::from(""));
        lines.push(Line::from("[ OK ]").alignment(Alignment::Center));

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.ui.error))
            .title(format!(" {} ", self.message.title))
            .title_style(
                Style::default()
                    .fg(self.theme.ui.error)
                    .add_modifier(Modifier::BOLD),
            )
            .padding(Padding::horizontal(1))
            .style(
                Style::default()
                    .bg(self.theme.general.background)
                    .fg(self.theme.general.foreground),
            );

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
