// ui/widgets/status_bar.rs - Status bar widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;

/// Single-line status bar showing the editor's status message
pub struct StatusBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> StatusBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        // Multi-line messages (error text, paths) are shown on one row
        let status = format!(" {}", self.editor.status.replace('\n', " "));

        // Pad the status text to fill the entire width
        let len = status.chars().count();
        let padded_status = if len < area.width as usize {
            format!("{}{}", status, " ".repeat(area.width as usize - len))
        } else {
            status
        };

        let line_widget = Line::from(padded_status).style(
            Style::default()
                .bg(self.theme.ui.status_bar_bg)
                .fg(self.theme.ui.status_bar_fg),
        );

        buf.set_line(area.x, area.y, &line_widget, area.width);
    }
}
