// ui/widgets/editor_pane.rs - Text area widget

use ratatui::{buffer::Buffer, layout::Rect, style::Style, text::Line, widgets::Widget};

use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::viewport::visible_slice;

/// Editor pane widget that renders the visible slice of the buffer
pub struct EditorPane<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> EditorPane<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for EditorPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = Style::default()
            .bg(self.theme.general.background)
            .fg(self.theme.general.foreground);
        // Clear the whole pane so shorter lines leave no artifacts
        buf.set_style(area, style);
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                buf.get_mut(x, y).set_char(' ');
            }
        }

        let viewport = &self.editor.viewport;
        for i in 0..area.height as usize {
            let Some(line) = self.editor.buffer.line(viewport.offset_line + i) else {
                break;
            };
            let visible = visible_slice(
                &line,
                viewport.offset_col,
                area.width as usize,
                self.editor.tab_width,
            );
            buf.set_line(
                area.x,
                area.y + i as u16,
                &Line::styled(visible, style),
                area.width,
            );
        }
    }
}
