// ui/renderer.rs - Ratatui-based renderer for the editor window

use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::Stdout;

use crate::dialog::Dialog;
use crate::editor::Editor;
use crate::ui::theme::Theme;
use crate::ui::widgets::editor_pane::EditorPane;
use crate::ui::widgets::file_dialog::FileDialogWindow;
use crate::ui::widgets::menu::{FileMenuDropdown, MenuBar};
use crate::ui::widgets::message_box::MessageBoxWindow;
use crate::ui::widgets::status_bar::StatusBar;

/// Ratatui-based renderer for the editor window
pub struct TuiRenderer {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    theme: Theme,
    shown_title: Option<String>,
}

impl TuiRenderer {
    pub fn new() -> std::io::Result<Self> {
        let backend = CrosstermBackend::new(std::io::stdout());
        let terminal = Terminal::new(backend)?;
        Ok(Self {
            terminal,
            theme: Theme::default(),
            shown_title: None,
        })
    }

    /// Draw the window, updating the terminal title when it changes
    pub fn draw(&mut self, editor: &mut Editor) -> std::io::Result<()> {
        if self.shown_title.as_deref() != Some(editor.title.as_str()) {
            crossterm::execute!(
                self.terminal.backend_mut(),
                crossterm::terminal::SetTitle(&editor.title)
            )?;
            self.shown_title = Some(editor.title.clone());
        }

        let size = self.terminal.size()?;
        editor.handle_resize(size.width, size.height);

        let theme = &self.theme;
        self.terminal.draw(|f| draw_window(f, editor, theme))?;
        Ok(())
    }
}

/// Lays out one frame: menu bar, text area, status bar, then the open
/// drop-down or dialog. The caret is placed only while the text area has
/// focus.
pub fn draw_window(f: &mut Frame, editor: &Editor, theme: &Theme) {
    let size = f.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Menu bar
            Constraint::Min(1),    // Text area
            Constraint::Length(1), // Status bar
        ])
        .split(size);

    f.render_widget(MenuBar::new(editor, theme), chunks[0]);
    f.render_widget(EditorPane::new(editor, theme), chunks[1]);
    f.render_widget(StatusBar::new(editor, theme), chunks[2]);

    if editor.menu.open {
        let dropdown = FileMenuDropdown::new(&editor.menu, theme);
        let area = dropdown.calculate_position(size);
        f.render_widget(dropdown, area);
    }

    match &editor.dialog {
        Some(Dialog::File(dialog)) => {
            let window = FileDialogWindow::new(dialog, theme);
            let area = window.calculate_position(size);
            f.render_widget(window, area);
        }
        Some(Dialog::Message(message)) => {
            let window = MessageBoxWindow::new(message, theme);
            let area = window.calculate_position(size);
            f.render_widget(window, area);
        }
        None if !editor.menu.open => {
            if let Some((col, row)) = editor.caret_screen_position() {
                let x = col.saturating_sub(editor.viewport.offset_col) as u16;
                let y = row.saturating_sub(editor.viewport.offset_line) as u16;
                let text_area = chunks[1];
                if x < text_area.width && y < text_area.height {
                    f.set_cursor(text_area.x + x, text_area.y + y);
                }
            }
        }
        None => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialog::MessageBox;
    use ratatui::backend::TestBackend;

    fn render(editor: &mut Editor, width: u16, height: u16) -> Terminal<TestBackend> {
        editor.handle_resize(width, height);
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal.draw(|f| draw_window(f, editor, &theme)).unwrap();
        terminal
    }

    #[test]
    fn test_caret_placed_after_tab_and_wide_glyphs() {
        let mut editor = Editor::new();
        editor.write_text("\t日x");
        let mut terminal = render(&mut editor, 20, 6);

        // Below the menu bar; tab to column 4, 日 takes two, then x
        assert_eq!(terminal.get_cursor().unwrap(), (7, 1));
        let screen = terminal.backend().buffer();
        assert_eq!(screen.get(4, 1).symbol(), "日");
        assert_eq!(screen.get(6, 1).symbol(), "x");
    }

    #[test]
    fn test_caret_follows_scrolled_view() {
        let mut editor = Editor::new();
        editor.write_text(&"a\n".repeat(10));
        editor.write_text(&"b".repeat(30));
        let mut terminal = render(&mut editor, 20, 6);

        // Four text rows; the last line is at the bottom, column 30 is
        // the last visible one
        assert_eq!(editor.viewport.offset_line, 7);
        assert_eq!(editor.viewport.offset_col, 11);
        assert_eq!(terminal.get_cursor().unwrap(), (19, 4));
    }

    #[test]
    fn test_dropdown_drawn_under_menu_bar() {
        let mut editor = Editor::new();
        editor.menu.show();
        let terminal = render(&mut editor, 40, 12);

        let screen = terminal.backend().buffer();
        let rows: Vec<String> = (0..12)
            .map(|y| (0..40).map(|x| screen.get(x, y).symbol()).collect())
            .collect();
        assert!(rows[0].starts_with(" File "));
        assert!(rows[1].starts_with("┌"));
        assert!(rows[2].contains("Open") && rows[2].contains("Ctrl+O"));
        assert!(rows[5].contains("─"));
        assert!(rows[6].contains("Exit"));
    }

    #[test]
    fn test_message_box_drawn_with_hint() {
        let mut editor = Editor::new();
        editor.write_text("text");
        editor.dialog = Some(Dialog::Message(MessageBox::error("Could not save the file:\nboom")));
        let terminal = render(&mut editor, 60, 16);

        let screen = terminal.backend().buffer();
        let rows: Vec<String> = (0..16)
            .map(|y| (0..60).map(|x| screen.get(x, y).symbol()).collect())
            .collect();
        assert!(rows.iter().any(|row| row.contains("[ OK ]")));
        assert!(rows.iter().any(|row| row.contains("boom")));
    }
}
