// src/ui/widgets/menu.rs - Menu bar and File drop-down

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::editor::Editor;
use crate::menu::{FileMenu, MenuItem};
use crate::ui::theme::Theme;

/// Top row: the "File" entry followed by the window title
pub struct MenuBar<'a> {
    pub editor: &'a Editor,
    pub theme: &'a Theme,
}

impl<'a> MenuBar<'a> {
    pub fn new(editor: &'a Editor, theme: &'a Theme) -> Self {
        Self { editor, theme }
    }
}

impl Widget for MenuBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bar_style = Style::default()
            .bg(self.theme.ui.menu_bar_bg)
            .fg(self.theme.ui.menu_bar_fg);
        let file_style = if self.editor.menu.open {
            Style::default()
                .bg(self.theme.ui.menu_selected_bg)
                .fg(self.theme.ui.menu_selected_fg)
        } else {
            bar_style
        };

        buf.set_style(area, bar_style);
        let line = Line::from(vec![
            Span::styled(format!(" {} ", FileMenu::TITLE), file_style),
            Span::styled(format!("   {}", self.editor.title), bar_style),
            Span::styled("   F10: menu", bar_style.fg(self.theme.ui.dim)),
        ]);
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

/// Drop-down listing the File menu items with their shortcuts
pub struct FileMenuDropdown<'a> {
    pub menu: &'a FileMenu,
    pub theme: &'a Theme,
}

impl<'a> FileMenuDropdown<'a> {
    pub fn new(menu: &'a FileMenu, theme: &'a Theme) -> Self {
        Self { menu, theme }
    }

    /// Anchored under the "File" entry of the menu bar
    pub fn calculate_position(&self, area: Rect) -> Rect {
        let width = Self::inner_width() + 2;
        let height = MenuItem::ALL.len() as u16 + 2;
        Rect {
            x: area.x,
            y: area.y + 1,
            width: width.min(area.width),
            height: height.min(area.height.saturating_sub(1)),
        }
    }

    fn inner_width() -> u16 {
        MenuItem::ALL
            .iter()
            .map(|item| item.label().len() + item.shortcut().len() + 4)
            .max()
            .unwrap_or(20) as u16
    }
}

impl Widget for FileMenuDropdown<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let inner = Self::inner_width() as usize;
        let lines: Vec<Line> = MenuItem::ALL
            .iter()
            .enumerate()
            .map(|(i, item)| {
                if *item == MenuItem::Separator {
                    return Line::from(Span::styled(
                        "─".repeat(inner),
                        Style::default().fg(self.theme.ui.border),
                    ));
                }
                let style = if i == self.menu.selected_index {
                    Style::default()
                        .bg(self.theme.ui.menu_selected_bg)
                        .fg(self.theme.ui.menu_selected_fg)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(self.theme.general.foreground)
                };
                let gap = inner.saturating_sub(item.label().len() + item.shortcut().len() + 2);
                Line::from(Span::styled(
                    format!(" {}{}{} ", item.label(), " ".repeat(gap), item.shortcut()),
                    style,
                ))
            })
            .collect();

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.ui.border))
            .style(Style::default().bg(self.theme.ui.menu_bar_bg));

        Paragraph::new(lines).block(block).render(area, buf);
    }
}
