// src/ui/widgets/file_dialog.rs - File chooser window

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

use crate::dialog::{FileDialog, Focus};
use crate::ui::theme::Theme;
use crate::ui::widgets::centered_rect;

pub struct FileDialogWindow<'a> {
    pub dialog: &'a FileDialog,
    pub theme: &'a Theme,
}

impl<'a> FileDialogWindow<'a> {
    pub fn new(dialog: &'a FileDialog, theme: &'a Theme) -> Self {
        Self { dialog, theme }
    }

    pub fn calculate_position(&self, area: Rect) -> Rect {
        centered_rect(
            70.min(area.width.saturating_sub(4)),
            22.min(area.height.saturating_sub(2)),
            area,
        )
    }

    fn entry_lines(&self, height: usize) -> Vec<Line<'static>> {
        // Keep the selection inside the visible window
        let first = self.dialog.selected.saturating_sub(height.saturating_sub(1));
        self.dialog
            .entries
            .iter()
            .enumerate()
            .skip(first)
            .take(height)
            .map(|(i, entry)| {
                let name = if entry.is_dir {
                    format!("{}/", entry.name)
                } else {
                    entry.name.clone()
                };
                let mut style = if entry.is_dir {
                    Style::default().fg(self.theme.ui.directory)
                } else {
                    Style::default().fg(self.theme.general.foreground)
                };
                if i == self.dialog.selected {
                    style = style
                        .bg(self.theme.ui.menu_selected_bg)
                        .fg(self.theme.ui.menu_selected_fg);
                    if self.dialog.focus == Focus::List {
                        style = style.add_modifier(Modifier::BOLD);
                    }
                }
                Line::from(Span::styled(format!(" {}", name), style))
            })
            .collect()
    }

    fn footer_line(&self) -> Line<'static> {
        let dim = Style::default().fg(self.theme.ui.dim);
        if let Some(path) = &self.dialog.pending_overwrite {
            return Line::from(Span::styled(
                format!("{} already exists. Replace it? (y/n)", path.display()),
                Style::default().fg(self.theme.ui.error),
            ));
        }
        if let Some(notice) = &self.dialog.notice {
            return Line::from(Span::styled(
                notice.clone(),
                Style::default().fg(self.theme.ui.error),
            ));
        }
        Line::from(Span::styled(
            "Enter: accept  Esc: cancel  Ctrl+T/F2: file type",
            dim,
        ))
    }
}

impl Widget for FileDialogWindow<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(self.theme.ui.border))
            .title(format!(" {} ", self.dialog.title()))
            .title_style(Style::default().add_modifier(Modifier::BOLD))
            .style(
                Style::default()
                    .bg(self.theme.general.background)
                    .fg(self.theme.general.foreground),
            );
        let inner = block.inner(area);
        block.render(area, buf);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Directory
                Constraint::Min(1),    // Entries
                Constraint::Length(1), // File name
                Constraint::Length(1), // Filter
                Constraint::Length(1), // Footer
            ])
            .split(inner);

        let dim = Style::default().fg(self.theme.ui.dim);
        Paragraph::new(Line::from(vec![
            Span::styled("Look in: ", dim),
            Span::raw(self.dialog.dir.display().to_string()),
        ]))
        .render(chunks[0], buf);

        let list_block = Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(self.theme.ui.border));
        let list_area = list_block.inner(chunks[1]);
        list_block.render(chunks[1], buf);
        Paragraph::new(self.entry_lines(list_area.height as usize)).render(list_area, buf);

        let name_style = if self.dialog.focus == Focus::Name {
            Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().add_modifier(Modifier::UNDERLINED)
        };
        Paragraph::new(Line::from(vec![
            Span::styled("File name: ", dim),
            Span::styled(format!("{}_", self.dialog.file_name), name_style),
        ]))
        .render(chunks[2], buf);

        Paragraph::new(Line::from(vec![
            Span::styled("Files of type: ", dim),
            Span::raw(self.dialog.filter.label()),
        ]))
        .render(chunks[3], buf);

        Paragraph::new(self.footer_line()).render(chunks[4], buf);
    }
}
