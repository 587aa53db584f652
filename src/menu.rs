// src/menu.rs - File menu model

use crate::command::Command;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MenuItem {
    Open,
    Save,
    SaveAs,
    Separator,
    Exit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 5] = [
        MenuItem::Open,
        MenuItem::Save,
        MenuItem::SaveAs,
        MenuItem::Separator,
        MenuItem::Exit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Open => "Open...",
            MenuItem::Save => "Save",
            MenuItem::SaveAs => "Save As...",
            MenuItem::Separator => "",
            MenuItem::Exit => "Exit",
        }
    }

    pub fn shortcut(&self) -> &'static str {
        match self {
            MenuItem::Open => "Ctrl+O",
            MenuItem::Save => "Ctrl+S",
            MenuItem::SaveAs => "Ctrl+Shift+S",
            MenuItem::Separator => "",
            MenuItem::Exit => "Ctrl+Q",
        }
    }

    pub fn command(&self) -> Option<Command> {
        match self {
            MenuItem::Open => Some(Command::Open),
            MenuItem::Save => Some(Command::Save),
            MenuItem::SaveAs => Some(Command::SaveAs),
            MenuItem::Separator => None,
            MenuItem::Exit => Some(Command::Exit),
        }
    }
}

/// Drop-down state of the "File" menu. Separators are never selectable.
#[derive(Debug, Default)]
pub struct FileMenu {
    pub open: bool,
    pub selected_index: usize,
}

impl FileMenu {
    pub const TITLE: &'static str = "File";

    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self) {
        self.open = true;
        self.selected_index = 0;
    }

    pub fn hide(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        let len = MenuItem::ALL.len();
        loop {
            self.selected_index = (self.selected_index + 1) % len;
            if MenuItem::ALL[self.selected_index] != MenuItem::Separator {
                break;
            }
        }
    }

    pub fn select_prev(&mut self) {
        let len = MenuItem::ALL.len();
        loop {
            self.selected_index = if self.selected_index == 0 {
                len - 1
            } else {
                self.selected_index - 1
            };
            if MenuItem::ALL[self.selected_index] != MenuItem::Separator {
                break;
            }
        }
    }

    pub fn selected_item(&self) -> MenuItem {
        MenuItem::ALL[self.selected_index]
    }
}
