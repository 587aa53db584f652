// src/editor.rs - Window controller: session state and event handlers

use crate::buffer::Buffer;
use crate::command::Command;
use crate::config::VimiConfig;
use crate::dialog::{Dialog, DialogOutcome, FileDialog, FileDialogKind, MessageBox};
use crate::keymap::key_to_command;
use crate::menu::FileMenu;
use crate::quotes;
use crate::viewport::{Viewport, screen_col};
use crossterm::event::{KeyCode, KeyEvent};
use std::borrow::Cow;
use std::path::{Path, PathBuf};

pub const UNTITLED: &str = "untitled";
pub const NEW_FILE_STATUS: &str = "New file";

pub struct Editor {
    pub buffer: Buffer,
    /// File the buffer is associated with. Set by a successful Open or
    /// Save As and never cleared.
    pub current_file: Option<PathBuf>,
    pub title: String,
    pub status: String,
    pub menu: FileMenu,
    pub dialog: Option<Dialog>,
    pub viewport: Viewport,
    pub tab_width: usize,
    title_prefix: String,
    should_close: bool,
    in_text_change: bool,
}

impl Default for Editor {
    fn default() -> Self {
        Self::new()
    }
}

impl Editor {
    pub fn new() -> Self {
        Self::with_config(&VimiConfig::default())
    }

    pub fn with_config(config: &VimiConfig) -> Self {
        Self {
            buffer: Buffer::new(),
            current_file: None,
            title: config.title.clone(),
            status: NEW_FILE_STATUS.to_string(),
            menu: FileMenu::new(),
            dialog: None,
            viewport: Viewport::new(20, 80),
            tab_width: config.tab_width,
            title_prefix: config.title.clone(),
            should_close: false,
            in_text_change: false,
        }
    }

    pub fn should_close(&self) -> bool {
        self.should_close
    }

    /// Routes a key press: an open dialog takes everything, then the menu,
    /// then the text area. Returns true once the window should close.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let Some(dialog) = self.dialog.take() {
            self.handle_dialog_key(dialog, key);
        } else if self.menu.open {
            self.handle_menu_key(key);
        } else if self.on_key_down(key) {
            self.on_key_up();
        }
        self.scroll_to_caret();
        self.should_close
    }

    fn handle_dialog_key(&mut self, dialog: Dialog, key: KeyEvent) {
        match dialog {
            Dialog::Message(message) => {
                if !message.handle_key(key) {
                    self.dialog = Some(Dialog::Message(message));
                }
            }
            Dialog::File(mut file_dialog) => match file_dialog.handle_key(key) {
                DialogOutcome::Pending => self.dialog = Some(Dialog::File(file_dialog)),
                DialogOutcome::Cancelled => {}
                DialogOutcome::Accepted(path) => match file_dialog.kind {
                    FileDialogKind::Open => self.open_path(&path),
                    FileDialogKind::Save => self.save_to_path(&path),
                },
            },
        }
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::F(10) => self.menu.hide(),
            KeyCode::Up => self.menu.select_prev(),
            KeyCode::Down => self.menu.select_next(),
            KeyCode::Enter => {
                let item = self.menu.selected_item();
                self.menu.hide();
                if let Some(cmd) = item.command() {
                    self.execute_command(cmd);
                }
            }
            _ => {
                // Accelerators still work while the menu is dropped down
                if let Some(cmd) = key_to_command(key).filter(|cmd| !cmd.is_text_area()) {
                    self.menu.hide();
                    self.execute_command(cmd);
                }
            }
        }
    }

    /// Key-down handler. Tab inserts a literal tab instead of moving focus,
    /// whatever the modifiers (Shift+Tab arrives as BackTab). Everything
    /// else gets the text area's default processing. Returns true when the
    /// key was handled by the text area.
    pub fn on_key_down(&mut self, key: KeyEvent) -> bool {
        if matches!(key.code, KeyCode::Tab | KeyCode::BackTab) {
            self.write_text("\t");
            return true;
        }

        match key_to_command(key) {
            Some(cmd) => {
                let text_area = cmd.is_text_area();
                self.execute_command(cmd);
                text_area
            }
            None => false,
        }
    }

    /// Key-up handler: shows the caret's 1-based line and column. An
    /// unmappable caret leaves the status bar as it is.
    pub fn on_key_up(&mut self) {
        let Some((col, row)) = self.buffer.position_to_xy(self.buffer.insertion_point()) else {
            return;
        };
        let status = format!(
            "{} — Line: {}, Col: {}",
            self.file_label(),
            row + 1,
            col + 1
        );
        self.update_status(status);
    }

    pub fn execute_command(&mut self, cmd: Command) {
        match cmd {
            Command::Open => self.on_open(),
            Command::Save => self.on_save(),
            Command::SaveAs => self.on_save_as(),
            Command::Exit => self.on_exit(),
            Command::OpenMenu => self.menu.show(),
            Command::InsertChar(c) => {
                let mut tmp = [0u8; 4];
                self.write_text(c.encode_utf8(&mut tmp));
            }
            Command::DeleteBackward => {
                if self.buffer.delete_backward() {
                    self.on_text_change();
                }
            }
            Command::DeleteForward => {
                if self.buffer.delete_forward() {
                    self.on_text_change();
                }
            }
            Command::MoveLeft => self.buffer.move_left(),
            Command::MoveRight => self.buffer.move_right(),
            Command::MoveUp => self.buffer.move_up(1),
            Command::MoveDown => self.buffer.move_down(1),
            Command::MoveLineStart => self.buffer.move_line_start(),
            Command::MoveLineEnd => self.buffer.move_line_end(),
            Command::MoveBufferStart => self.buffer.set_insertion_point(0),
            Command::MoveBufferEnd => self.buffer.set_insertion_point(self.buffer.len_chars()),
            Command::PageUp => self.buffer.move_up(self.viewport.rows.max(1)),
            Command::PageDown => self.buffer.move_down(self.viewport.rows.max(1)),
        }
    }

    /// Inserts at the caret and fires the text-changed notification.
    pub fn write_text(&mut self, text: &str) {
        self.buffer.write_text(text);
        self.on_text_change();
    }

    /// Replaces the whole buffer and fires the text-changed notification.
    pub fn set_value(&mut self, text: &str) {
        self.buffer.set_value(text);
        self.buffer.set_insertion_point(0);
        self.on_text_change();
    }

    /// Replaces the whole buffer without any notification.
    pub fn change_value(&mut self, text: &str) {
        self.buffer.set_value(text);
    }

    /// Text-changed handler: straightens typographic quotes. The corrected
    /// text goes back through `change_value`, so this never re-enters
    /// itself; the flag covers any nested notification regardless.
    pub fn on_text_change(&mut self) {
        if self.in_text_change {
            return;
        }
        self.in_text_change = true;

        let content = self.buffer.value();
        if let Cow::Owned(fixed) = quotes::straighten(&content) {
            let pos = self.buffer.insertion_point();
            self.change_value(&fixed);
            self.buffer
                .set_insertion_point(pos.min(self.buffer.len_chars()));
            log::debug!("Straightened typographic quotes");
        }

        self.in_text_change = false;
    }

    pub fn on_open(&mut self) {
        self.menu.hide();
        self.dialog = Some(Dialog::File(FileDialog::new(
            FileDialogKind::Open,
            self.dialog_dir(),
        )));
    }

    pub fn on_save(&mut self) {
        self.menu.hide();
        let Some(path) = self.current_file.clone() else {
            self.on_save_as();
            return;
        };
        match self.buffer.save_to_file(&path) {
            Ok(()) => {
                log::info!("Saved {}", path.display());
                self.update_status(format!("Saved: {}", path.display()));
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.show_error(format!("Could not save the file:\n{}", e));
            }
        }
    }

    pub fn on_save_as(&mut self) {
        self.menu.hide();
        self.dialog = Some(Dialog::File(FileDialog::new(
            FileDialogKind::Save,
            self.dialog_dir(),
        )));
    }

    pub fn on_exit(&mut self) {
        self.menu.hide();
        self.should_close = true;
    }

    /// Second half of Open, once the dialog has produced a path.
    pub fn open_path(&mut self, path: &Path) {
        match Buffer::load_from_file(path) {
            Ok(text) => {
                self.set_value(&text);
                self.associate(path);
                log::info!("Opened {}", path.display());
            }
            Err(e) => {
                log::warn!("Open failed: {}", e);
                self.show_error(format!("Could not open the file:\n{}", e));
            }
        }
    }

    /// Second half of Save As, once the dialog has produced a path.
    pub fn save_to_path(&mut self, path: &Path) {
        match self.buffer.save_to_file(path) {
            Ok(()) => {
                self.associate(path);
                log::info!("Saved {}", path.display());
            }
            Err(e) => {
                log::warn!("Save failed: {}", e);
                self.show_error(format!("Could not save the file:\n{}", e));
            }
        }
    }

    fn associate(&mut self, path: &Path) {
        self.current_file = Some(path.to_path_buf());
        self.title = format!("{} — {}", self.title_prefix, base_name(path));
        self.update_status(path.display().to_string());
    }

    pub fn show_error(&mut self, message: String) {
        self.dialog = Some(Dialog::Message(MessageBox::error(message)));
    }

    pub fn update_status(&mut self, message: impl Into<String>) {
        self.status = message.into();
    }

    /// Base name of the current file, or "untitled".
    pub fn file_label(&self) -> String {
        self.current_file
            .as_deref()
            .map(base_name)
            .unwrap_or_else(|| UNTITLED.to_string())
    }

    /// Dialogs start next to the current file, else in the working directory.
    fn dialog_dir(&self) -> PathBuf {
        self.current_file
            .as_deref()
            .and_then(Path::parent)
            .filter(|dir| !dir.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn handle_resize(&mut self, cols: u16, rows: u16) {
        // Menu bar and status bar take one row each
        self.viewport.rows = (rows as usize).saturating_sub(2).max(1);
        self.viewport.cols = (cols as usize).max(1);
        self.scroll_to_caret();
    }

    /// Caret as (screen column, line) with tabs expanded.
    pub fn caret_screen_position(&self) -> Option<(usize, usize)> {
        let (col, row) = self.buffer.position_to_xy(self.buffer.insertion_point())?;
        let line = self.buffer.line(row).unwrap_or_default();
        Some((screen_col(&line, col, self.tab_width), row))
    }

    pub fn scroll_to_caret(&mut self) {
        if let Some((col, row)) = self.caret_screen_position() {
            self.viewport.scroll_to_cursor(row, col);
        }
    }
}

fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}
