// src/dialog.rs - Modal dialogs: file chooser and message box

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::fs;
use std::path::{Path, PathBuf};

/// Wildcard choices offered by the file dialogs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileFilter {
    Text,
    All,
}

impl FileFilter {
    pub fn label(&self) -> &'static str {
        match self {
            FileFilter::Text => "Text files (*.txt;*.py)",
            FileFilter::All => "All files (*.*)",
        }
    }

    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            FileFilter::Text => &["txt", "py"],
            FileFilter::All => &[],
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        match self {
            FileFilter::All => true,
            FileFilter::Text => path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(|ext| {
                    self.extensions()
                        .iter()
                        .any(|wanted| ext.eq_ignore_ascii_case(wanted))
                })
                .unwrap_or(false),
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FileFilter::Text => FileFilter::All,
            FileFilter::All => FileFilter::Text,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FileDialogKind {
    /// Chosen file must already exist.
    Open,
    /// Existing targets need a confirmation before they are replaced.
    Save,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DirEntryInfo {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Focus {
    List,
    Name,
}

#[derive(Debug, PartialEq)]
pub enum DialogOutcome {
    Pending,
    Cancelled,
    Accepted(PathBuf),
}

#[derive(Debug)]
pub struct FileDialog {
    pub kind: FileDialogKind,
    pub dir: PathBuf,
    pub filter: FileFilter,
    pub entries: Vec<DirEntryInfo>,
    pub selected: usize,
    pub file_name: String,
    pub focus: Focus,
    pub notice: Option<String>,
    pub pending_overwrite: Option<PathBuf>,
}

impl FileDialog {
    pub fn new(kind: FileDialogKind, dir: PathBuf) -> Self {
        let mut dialog = Self {
            kind,
            dir,
            filter: FileFilter::Text,
            entries: Vec::new(),
            selected: 0,
            file_name: String::new(),
            focus: Focus::List,
            notice: None,
            pending_overwrite: None,
        };
        dialog.refresh();
        dialog
    }

    pub fn title(&self) -> &'static str {
        match self.kind {
            FileDialogKind::Open => "Open file",
            FileDialogKind::Save => "Save file as",
        }
    }

    /// Re-reads the current directory: `..` first, then directories, then
    /// files accepted by the active filter, each group sorted by name.
    pub fn refresh(&mut self) {
        self.entries.clear();
        self.selected = 0;

        if let Some(parent) = self.dir.parent() {
            self.entries.push(DirEntryInfo {
                name: "..".to_string(),
                path: parent.to_path_buf(),
                is_dir: true,
            });
        }

        let read = match fs::read_dir(&self.dir) {
            Ok(read) => read,
            Err(e) => {
                log::warn!("Cannot list {}: {}", self.dir.display(), e);
                self.notice = Some(format!("Cannot list directory: {}", e));
                return;
            }
        };

        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in read.flatten() {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();
            // Follow symlinks so linked directories can be entered
            let is_dir = fs::metadata(&path).map(|m| m.is_dir()).unwrap_or(false);
            if is_dir {
                dirs.push(DirEntryInfo { name, path, is_dir });
            } else if self.filter.matches(&path) {
                files.push(DirEntryInfo { name, path, is_dir });
            }
        }
        dirs.sort_by(|a, b| a.name.cmp(&b.name));
        files.sort_by(|a, b| a.name.cmp(&b.name));
        self.entries.extend(dirs);
        self.entries.extend(files);
    }

    pub fn selected_entry(&self) -> Option<&DirEntryInfo> {
        self.entries.get(self.selected)
    }

    pub fn select_next(&mut self) {
        if !self.entries.is_empty() {
            self.selected = (self.selected + 1).min(self.entries.len() - 1);
        }
        self.on_selection_changed();
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
        self.on_selection_changed();
    }

    fn on_selection_changed(&mut self) {
        self.focus = Focus::List;
        if let Some(entry) = self.selected_entry() {
            if !entry.is_dir {
                self.file_name = entry.name.clone();
            }
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.refresh();
    }

    pub fn navigate_to(&mut self, dir: PathBuf) {
        self.dir = dir;
        self.notice = None;
        self.refresh();
    }

    /// Resolves the typed name against the dialog directory.
    pub fn typed_path(&self) -> Option<PathBuf> {
        let name = self.file_name.trim();
        if name.is_empty() {
            return None;
        }
        let path = Path::new(name);
        if path.is_absolute() {
            Some(path.to_path_buf())
        } else {
            Some(self.dir.join(path))
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> DialogOutcome {
        if let Some(path) = self.pending_overwrite.take() {
            return match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => DialogOutcome::Accepted(path),
                _ => DialogOutcome::Pending,
            };
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => return DialogOutcome::Cancelled,
            KeyCode::Enter => return self.accept(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Down => self.select_next(),
            KeyCode::F(2) => self.cycle_filter(),
            KeyCode::Char('t') if ctrl => self.cycle_filter(),
            KeyCode::Backspace => {
                self.file_name.pop();
                self.focus = Focus::Name;
            }
            KeyCode::Char(c) if !ctrl => {
                self.file_name.push(c);
                self.focus = Focus::Name;
                self.notice = None;
            }
            _ => {}
        }
        DialogOutcome::Pending
    }

    pub fn accept(&mut self) -> DialogOutcome {
        let target = match self.focus {
            Focus::Name => self.typed_path(),
            Focus::List => self
                .selected_entry()
                .map(|e| e.path.clone())
                .or_else(|| self.typed_path()),
        };
        let Some(path) = target else {
            return DialogOutcome::Pending;
        };

        if path.is_dir() {
            if self.focus == Focus::Name {
                self.file_name.clear();
            }
            self.navigate_to(path);
            return DialogOutcome::Pending;
        }

        match self.kind {
            FileDialogKind::Open => {
                if path.is_file() {
                    DialogOutcome::Accepted(path)
                } else {
                    self.notice = Some(format!("File not found: {}", path.display()));
                    DialogOutcome::Pending
                }
            }
            FileDialogKind::Save => {
                if path.exists() {
                    self.pending_overwrite = Some(path);
                    DialogOutcome::Pending
                } else {
                    DialogOutcome::Accepted(path)
                }
            }
        }
    }
}

/// Blocking message, dismissed with Enter, Esc or Space.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageBox {
    pub title: String,
    pub message: String,
}

impl MessageBox {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
        }
    }

    /// Returns true when the key dismisses the box.
    pub fn handle_key(&self, key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' '))
    }
}

#[derive(Debug)]
pub enum Dialog {
    File(FileDialog),
    Message(MessageBox),
}
