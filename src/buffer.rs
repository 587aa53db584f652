// src/buffer.rs - Text buffer backing the editor's text area

use ropey::Rope;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BufferError {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: file is not valid UTF-8 ({source})")]
    Decode {
        path: PathBuf,
        #[source]
        source: std::string::FromUtf8Error,
    },
}

impl BufferError {
    fn io(path: &Path, source: std::io::Error) -> Self {
        BufferError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Editable text plus the caret, stored as a char offset into the rope.
pub struct Buffer {
    pub rope: Rope,
    caret: usize,
    desired_col: Option<usize>,
}

impl Buffer {
    pub fn new() -> Self {
        Self {
            rope: Rope::new(),
            caret: 0,
            desired_col: None,
        }
    }

    pub fn from_str(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
            caret: 0,
            desired_col: None,
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl Buffer {
    /// Whole content of the buffer.
    pub fn value(&self) -> String {
        self.rope.to_string()
    }

    /// Replaces the whole content. The caret is clamped to the new length.
    pub fn set_value(&mut self, text: &str) {
        self.rope = Rope::from_str(text);
        self.caret = self.caret.min(self.len_chars());
        self.desired_col = None;
    }

    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    pub fn insertion_point(&self) -> usize {
        self.caret
    }

    pub fn set_insertion_point(&mut self, pos: usize) {
        self.caret = pos.min(self.len_chars());
        self.desired_col = None;
    }

    /// Inserts `text` at the caret and moves the caret past it.
    pub fn write_text(&mut self, text: &str) {
        self.rope.insert(self.caret, text);
        self.caret += text.chars().count();
        self.desired_col = None;
    }

    /// Removes the char before the caret. Returns false at the start of the buffer.
    pub fn delete_backward(&mut self) -> bool {
        if self.caret == 0 {
            return false;
        }
        self.rope.remove(self.caret - 1..self.caret);
        self.caret -= 1;
        self.desired_col = None;
        true
    }

    /// Removes the char under the caret. Returns false at the end of the buffer.
    pub fn delete_forward(&mut self) -> bool {
        if self.caret >= self.len_chars() {
            return false;
        }
        self.rope.remove(self.caret..self.caret + 1);
        self.desired_col = None;
        true
    }

    /// Maps a char offset to zero-based `(col, row)`. `None` if the offset
    /// lies past the end of the text.
    pub fn position_to_xy(&self, pos: usize) -> Option<(usize, usize)> {
        if pos > self.len_chars() {
            return None;
        }
        let row = self.rope.try_char_to_line(pos).ok()?;
        let col = pos - self.rope.line_to_char(row);
        Some((col, row))
    }

    /// Inverse of `position_to_xy`; the column is clamped to the line.
    pub fn xy_to_position(&self, col: usize, row: usize) -> usize {
        let row = row.min(self.line_count().saturating_sub(1));
        self.rope.line_to_char(row) + col.min(self.line_len(row))
    }

    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Line text without its trailing line break.
    pub fn line(&self, line_idx: usize) -> Option<String> {
        if line_idx < self.rope.len_lines() {
            let line = self.rope.line(line_idx).to_string();
            Some(line.trim_end_matches(['\n', '\r']).to_string())
        } else {
            None
        }
    }

    /// Number of chars on a line, excluding the line break.
    pub fn line_len(&self, line_idx: usize) -> usize {
        self.line(line_idx).map(|l| l.chars().count()).unwrap_or(0)
    }

    pub fn move_left(&mut self) {
        self.set_insertion_point(self.caret.saturating_sub(1));
    }

    pub fn move_right(&mut self) {
        self.set_insertion_point(self.caret + 1);
    }

    pub fn move_up(&mut self, lines: usize) {
        if let Some((col, row)) = self.position_to_xy(self.caret) {
            let target = self.desired_col.unwrap_or(col);
            self.caret = self.xy_to_position(target, row.saturating_sub(lines));
            self.desired_col = Some(target);
        }
    }

    pub fn move_down(&mut self, lines: usize) {
        if let Some((col, row)) = self.position_to_xy(self.caret) {
            let target = self.desired_col.unwrap_or(col);
            let last = self.line_count().saturating_sub(1);
            self.caret = self.xy_to_position(target, (row + lines).min(last));
            self.desired_col = Some(target);
        }
    }

    pub fn move_line_start(&mut self) {
        if let Some((_, row)) = self.position_to_xy(self.caret) {
            self.set_insertion_point(self.rope.line_to_char(row));
        }
    }

    pub fn move_line_end(&mut self) {
        if let Some((_, row)) = self.position_to_xy(self.caret) {
            self.set_insertion_point(self.xy_to_position(usize::MAX, row));
        }
    }

    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<String, BufferError> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|e| BufferError::io(path, e))?;
        String::from_utf8(bytes).map_err(|source| BufferError::Decode {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), BufferError> {
        let path = path.as_ref();
        let mut file = fs::File::create(path).map_err(|e| BufferError::io(path, e))?;
        self.rope
            .write_to(&mut file)
            .map_err(|e| BufferError::io(path, e))
    }
}
