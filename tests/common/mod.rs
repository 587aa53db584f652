// Common test utilities for driving the editor with key events

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use vimi::dialog::{Dialog, FileDialog, MessageBox};
use vimi::editor::Editor;

/// Key event construction
pub mod keys {
    use super::*;

    #[allow(dead_code)]
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[allow(dead_code)]
    pub fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// Feed every char of `text` as a key press (newlines become Enter)
    #[allow(dead_code)]
    pub fn type_text(editor: &mut Editor, text: &str) {
        for c in text.chars() {
            let code = if c == '\n' {
                KeyCode::Enter
            } else {
                KeyCode::Char(c)
            };
            editor.handle_key(key(code));
        }
    }
}

/// Accessors for the modal dialog currently shown
pub mod dialogs {
    use super::*;

    #[allow(dead_code)]
    pub fn file_dialog(editor: &Editor) -> &FileDialog {
        match &editor.dialog {
            Some(Dialog::File(dialog)) => dialog,
            other => panic!("Expected a file dialog, got {:?}", other),
        }
    }

    #[allow(dead_code)]
    pub fn message_box(editor: &Editor) -> &MessageBox {
        match &editor.dialog {
            Some(Dialog::Message(message)) => message,
            other => panic!("Expected a message box, got {:?}", other),
        }
    }
}

/// Validation utilities for checking invariants
pub mod validation {
    use super::*;
    use vimi::quotes::is_curly_quote;

    #[allow(dead_code)]
    pub fn assert_caret_valid(editor: &Editor) {
        let caret = editor.buffer.insertion_point();
        assert!(
            caret <= editor.buffer.len_chars(),
            "Caret {} out of bounds (len: {})",
            caret,
            editor.buffer.len_chars()
        );
    }

    #[allow(dead_code)]
    pub fn assert_no_curly_quotes(editor: &Editor) {
        let value = editor.buffer.value();
        assert!(
            !value.chars().any(is_curly_quote),
            "Curly quote left in {:?}",
            value
        );
    }
}
