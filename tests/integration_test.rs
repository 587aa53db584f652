// tests/integration_test.rs - File menu flows end to end

mod common;

use common::dialogs::{file_dialog, message_box};
use common::keys::{ctrl, key, type_text};
use crossterm::event::KeyCode;
use std::fs;
use tempfile::TempDir;
use vimi::dialog::{FileDialogKind, FileFilter};
use vimi::editor::Editor;

#[test]
fn test_open_file_replaces_buffer_and_associates() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("notes.txt");
    fs::write(&file_path, "Hello\nWorld\n").unwrap();

    let mut editor = Editor::new();
    type_text(&mut editor, "scratch");
    editor.open_path(&file_path);

    assert_eq!(editor.buffer.value(), "Hello\nWorld\n");
    assert_eq!(editor.current_file.as_deref(), Some(file_path.as_path()));
    assert_eq!(editor.title, "VIMI — notes.txt");
    assert_eq!(editor.status, file_path.display().to_string());
    assert!(editor.dialog.is_none());
}

#[test]
fn test_open_through_dialog() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("script.py");
    fs::write(&file_path, "print('hi')\n").unwrap();

    let mut editor = Editor::new();
    editor.handle_key(ctrl('o'));
    let dialog = file_dialog(&editor);
    assert_eq!(dialog.kind, FileDialogKind::Open);
    assert_eq!(dialog.filter, FileFilter::Text);

    type_text(&mut editor, file_path.to_str().unwrap());
    editor.handle_key(key(KeyCode::Enter));

    assert!(editor.dialog.is_none());
    assert_eq!(editor.buffer.value(), "print('hi')\n");
    assert_eq!(editor.current_file.as_deref(), Some(file_path.as_path()));
}

#[test]
fn test_cancelled_open_changes_nothing() {
    let mut editor = Editor::new();
    type_text(&mut editor, "keep me");
    editor.handle_key(ctrl('o'));
    editor.handle_key(key(KeyCode::Esc));

    assert!(editor.dialog.is_none());
    assert_eq!(editor.buffer.value(), "keep me");
    assert!(editor.current_file.is_none());
}

#[test]
fn test_open_missing_file_shows_error() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.txt");

    let mut editor = Editor::new();
    editor.open_path(&missing);

    let message = message_box(&editor);
    assert_eq!(message.title, "Error");
    assert!(message.message.starts_with("Could not open the file:\n"));
    assert!(message.message.contains("missing.txt"));
    assert!(editor.current_file.is_none());
    assert_eq!(editor.title, "VIMI");
}

#[test]
fn test_open_failure_keeps_previous_association() {
    let temp_dir = TempDir::new().unwrap();
    let first = temp_dir.path().join("first.txt");
    fs::write(&first, "first").unwrap();
    let binary = temp_dir.path().join("binary.txt");
    fs::write(&binary, [0xffu8, 0xfe, 0x00]).unwrap();

    let mut editor = Editor::new();
    editor.open_path(&first);
    editor.open_path(&binary);

    assert!(message_box(&editor).message.contains("UTF-8"));
    assert_eq!(editor.current_file.as_deref(), Some(first.as_path()));
    assert_eq!(editor.buffer.value(), "first");
}

#[test]
fn test_save_without_file_opens_save_as_dialog() {
    let mut editor = Editor::new();
    type_text(&mut editor, "draft");
    editor.handle_key(ctrl('s'));

    assert_eq!(file_dialog(&editor).kind, FileDialogKind::Save);
    assert!(editor.current_file.is_none());
}

#[test]
fn test_save_writes_current_file() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("a.txt");
    fs::write(&file_path, "old").unwrap();

    let mut editor = Editor::new();
    editor.open_path(&file_path);
    editor.handle_key(key(KeyCode::End));
    type_text(&mut editor, " and new");
    editor.handle_key(ctrl('s'));

    assert!(editor.dialog.is_none());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "old and new");
    assert_eq!(editor.status, format!("Saved: {}", file_path.display()));
}

#[test]
fn test_save_as_through_dialog_associates() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("fresh.txt");

    let mut editor = Editor::new();
    type_text(&mut editor, "line one\nline two");
    editor.handle_key(key(KeyCode::F(12)));
    type_text(&mut editor, file_path.to_str().unwrap());
    editor.handle_key(key(KeyCode::Enter));

    assert!(editor.dialog.is_none());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "line one\nline two");
    assert_eq!(editor.current_file.as_deref(), Some(file_path.as_path()));
    assert_eq!(editor.title, "VIMI — fresh.txt");
    assert_eq!(editor.status, file_path.display().to_string());

    // Associated now: Save writes directly
    type_text(&mut editor, "!");
    editor.handle_key(ctrl('s'));
    assert!(editor.dialog.is_none());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "line one\nline two!");
}

#[test]
fn test_save_as_confirms_overwrite() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("existing.txt");
    fs::write(&file_path, "previous").unwrap();

    let mut editor = Editor::new();
    type_text(&mut editor, "replacement");
    editor.handle_key(key(KeyCode::F(12)));
    type_text(&mut editor, file_path.to_str().unwrap());
    editor.handle_key(key(KeyCode::Enter));

    assert!(file_dialog(&editor).pending_overwrite.is_some());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "previous");

    editor.handle_key(key(KeyCode::Char('y')));
    assert!(editor.dialog.is_none());
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "replacement");
}

#[test]
fn test_save_as_failure_shows_error() {
    let temp_dir = TempDir::new().unwrap();
    let bad_path = temp_dir.path().join("no_such_dir").join("out.txt");

    let mut editor = Editor::new();
    type_text(&mut editor, "content");
    editor.save_to_path(&bad_path);

    assert!(
        message_box(&editor)
            .message
            .starts_with("Could not save the file:\n")
    );
    assert!(editor.current_file.is_none());
    assert_eq!(editor.title, "VIMI");
}

#[test]
fn test_save_failure_keeps_association() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("gone.txt");
    fs::write(&file_path, "x").unwrap();

    let mut editor = Editor::new();
    editor.open_path(&file_path);
    // Turn the target into a directory so the write fails
    fs::remove_file(&file_path).unwrap();
    fs::create_dir(&file_path).unwrap();
    editor.handle_key(ctrl('s'));

    assert!(message_box(&editor).message.contains("Could not save"));
    assert_eq!(editor.current_file.as_deref(), Some(file_path.as_path()));
}

#[test]
fn test_write_then_open_round_trip() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("round.txt");
    let text = "tabs\tand ünïcode\r\nsecond line\n\n";

    let mut writer = Editor::new();
    writer.change_value(text);
    writer.save_to_path(&file_path);

    let mut reader = Editor::new();
    reader.open_path(&file_path);
    assert_eq!(reader.buffer.value(), text);
    assert_eq!(reader.current_file.as_deref(), Some(file_path.as_path()));
}

#[test]
fn test_opened_curly_quotes_are_straightened() {
    let temp_dir = TempDir::new().unwrap();
    let file_path = temp_dir.path().join("quotes.txt");
    fs::write(&file_path, "“quoted”").unwrap();

    let mut editor = Editor::new();
    editor.open_path(&file_path);

    assert_eq!(editor.buffer.value(), "\"quoted\"");
    // The file itself is untouched until saved
    assert_eq!(fs::read_to_string(&file_path).unwrap(), "“quoted”");
}

#[test]
fn test_menu_drives_save_as() {
    let mut editor = Editor::new();
    editor.handle_key(key(KeyCode::F(10)));
    editor.handle_key(key(KeyCode::Down));
    editor.handle_key(key(KeyCode::Down));
    editor.handle_key(key(KeyCode::Enter));

    assert!(!editor.menu.open);
    assert_eq!(file_dialog(&editor).kind, FileDialogKind::Save);
}

#[test]
fn test_exit_closes_without_prompt() {
    let mut editor = Editor::new();
    type_text(&mut editor, "unsaved");
    assert!(editor.handle_key(ctrl('q')));
    assert!(editor.should_close());
    assert!(editor.dialog.is_none());
}
