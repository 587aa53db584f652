// src/keymap.rs - Key bindings for the text area and the menu accelerators

use crate::command::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Maps a key press to a command. Tab is not listed here: the editor's
/// key-down handler consumes it before the keymap is consulted.
pub fn key_to_command(key_event: KeyEvent) -> Option<Command> {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key_event.modifiers.contains(KeyModifiers::ALT);
    let shift = key_event.modifiers.contains(KeyModifiers::SHIFT);

    match key_event.code {
        // Accelerators
        KeyCode::Char(c) if ctrl => match c {
            'o' | 'O' => Some(Command::Open),
            's' if shift => Some(Command::SaveAs),
            'S' => Some(Command::SaveAs),
            's' => Some(Command::Save),
            'q' | 'Q' => Some(Command::Exit),
            _ => None,
        },
        KeyCode::Char('f') | KeyCode::Char('F') if alt => Some(Command::OpenMenu),
        KeyCode::F(10) => Some(Command::OpenMenu),
        KeyCode::F(12) => Some(Command::SaveAs),

        // Text area
        KeyCode::Char(_) if alt => None,
        KeyCode::Char(c) => Some(Command::InsertChar(c)),
        KeyCode::Enter => Some(Command::InsertChar('\n')),
        KeyCode::Backspace => Some(Command::DeleteBackward),
        KeyCode::Delete => Some(Command::DeleteForward),
        KeyCode::Left => Some(Command::MoveLeft),
        KeyCode::Right => Some(Command::MoveRight),
        KeyCode::Up => Some(Command::MoveUp),
        KeyCode::Down => Some(Command::MoveDown),
        KeyCode::Home if ctrl => Some(Command::MoveBufferStart),
        KeyCode::End if ctrl => Some(Command::MoveBufferEnd),
        KeyCode::Home => Some(Command::MoveLineStart),
        KeyCode::End => Some(Command::MoveLineEnd),
        KeyCode::PageUp => Some(Command::PageUp),
        KeyCode::PageDown => Some(Command::PageDown),
        _ => None,
    }
}
