#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    // File menu
    Open,
    Save,
    SaveAs,
    Exit,
    OpenMenu,
    // Text area default processing
    MoveLeft,
    MoveRight,
    MoveUp,
    MoveDown,
    MoveLineStart,
    MoveLineEnd,
    MoveBufferStart,
    MoveBufferEnd,
    PageUp,
    PageDown,
    InsertChar(char),
    DeleteBackward,
    DeleteForward,
}

impl Command {
    /// Commands that go through the text area rather than the menu.
    pub fn is_text_area(&self) -> bool {
        !matches!(
            self,
            Command::Open | Command::Save | Command::SaveAs | Command::Exit | Command::OpenMenu
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_variants() {
        assert_eq!(Command::MoveLeft, Command::MoveLeft);
        assert_ne!(Command::MoveRight, Command::MoveUp);
        let cmd = Command::InsertChar('a');
        if let Command::InsertChar(c) = cmd {
            assert_eq!(c, 'a');
        } else {
            panic!("Expected InsertChar");
        }
    }

    #[test]
    fn test_text_area_commands() {
        assert!(Command::InsertChar('x').is_text_area());
        assert!(Command::PageDown.is_text_area());
        assert!(!Command::Save.is_text_area());
        assert!(!Command::OpenMenu.is_text_area());
    }
}
