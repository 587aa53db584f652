// src/quotes.rs - Typographic quote correction

use std::borrow::Cow;

pub const LEFT_DOUBLE: char = '\u{201C}';
pub const RIGHT_DOUBLE: char = '\u{201D}';
pub const LEFT_SINGLE: char = '\u{2018}';
pub const RIGHT_SINGLE: char = '\u{2019}';

pub fn is_curly_quote(c: char) -> bool {
    matches!(c, LEFT_DOUBLE | RIGHT_DOUBLE | LEFT_SINGLE | RIGHT_SINGLE)
}

fn straight(c: char) -> char {
    match c {
        LEFT_DOUBLE | RIGHT_DOUBLE => '"',
        LEFT_SINGLE | RIGHT_SINGLE => '\'',
        other => other,
    }
}

/// Replaces curly quotes with straight ones. Borrows the input when there
/// is nothing to replace. Each replacement is one char for one char, so
/// char offsets into the text stay valid.
pub fn straighten(text: &str) -> Cow<'_, str> {
    if text.chars().any(is_curly_quote) {
        Cow::Owned(text.chars().map(straight).collect())
    } else {
        Cow::Borrowed(text)
    }
}
