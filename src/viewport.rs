use unicode_width::UnicodeWidthChar;

pub struct Viewport {
    pub offset_line: usize,
    pub offset_col: usize,
    pub rows: usize,
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            offset_line: 0,
            offset_col: 0,
            rows,
            cols,
        }
    }

    /// Scrolls just enough to bring the cursor into view. `cursor_col` is
    /// a screen column (tabs already expanded).
    pub fn scroll_to_cursor(&mut self, cursor_line: usize, cursor_col: usize) {
        let rows = self.rows.max(1);
        let cols = self.cols.max(1);

        if cursor_line < self.offset_line {
            self.offset_line = cursor_line;
        } else if cursor_line >= self.offset_line + rows {
            self.offset_line = cursor_line + 1 - rows;
        }

        if cursor_col < self.offset_col {
            self.offset_col = cursor_col;
        } else if cursor_col >= self.offset_col + cols {
            self.offset_col = cursor_col + 1 - cols;
        }
    }
}

/// Screen column of the char at `char_col`, with tabs advancing to the
/// next multiple of `tab_width`.
pub fn screen_col(line: &str, char_col: usize, tab_width: usize) -> usize {
    line.chars().take(char_col).fold(0, |col, c| advance(col, c, tab_width))
}

/// The part of a line shown in screen columns `offset_col..offset_col + width`.
/// Tabs become spaces, control chars are dropped and a wide glyph cut by
/// either edge is replaced by spaces.
pub fn visible_slice(line: &str, offset_col: usize, width: usize, tab_width: usize) -> String {
    let end = offset_col + width;
    let mut out = String::with_capacity(width);
    let mut col = 0;
    for c in line.chars() {
        let next = advance(col, c, tab_width);
        if next == col {
            // Combining marks ride on the glyph before them
            if !is_hidden(c) && col > offset_col && col <= end && !out.is_empty() {
                out.push(c);
            }
        } else if c != '\t' && col >= offset_col && next <= end {
            out.push(c);
        } else if next > offset_col && col < end {
            out.extend(std::iter::repeat_n(' ', next.min(end) - col.max(offset_col)));
        }
        col = next;
    }
    out
}

/// Control chars and the Unicode line/paragraph separators. They stay in
/// the text but are never drawn.
fn is_hidden(c: char) -> bool {
    c.is_control() || matches!(c, '\u{2028}' | '\u{2029}')
}

/// Cells taken by a char other than tab. Hidden chars take none, CJK and
/// emoji take two.
fn char_width(c: char) -> usize {
    if is_hidden(c) {
        0
    } else {
        UnicodeWidthChar::width(c).unwrap_or(0)
    }
}

fn advance(col: usize, c: char, tab_width: usize) -> usize {
    if c == '\t' {
        let tab_width = tab_width.max(1);
        (col / tab_width + 1) * tab_width
    } else {
        col + char_width(c)
    }
}
