use crate::cursor::{Cursor, Direction};

/// A line-based text buffer with an embedded cursor.
///
/// The document is an ordered sequence of lines; columns are character
/// offsets (grapheme-naive: one unit per `char`), never byte offsets. Two
/// invariants hold after every operation:
///
/// - the document is never empty - an emptied buffer keeps one empty line
/// - `cursor.row < lines.len()` and `cursor.col <= line_len(cursor.row)`
///
/// Violating either is a bug in this module, not a user-facing error: the
/// invariants are asserted in debug builds and defensively clamped in
/// release builds.
#[derive(Debug, Clone)]
pub struct Buffer {
    lines: Vec<String>,
    cursor: Cursor,
    modified: bool,
}

impl Buffer {
    /// Create an empty buffer: one empty line, cursor at the origin.
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            cursor: Cursor::origin(),
            modified: false,
        }
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Character length of a line. Out-of-range rows read as empty.
    pub fn line_len(&self, row: usize) -> usize {
        self.lines.get(row).map_or(0, |l| l.chars().count())
    }

    pub fn line(&self, row: usize) -> Option<&str> {
        self.lines.get(row).map(|l| l.as_str())
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Has the buffer changed since the last `load_lines`/`clear_modified`?
    pub fn is_modified(&self) -> bool {
        self.modified
    }

    pub fn clear_modified(&mut self) {
        self.modified = false;
    }

    /// Insert a character at the cursor and advance one column.
    ///
    /// Accepts whatever it is given - filtering to the printable set is the
    /// input layer's responsibility, not the buffer's.
    pub fn insert_char(&mut self, c: char) {
        let col = self.cursor.col;
        let byte = byte_of_col(&self.lines[self.cursor.row], col);
        self.lines[self.cursor.row].insert(byte, c);
        self.cursor.col = col + 1;
        self.modified = true;
        self.assert_invariants();
    }

    /// Split the current line at the cursor column.
    ///
    /// The tail (from the cursor onward) becomes a new line directly below
    /// and the cursor moves to its start. The canonical Enter operation: no
    /// character is duplicated or dropped at the boundary.
    pub fn split_line(&mut self) {
        let row = self.cursor.row;
        let byte = byte_of_col(&self.lines[row], self.cursor.col);
        let tail = self.lines[row].split_off(byte);
        self.lines.insert(row + 1, tail);
        self.cursor = Cursor::new(row + 1, 0);
        self.modified = true;
        self.assert_invariants();
    }

    /// Delete the character before the cursor.
    ///
    /// At column 0 the current line is joined onto the previous one and the
    /// cursor lands at the old end of that line. At (0,0) this is a no-op,
    /// never an error.
    pub fn delete_backward(&mut self) {
        let Cursor { row, col } = self.cursor;
        if col > 0 {
            let byte = byte_of_col(&self.lines[row], col - 1);
            self.lines[row].remove(byte);
            self.cursor.col = col - 1;
            self.modified = true;
        } else if row > 0 {
            let tail = self.lines.remove(row);
            let prev_len = self.line_len(row - 1);
            self.lines[row - 1].push_str(&tail);
            self.cursor = Cursor::new(row - 1, prev_len);
            self.modified = true;
        }
        self.assert_invariants();
    }

    /// Move the cursor one step in the given direction.
    ///
    /// Up/Down clamp the column to the destination line's length. Left/Right
    /// stop at the line boundaries - there is deliberately no wrap to the
    /// adjacent line, and Down refuses to move past the last existing line
    /// rather than growing the document.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => {
                if self.cursor.row > 0 {
                    self.cursor.row -= 1;
                    self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
                }
            }
            Direction::Down => {
                if self.cursor.row + 1 < self.lines.len() {
                    self.cursor.row += 1;
                    self.cursor.col = self.cursor.col.min(self.line_len(self.cursor.row));
                }
            }
            Direction::Left => {
                if self.cursor.col > 0 {
                    self.cursor.col -= 1;
                }
            }
            Direction::Right => {
                if self.cursor.col < self.line_len(self.cursor.row) {
                    self.cursor.col += 1;
                }
            }
        }
        self.assert_invariants();
    }

    /// Replace the whole document. An empty input normalizes to a single
    /// empty line; the cursor resets to the origin.
    pub fn load_lines(&mut self, lines: Vec<String>) {
        self.lines = if lines.is_empty() {
            vec![String::new()]
        } else {
            lines
        };
        self.cursor = Cursor::origin();
        self.modified = false;
        self.assert_invariants();
    }

    /// The document as one string per line, in order. Exact inverse of
    /// `load_lines` for non-empty input.
    pub fn serialize_lines(&self) -> Vec<String> {
        self.lines.clone()
    }

    /// Debug-assert the structural invariants; clamp in release so a bug
    /// degrades to a misplaced cursor instead of a panic mid-session.
    fn assert_invariants(&mut self) {
        debug_assert!(!self.lines.is_empty(), "document must never be empty");
        debug_assert!(
            self.cursor.row < self.lines.len(),
            "cursor row {} out of bounds ({} lines)",
            self.cursor.row,
            self.lines.len()
        );
        debug_assert!(
            self.cursor.col <= self.line_len(self.cursor.row),
            "cursor col {} past end of line {}",
            self.cursor.col,
            self.cursor.row
        );

        if self.lines.is_empty() {
            self.lines.push(String::new());
        }
        if self.cursor.row >= self.lines.len() {
            self.cursor.row = self.lines.len() - 1;
        }
        let len = self.line_len(self.cursor.row);
        if self.cursor.col > len {
            self.cursor.col = len;
        }
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

/// Byte offset of a character column within a line. A column equal to the
/// character count maps to the end of the string.
fn byte_of_col(line: &str, col: usize) -> usize {
    line.char_indices()
        .nth(col)
        .map_or(line.len(), |(byte, _)| byte)
}
