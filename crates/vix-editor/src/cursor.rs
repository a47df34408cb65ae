//! Cursor — position tracking with the target-column model.
//!
//! The `Cursor` is a `(row, col)` pair where `col` is a **target** column:
//! it may exceed the current line's length after vertical movement from a
//! long line to a short one. Every use that indexes into a line goes
//! through [`effective_col`](Cursor::effective_col), which clamps to
//! `0..=line_len(row)`.
//!
//! Vertical movement (`j`/`k`) leaves the target column alone — moving
//! through a short line and back onto a long one returns the cursor to its
//! old column. Horizontal movement and edits materialize the target: after
//! them, `col` equals the effective column.
//!
//! # Buffer-as-parameter design
//!
//! The cursor is a lightweight value type. It does not own or reference the
//! document; the document is passed to movement methods as a parameter.

use crate::document::Document;
use crate::word;

/// A cursor in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    /// Current row. Always `< document.line_count()`.
    row: usize,

    /// Target column. May exceed the current line's length; clamp through
    /// [`effective_col`](Self::effective_col) before indexing into a line.
    col: usize,
}

impl Cursor {
    /// Create a cursor at the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self { row: 0, col: 0 }
    }

    // -- Accessors ----------------------------------------------------------

    /// Current row (0-indexed).
    #[inline]
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Target column (0-indexed, possibly past the current line's end).
    #[inline]
    #[must_use]
    pub const fn col(&self) -> usize {
        self.col
    }

    /// The effective column: the target clamped to the current line's
    /// length. This is the column used for all rendering and editing.
    #[inline]
    #[must_use]
    pub fn effective_col(&self, doc: &Document) -> usize {
        self.col.min(doc.line_len(self.row).unwrap_or(0))
    }

    // -- Direct positioning -------------------------------------------------

    /// Move the cursor to an exact position. The row is clamped to the last
    /// line; the column is taken as the new target.
    pub fn place(&mut self, doc: &Document, row: usize, col: usize) {
        self.row = row.min(doc.last_row());
        self.col = col;
    }

    /// Materialize the target column: set `col` to the effective column.
    pub fn clamp_col(&mut self, doc: &Document) {
        self.col = self.effective_col(doc);
    }

    // -- Horizontal movement ------------------------------------------------

    /// `h` — move left one column. Stops at column 0 (no line wrapping).
    /// Materializes the target column.
    pub fn move_left(&mut self, doc: &Document) {
        let col = self.effective_col(doc);
        self.col = if col > 0 { col - 1 } else { col };
    }

    /// `l` — move right one column. Stops at the line length (no line
    /// wrapping). Materializes the target column.
    pub fn move_right(&mut self, doc: &Document) {
        let col = self.effective_col(doc);
        let max = doc.line_len(self.row).unwrap_or(0);
        self.col = if col < max { col + 1 } else { col };
    }

    /// Move to column 0 of the current line.
    pub const fn move_to_line_start(&mut self) {
        self.col = 0;
    }

    /// `I`'s target — move to the first non-blank column of the current
    /// line (column 0 if the line is empty or entirely blank).
    pub fn move_to_first_non_blank(&mut self, doc: &Document) {
        self.col = doc.first_non_blank(self.row);
    }

    /// `A`'s target — move to the end of the current line (one past the
    /// last character).
    pub fn move_to_line_end(&mut self, doc: &Document) {
        self.col = doc.line_len(self.row).unwrap_or(0);
    }

    // -- Vertical movement --------------------------------------------------

    /// `k` — move up one line. The target column is preserved.
    pub const fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
        }
    }

    /// `j` — move down one line. The target column is preserved.
    pub fn move_down(&mut self, doc: &Document) {
        if self.row + 1 < doc.line_count() {
            self.row += 1;
        }
    }

    // -- Word motion --------------------------------------------------------

    /// `w` — move forward to the start of the next word. Materializes the
    /// target column.
    pub fn word_forward(&mut self, doc: &Document) {
        let (row, col) = word::next_word(doc, self.row, self.effective_col(doc));
        self.row = row;
        self.col = col;
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
