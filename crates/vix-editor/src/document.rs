//! Text document — the fundamental unit of text storage.
//!
//! A `Document` wraps a [`ropey::Rope`] with the editing operations the key
//! interpreters need: per-line queries, single-character insert/delete, line
//! splitting, and opening a new line below. Coordinates are 0-indexed
//! `(row, col)` pairs where `col` counts chars from the start of the line.
//!
//! # Design choices
//!
//! - **ropey** provides O(log n) insert/delete at any position and efficient
//!   line indexing. We build a clean line-oriented API on top rather than
//!   reimplementing text data structures.
//!
//! - **Never empty.** An empty rope reports one line (the empty line), and
//!   no operation here removes a line ending, so `line_count() >= 1` holds
//!   for the document's whole lifetime.
//!
//! - **Single-byte character model.** The editor's input is raw ASCII bytes
//!   and its column arithmetic assumes one char per terminal cell. The rope
//!   would store anything, but nothing wider ever goes in.
//!
//! - **No file I/O.** The document is created empty at startup and lives in
//!   memory for the process lifetime; there is no load or save path.

use ropey::{Rope, RopeSlice};

// ---------------------------------------------------------------------------
// Document
// ---------------------------------------------------------------------------

/// A text document backed by a rope.
///
/// All positions are 0-indexed `(row, col)` pairs. `col` ranges over
/// `0..=line_len(row)` — the position one past the last character is valid
/// for insertion and for the cursor.
pub struct Document {
    rope: Rope,
}

impl Document {
    // -- Construction -------------------------------------------------------

    /// Create an empty document: one empty line.
    #[must_use]
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Create a document from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    // -- Text access --------------------------------------------------------

    /// The underlying rope. Prefer the typed accessors below, but this is
    /// available when you need direct char-level iteration.
    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Total number of lines. Never less than 1: an empty document has one
    /// empty line.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// The last valid row index (`line_count() - 1`).
    #[inline]
    #[must_use]
    pub fn last_row(&self) -> usize {
        self.rope.len_lines() - 1
    }

    /// Get a line by 0-indexed row. Returns the line including its trailing
    /// line ending (if any). Returns `None` if `row >= line_count()`.
    #[inline]
    #[must_use]
    pub fn line(&self, row: usize) -> Option<RopeSlice<'_>> {
        if row < self.rope.len_lines() {
            Some(self.rope.line(row))
        } else {
            None
        }
    }

    /// Number of chars in a line **excluding** any trailing line ending
    /// (`\n`, `\r\n`, `\r`). This is the content length — the valid cursor
    /// columns on the line are `0..=line_len(row)`.
    ///
    /// Returns `None` if the row doesn't exist.
    #[must_use]
    pub fn line_len(&self, row: usize) -> Option<usize> {
        self.line(row).map(|line| {
            let total = line.len_chars();
            if total == 0 {
                return 0;
            }
            let last = line.char(total - 1);
            if last == '\n' {
                // Could be \r\n — check char before.
                if total >= 2 && line.char(total - 2) == '\r' {
                    total - 2
                } else {
                    total - 1
                }
            } else if last == '\r' {
                total - 1
            } else {
                // Last line with no trailing newline.
                total
            }
        })
    }

    /// Column of the first non-blank (not space, not tab) character of the
    /// line's content. Returns 0 if the line is empty or entirely blank.
    #[must_use]
    pub fn first_non_blank(&self, row: usize) -> usize {
        let content = self.line_len(row).unwrap_or(0);
        self.line(row)
            .and_then(|line| {
                line.chars()
                    .take(content)
                    .position(|ch| ch != ' ' && ch != '\t')
            })
            .unwrap_or(0)
    }

    /// Collect all text into a `String`. Allocates — prefer `rope()` or
    /// `line()` for zero-copy access when possible.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `(row, col)` position to an absolute char index in the rope.
    ///
    /// Returns `None` if the row is out of bounds or the column exceeds the
    /// line's total char count (including line ending). A column exactly
    /// equal to the line's char count is valid — it is the position just
    /// past the last character.
    #[must_use]
    pub fn char_idx(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rope.len_lines() {
            return None;
        }
        let line_start = self.rope.line_to_char(row);
        let line_len = self.rope.line(row).len_chars();
        if col > line_len {
            return None;
        }
        Some(line_start + col)
    }

    /// Convert an absolute char index to a `(row, col)` position.
    ///
    /// Returns `None` if `char_idx > len_chars()`. An index equal to
    /// `len_chars()` returns the position just past the last character.
    #[must_use]
    pub fn idx_to_pos(&self, char_idx: usize) -> Option<(usize, usize)> {
        if char_idx > self.rope.len_chars() {
            return None;
        }
        let row = self.rope.char_to_line(char_idx);
        let line_start = self.rope.line_to_char(row);
        Some((row, char_idx - line_start))
    }

    // -- Editing ------------------------------------------------------------

    /// Insert a single character at a position. Positions at or after it
    /// shift right by one.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is not a valid position in the document.
    pub fn insert_char(&mut self, row: usize, col: usize, ch: char) {
        let idx = self
            .char_idx(row, col)
            .expect("insert_char position out of bounds");
        self.rope.insert_char(idx, ch);
    }

    /// Delete the character at a position.
    ///
    /// Callers pass content columns only (`col < line_len(row)`), so line
    /// endings are never deleted and the line structure is preserved.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` does not address a character.
    pub fn delete_char(&mut self, row: usize, col: usize) {
        let idx = self
            .char_idx(row, col)
            .expect("delete_char position out of bounds");
        self.rope.remove(idx..idx + 1);
    }

    /// Split the line at `(row, col)`: content before the split stays on
    /// `row`, content from the split point onward becomes line `row + 1`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is not a valid position in the document.
    pub fn split_line(&mut self, row: usize, col: usize) {
        let idx = self
            .char_idx(row, col)
            .expect("split_line position out of bounds");
        self.rope.insert_char(idx, '\n');
    }

    /// Open a new empty line immediately below `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row` is out of bounds.
    pub fn open_below(&mut self, row: usize) {
        let col = self.line_len(row).expect("open_below row out of bounds");
        self.split_line(row, col);
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- Construction & non-emptiness ---------------------------------------

    #[test]
    fn new_document_has_one_empty_line() {
        let doc = Document::new();
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_len(0), Some(0));
    }

    #[test]
    fn from_text_line_count() {
        assert_eq!(Document::from_text("a\nb\nc").line_count(), 3);
        assert_eq!(Document::from_text("").line_count(), 1);
    }

    #[test]
    fn trailing_newline_yields_trailing_empty_line() {
        let doc = Document::from_text("a\n");
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_len(1), Some(0));
    }

    #[test]
    fn last_row_matches_line_count() {
        assert_eq!(Document::new().last_row(), 0);
        assert_eq!(Document::from_text("a\nb\nc").last_row(), 2);
    }

    // -- line_len -----------------------------------------------------------

    #[test]
    fn line_len_excludes_lf() {
        let doc = Document::from_text("hello\nworld");
        assert_eq!(doc.line_len(0), Some(5));
        assert_eq!(doc.line_len(1), Some(5));
    }

    #[test]
    fn line_len_excludes_crlf() {
        let doc = Document::from_text("hello\r\nworld");
        assert_eq!(doc.line_len(0), Some(5));
    }

    #[test]
    fn line_len_excludes_trailing_bare_cr() {
        let doc = Document::from_text("hello\r");
        assert_eq!(doc.line_len(0), Some(5));
    }

    #[test]
    fn line_len_out_of_bounds_is_none() {
        assert_eq!(Document::from_text("a").line_len(1), None);
    }

    // -- first_non_blank ----------------------------------------------------

    #[test]
    fn first_non_blank_skips_leading_whitespace() {
        let doc = Document::from_text("  \thello");
        assert_eq!(doc.first_non_blank(0), 3);
    }

    #[test]
    fn first_non_blank_at_column_zero() {
        let doc = Document::from_text("hello");
        assert_eq!(doc.first_non_blank(0), 0);
    }

    #[test]
    fn first_non_blank_empty_line_is_zero() {
        let doc = Document::from_text("\nx");
        assert_eq!(doc.first_non_blank(0), 0);
    }

    #[test]
    fn first_non_blank_all_blank_line_is_zero() {
        let doc = Document::from_text("    \nx");
        assert_eq!(doc.first_non_blank(0), 0);
    }

    // -- Coordinate conversion ----------------------------------------------

    #[test]
    fn char_idx_basic() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(doc.char_idx(0, 0), Some(0));
        assert_eq!(doc.char_idx(0, 2), Some(2)); // the '\n'
        assert_eq!(doc.char_idx(1, 0), Some(3));
        assert_eq!(doc.char_idx(1, 2), Some(5)); // one past the end
    }

    #[test]
    fn char_idx_out_of_bounds() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(doc.char_idx(2, 0), None);
        assert_eq!(doc.char_idx(1, 3), None);
    }

    #[test]
    fn idx_to_pos_roundtrip() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(doc.idx_to_pos(0), Some((0, 0)));
        assert_eq!(doc.idx_to_pos(3), Some((1, 0)));
        assert_eq!(doc.idx_to_pos(4), Some((1, 1)));
        assert_eq!(doc.idx_to_pos(5), Some((1, 2)));
        assert_eq!(doc.idx_to_pos(6), None);
    }

    // -- Editing ------------------------------------------------------------

    #[test]
    fn insert_char_mid_line() {
        let mut doc = Document::from_text("ac");
        doc.insert_char(0, 1, 'b');
        assert_eq!(doc.contents(), "abc");
    }

    #[test]
    fn insert_char_at_line_end() {
        let mut doc = Document::from_text("ab\ncd");
        doc.insert_char(0, 2, 'x');
        assert_eq!(doc.contents(), "abx\ncd");
    }

    #[test]
    fn insert_into_empty_document() {
        let mut doc = Document::new();
        doc.insert_char(0, 0, 'a');
        assert_eq!(doc.contents(), "a");
        assert_eq!(doc.line_count(), 1);
    }

    #[test]
    fn delete_char_basic() {
        let mut doc = Document::from_text("abc");
        doc.delete_char(0, 1);
        assert_eq!(doc.contents(), "ac");
    }

    #[test]
    fn insert_then_delete_restores_line() {
        let mut doc = Document::from_text("hello");
        doc.insert_char(0, 2, 'x');
        doc.delete_char(0, 2);
        assert_eq!(doc.contents(), "hello");
    }

    #[test]
    fn split_line_mid_line() {
        let mut doc = Document::from_text("hello");
        doc.split_line(0, 2);
        assert_eq!(doc.contents(), "he\nllo");
        assert_eq!(doc.line_count(), 2);
    }

    #[test]
    fn split_line_at_start() {
        let mut doc = Document::from_text("hello");
        doc.split_line(0, 0);
        assert_eq!(doc.contents(), "\nhello");
    }

    #[test]
    fn split_line_at_end_opens_empty_line() {
        let mut doc = Document::from_text("hello\nworld");
        doc.split_line(0, 5);
        assert_eq!(doc.contents(), "hello\n\nworld");
        assert_eq!(doc.line_len(1), Some(0));
    }

    #[test]
    fn split_concatenation_equals_original() {
        let original = "abcdef";
        for k in 0..=original.len() {
            let mut doc = Document::from_text(original);
            doc.split_line(0, k);
            let first: String = doc.line(0).unwrap().chars().take(k).collect();
            let len1 = doc.line_len(1).unwrap();
            let second: String = doc.line(1).unwrap().chars().take(len1).collect();
            assert_eq!(format!("{first}{second}"), original);
        }
    }

    #[test]
    fn open_below_mid_document() {
        let mut doc = Document::from_text("aa\nbb");
        doc.open_below(0);
        assert_eq!(doc.contents(), "aa\n\nbb");
        assert_eq!(doc.line_count(), 3);
    }

    #[test]
    fn open_below_last_line_without_trailing_newline() {
        let mut doc = Document::from_text("aa");
        doc.open_below(0);
        assert_eq!(doc.line_count(), 2);
        assert_eq!(doc.line_len(1), Some(0));
    }

    #[test]
    fn open_below_empty_document() {
        let mut doc = Document::new();
        doc.open_below(0);
        assert_eq!(doc.line_count(), 2);
    }

    // -- Non-emptiness invariant --------------------------------------------

    #[test]
    fn line_count_never_below_one() {
        let mut doc = Document::from_text("ab");
        doc.delete_char(0, 1);
        doc.delete_char(0, 0);
        assert_eq!(doc.line_count(), 1);
        assert_eq!(doc.line_len(0), Some(0));
    }
}
