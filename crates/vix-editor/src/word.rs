//! The `w` next-word motion.
//!
//! Scans forward from the cursor. Once at least one whitespace character
//! has been seen, the next non-whitespace character is the destination.
//! Line breaks count as whitespace, so the scan flows from the end of one
//! line onto column 0 of the next. If the scan exhausts the document, the
//! motion lands at the end of the last line.
//!
//! Whitespace classification is ASCII-only: space, tab, `\r`, `\n`. There
//! is no word/punctuation distinction — any non-whitespace run is a word.

use crate::document::Document;

/// True for the characters the motion treats as whitespace.
const fn is_blank(ch: char) -> bool {
    matches!(ch, ' ' | '\t' | '\r' | '\n')
}

/// `w` — forward to the start of the next word.
///
/// `(row, col)` must be an effective position (column already clamped to
/// the line length). Returns the destination position; if there is no next
/// word, returns the end of the last line.
#[must_use]
pub fn next_word(doc: &Document, row: usize, col: usize) -> (usize, usize) {
    let rope = doc.rope();
    let total = rope.len_chars();

    let Some(start) = doc.char_idx(row, col) else {
        return (row, col);
    };

    let mut seen_blank = false;
    let mut idx = start;
    while idx < total {
        let ch = rope.char(idx);
        if is_blank(ch) {
            seen_blank = true;
        } else if seen_blank {
            return doc.idx_to_pos(idx).unwrap_or((row, col));
        }
        idx += 1;
    }

    // No next word — land at the end of the last line.
    let last = doc.last_row();
    (last, doc.line_len(last).unwrap_or(0))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lands_on_next_word_same_line() {
        let doc = Document::from_text("ab  cd");
        assert_eq!(next_word(&doc, 0, 0), (0, 4));
    }

    #[test]
    fn from_inside_whitespace_run() {
        let doc = Document::from_text("ab  cd");
        assert_eq!(next_word(&doc, 0, 2), (0, 4));
        assert_eq!(next_word(&doc, 0, 3), (0, 4));
    }

    #[test]
    fn skips_current_word_entirely() {
        let doc = Document::from_text("one two three");
        assert_eq!(next_word(&doc, 0, 1), (0, 4));
        assert_eq!(next_word(&doc, 0, 4), (0, 8));
    }

    #[test]
    fn tab_is_whitespace() {
        let doc = Document::from_text("ab\tcd");
        assert_eq!(next_word(&doc, 0, 0), (0, 3));
    }

    #[test]
    fn crosses_line_break() {
        let doc = Document::from_text("ab\ncd");
        assert_eq!(next_word(&doc, 0, 0), (1, 0));
    }

    #[test]
    fn crosses_line_break_onto_indented_word() {
        let doc = Document::from_text("ab\n  cd");
        assert_eq!(next_word(&doc, 0, 0), (1, 2));
    }

    #[test]
    fn crosses_empty_lines() {
        let doc = Document::from_text("ab\n\n\ncd");
        assert_eq!(next_word(&doc, 0, 0), (3, 0));
    }

    #[test]
    fn punctuation_is_part_of_a_word() {
        // No word/punctuation classes: "ab." is one word, ",cd" the next.
        let doc = Document::from_text("ab. ,cd");
        assert_eq!(next_word(&doc, 0, 0), (0, 4));
    }

    #[test]
    fn no_next_word_lands_at_end_of_last_line() {
        let doc = Document::from_text("ab cd");
        assert_eq!(next_word(&doc, 0, 3), (0, 5));
    }

    #[test]
    fn trailing_whitespace_lands_at_end_of_last_line() {
        let doc = Document::from_text("ab  ");
        assert_eq!(next_word(&doc, 0, 0), (0, 4));
    }

    #[test]
    fn from_end_of_document() {
        let doc = Document::from_text("ab");
        assert_eq!(next_word(&doc, 0, 2), (0, 2));
    }

    #[test]
    fn empty_document_stays_put() {
        let doc = Document::new();
        assert_eq!(next_word(&doc, 0, 0), (0, 0));
    }

    #[test]
    fn multiline_trailing_blank_lines() {
        let doc = Document::from_text("ab\n\n");
        // Only whitespace ahead — end of last line (row 2, the empty line).
        assert_eq!(next_word(&doc, 0, 0), (2, 0));
    }
}
