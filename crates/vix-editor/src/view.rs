//! View — viewport scrolling and the frame render pipeline.
//!
//! A `View` tracks which part of the [`Document`] is visible: the
//! `(row_offset, col_offset)` of the top-left cell. [`scroll`](View::scroll)
//! restores the containment invariant after every input event, and
//! [`render`](View::render) turns the whole editor state into one frame of
//! ANSI bytes.
//!
//! # Layout
//!
//! The bottom terminal row is reserved for the command line; the rows above
//! it show the document, with `~` marking rows past the end:
//!
//! ```text
//! ┌───────────────────────────────┐
//! │ document text                 │ ← rows - 1 text rows
//! │ ~                             │
//! ├───────────────────────────────┤
//! │ command line                  │ ← 1 row
//! └───────────────────────────────┘
//! ```
//!
//! # No diffing
//!
//! Every keystroke triggers a full repaint into an [`OutputBuffer`], which
//! the caller flushes as a single write. The dominant cost of the loop is
//! the blocking read, not drawing, so a frame diff would buy nothing.

use std::io::{self, Write};

use crate::command::CommandLine;
use crate::cursor::Cursor;
use crate::document::Document;

use vix_term::ansi;
use vix_term::output::OutputBuffer;
use vix_term::terminal::Size;

// ---------------------------------------------------------------------------
// View
// ---------------------------------------------------------------------------

/// A viewport onto a document.
///
/// Holds only the scroll offsets; the document, cursor, and terminal size
/// are passed to [`scroll`](Self::scroll) and [`render`](Self::render) as
/// parameters.
#[derive(Debug, Clone, Default)]
pub struct View {
    /// First visible document row (0-indexed).
    row_offset: usize,

    /// First visible column (0-indexed).
    col_offset: usize,
}

impl View {
    /// Create a view scrolled to the origin.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
        }
    }

    // -- Accessors ----------------------------------------------------------

    /// First visible document row (0-indexed).
    #[inline]
    #[must_use]
    pub const fn row_offset(&self) -> usize {
        self.row_offset
    }

    /// First visible column (0-indexed).
    #[inline]
    #[must_use]
    pub const fn col_offset(&self) -> usize {
        self.col_offset
    }

    /// Set the vertical scroll position directly.
    pub const fn set_row_offset(&mut self, row: usize) {
        self.row_offset = row;
    }

    /// Set the horizontal scroll position directly.
    pub const fn set_col_offset(&mut self, col: usize) {
        self.col_offset = col;
    }

    // -- Scrolling ----------------------------------------------------------

    /// Adjust the offsets so the effective cursor position `(row, col)` is
    /// visible. Offsets move the minimal distance — never reset to zero.
    ///
    /// A pure function of the cursor, the current offsets, and the size; it
    /// never reads the document. Degenerate sizes (no visible extent on an
    /// axis) leave the offsets untouched.
    pub const fn scroll(&mut self, row: usize, col: usize, size: Size) {
        let visible_rows = size.rows.saturating_sub(1) as usize;
        let visible_cols = size.cols as usize;
        if visible_rows == 0 || visible_cols == 0 {
            return;
        }

        // Vertical: row must be within [row_offset, row_offset + visible_rows).
        if row < self.row_offset {
            self.row_offset = row;
        }
        if row >= self.row_offset + visible_rows {
            self.row_offset = row - visible_rows + 1;
        }

        // Horizontal: col must be within [col_offset, col_offset + visible_cols).
        if col < self.col_offset {
            self.col_offset = col;
        }
        if col >= self.col_offset + visible_cols {
            self.col_offset = col - visible_cols + 1;
        }
    }

    // -- Rendering ----------------------------------------------------------

    /// Build one frame into `frame`, in this fixed order: hide cursor, home,
    /// the `rows - 1` text rows (each clamped to the visible column window,
    /// `~` past the end of the document, clear-to-end-of-line, CRLF), the
    /// command line on the reserved bottom row, cursor positioning, show
    /// cursor.
    ///
    /// The caller flushes the buffer to the terminal as a single write.
    ///
    /// # Errors
    ///
    /// Propagates write errors; writes into an [`OutputBuffer`] cannot fail
    /// in practice.
    pub fn render(
        &self,
        doc: &Document,
        cursor: &Cursor,
        cmdline: &CommandLine,
        size: Size,
        frame: &mut OutputBuffer,
    ) -> io::Result<()> {
        let visible_rows = size.rows.saturating_sub(1) as usize;
        let visible_cols = size.cols as usize;

        ansi::cursor_hide(frame)?;
        ansi::cursor_home(frame)?;

        // -- Text rows ------------------------------------------------------

        for r in 0..visible_rows {
            let row = self.row_offset + r;
            if row < doc.line_count() {
                let content = doc.line_len(row).unwrap_or(0);
                if let Some(line) = doc.line(row) {
                    for ch in line
                        .chars()
                        .take(content)
                        .skip(self.col_offset)
                        .take(visible_cols)
                    {
                        write!(frame, "{ch}")?;
                    }
                }
            } else {
                frame.write_all(b"~")?;
            }
            ansi::clear_line(frame)?;
            frame.write_all(b"\r\n")?;
        }

        // -- Command line on the reserved bottom row ------------------------

        let cmd = cmdline.as_bytes();
        let shown = cmd.len().min(visible_cols);
        frame.write_all(&cmd[..shown])?;

        // -- Cursor ---------------------------------------------------------

        // The scroll invariant keeps both differences within the visible
        // extent, which fits in u16 terminal coordinates.
        let x = cursor.effective_col(doc).saturating_sub(self.col_offset);
        let y = cursor.row().saturating_sub(self.row_offset);
        #[allow(clippy::cast_possible_truncation)]
        ansi::cursor_to(frame, x as u16, y as u16)?;
        ansi::cursor_show(frame)?;

        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
