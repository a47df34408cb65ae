// SPDX-License-Identifier: MIT
//
// vix — a minimal modal terminal text editor.
//
// This is the main binary that wires together the two crates:
//
//   vix-term   → raw mode, terminal size, ANSI output, byte input
//   vix-editor → document, cursor, modes, command line, viewport
//
// The Editor struct is the single owner of all editor state. Each
// keystroke flows through:
//
//   stdin → read_byte → mode dispatch → document/cursor mutation
//   → scroll fix → view.render → frame buffer → one write to stdout
//
// The loop is strictly synchronous: render, block for one byte, dispatch,
// repeat. There is no event loop, no timers, and no background work — the
// only suspension point is the blocking read.
//
// Layout:
//
//   ┌──────────────────────────────┐
//   │ document text (~ past end)   │  ← rows - 1 (managed by View)
//   ├──────────────────────────────┤
//   │ command line                 │  ← 1 row
//   └──────────────────────────────┘

use std::io;
use std::process;

use vix_editor::command::CommandLine;
use vix_editor::cursor::Cursor;
use vix_editor::document::Document;
use vix_editor::mode::Mode;
use vix_editor::view::View;

use vix_term::input::{self, CR, DEL, ESC};
use vix_term::output::OutputBuffer;
use vix_term::terminal::{Size, Terminal};

// ─── Editor ─────────────────────────────────────────────────────────────────

/// The complete editor state, owned by the main loop.
struct Editor {
    document: Document,
    cursor: Cursor,
    view: View,
    mode: Mode,
    cmdline: CommandLine,

    /// Terminal dimensions, captured once at startup. Resize signals are
    /// not handled; the viewport keeps these dimensions for the session.
    size: Size,

    /// Session-end flag. Set by the Command-mode Enter handler (and by
    /// stdin EOF in the loop); checked after every dispatched byte.
    done: bool,
}

impl Editor {
    /// Create an editor with an empty one-line document.
    fn new(size: Size) -> Self {
        Self {
            document: Document::new(),
            cursor: Cursor::new(),
            view: View::new(),
            mode: Mode::Normal,
            cmdline: CommandLine::new(),
            size,
            done: false,
        }
    }

    /// Dispatch one input byte through the interpreter for the current
    /// mode, then restore the viewport containment invariant.
    fn handle_byte(&mut self, byte: u8) {
        match self.mode {
            Mode::Normal => self.handle_normal(byte),
            Mode::Insert => self.handle_insert(byte),
            Mode::Command => self.handle_command(byte),
        }

        self.view.scroll(
            self.cursor.row(),
            self.cursor.effective_col(&self.document),
            self.size,
        );
    }

    /// Normal mode: motions and mode-entry commands. Unrecognized bytes
    /// are no-ops.
    fn handle_normal(&mut self, byte: u8) {
        match byte {
            // Motions.
            b'h' => self.cursor.move_left(&self.document),
            b'l' => self.cursor.move_right(&self.document),
            b'j' => self.cursor.move_down(&self.document),
            b'k' => self.cursor.move_up(),
            b'w' => self.cursor.word_forward(&self.document),

            // Insert-mode entries, each with its cursor side effect.
            b'i' => {
                self.cursor.clamp_col(&self.document);
                self.mode = Mode::Insert;
            }
            b'a' => {
                self.cursor.move_right(&self.document);
                self.mode = Mode::Insert;
            }
            b'I' => {
                self.cursor.move_to_first_non_blank(&self.document);
                self.mode = Mode::Insert;
            }
            b'A' => {
                self.cursor.move_to_line_end(&self.document);
                self.mode = Mode::Insert;
            }
            b'o' => {
                let row = self.cursor.row();
                self.document.open_below(row);
                self.cursor.place(&self.document, row + 1, 0);
                self.mode = Mode::Insert;
            }

            // Command mode.
            b':' => self.mode = Mode::Command,

            _ => {}
        }
    }

    /// Insert mode: printable bytes go into the document; Enter splits the
    /// line; Backspace deletes within the line (never joins lines); Escape
    /// returns to Normal. Everything else is a no-op.
    fn handle_insert(&mut self, byte: u8) {
        match byte {
            ESC => self.mode = Mode::Normal,
            CR => {
                let row = self.cursor.row();
                let col = self.cursor.effective_col(&self.document);
                self.document.split_line(row, col);
                self.cursor.place(&self.document, row + 1, 0);
            }
            DEL => {
                let row = self.cursor.row();
                let col = self.cursor.effective_col(&self.document);
                // At column 0 this is a no-op: no join with the previous line.
                if col > 0 {
                    self.document.delete_char(row, col - 1);
                    self.cursor.place(&self.document, row, col - 1);
                }
            }
            0x20..=0x7e => {
                let row = self.cursor.row();
                let col = self.cursor.effective_col(&self.document);
                self.document.insert_char(row, col, char::from(byte));
                self.cursor.place(&self.document, row, col + 1);
            }
            _ => {}
        }
    }

    /// Command mode: Enter ends the session (the collected text is never
    /// interpreted); Escape returns to Normal leaving the buffer populated;
    /// every other byte is appended.
    fn handle_command(&mut self, byte: u8) {
        match byte {
            CR => self.done = true,
            ESC => self.mode = Mode::Normal,
            _ => self.cmdline.push(byte),
        }
    }

    /// Build the current frame into `frame`. The caller flushes it to the
    /// terminal as a single write.
    fn paint(&self, frame: &mut OutputBuffer) -> io::Result<()> {
        self.view.render(
            &self.document,
            &self.cursor,
            &self.cmdline,
            self.size,
            frame,
        )
    }
}

// ─── Main loop ──────────────────────────────────────────────────────────────

/// Render, block for one byte, dispatch, repeat — until the Command-mode
/// Enter handler sets `done` or stdin reaches EOF.
fn run(editor: &mut Editor) -> io::Result<()> {
    let mut frame = OutputBuffer::new();

    while !editor.done {
        editor.paint(&mut frame)?;
        frame.flush_stdout()?;

        let Some(byte) = input::read_byte()? else {
            break;
        };
        editor.handle_byte(byte);
    }

    Ok(())
}

// ─── Entry point ────────────────────────────────────────────────────────────

fn main() {
    let mut terminal = Terminal::new().unwrap_or_else(|e| {
        eprintln!("vix: failed to initialize terminal: {e}");
        process::exit(1);
    });

    if let Err(e) = terminal.enter() {
        eprintln!("vix: failed to enter raw mode: {e}");
        process::exit(1);
    }

    let mut editor = Editor::new(terminal.size());
    let result = run(&mut editor);

    // Restore cooked mode before reporting anything. Drop would also
    // restore, but an explicit leave surfaces restore errors.
    let restored = terminal.leave();

    if let Err(e) = result.and(restored) {
        eprintln!("vix: {e}");
        process::exit(1);
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
