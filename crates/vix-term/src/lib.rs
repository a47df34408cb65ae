// SPDX-License-Identifier: MIT
//
// vix-term — Terminal I/O controller for vix.
//
// The editor's only window onto the OS terminal: raw-mode control via
// termios with guaranteed restoration on every exit path, ANSI escape
// sequence generation, a frame buffer so each repaint reaches the
// terminal as a single write, and blocking single-byte stdin reads.
//
// This crate intentionally avoids external TUI frameworks (ratatui,
// crossterm) in favor of direct terminal control via ANSI escape
// sequences and raw termios. The editor's output contract is small and
// exact — six escape sequences — and owning it outright keeps every
// byte sent to the terminal accounted for.

pub mod ansi;
pub mod input;
pub mod output;
pub mod terminal;
