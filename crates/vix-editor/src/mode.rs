//! Modal editing.
//!
//! The editor is always in exactly one [`Mode`]. Each mode changes how the
//! next input byte is interpreted:
//!
//! | Mode      | Interprets bytes as                         |
//! |-----------|---------------------------------------------|
//! | Normal    | Motions and mode-entry commands             |
//! | Insert    | Text to insert at the cursor                |
//! | Command   | Text to append to the command line          |

use std::fmt;

/// The current editing mode.
///
/// This is a pure data type — it holds what mode we're in, not the logic
/// for handling keys. Key dispatch and mode transitions live in the binary's
/// `Editor`. The Mode enum just says "what are we doing right now."
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Default mode. Bytes are commands, not text input.
    #[default]
    Normal,
    /// Text entry mode. Printable bytes go into the document.
    Insert,
    /// Command-line mode (`:`). Bytes accumulate on the bottom line.
    Command,
}

impl Mode {
    /// Human-readable name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Insert => "INSERT",
            Self::Command => "COMMAND",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_normal() {
        assert_eq!(Mode::default(), Mode::Normal);
    }

    #[test]
    fn display_names() {
        assert_eq!(Mode::Normal.display_name(), "NORMAL");
        assert_eq!(Mode::Insert.display_name(), "INSERT");
        assert_eq!(Mode::Command.display_name(), "COMMAND");
    }

    #[test]
    fn display_trait() {
        assert_eq!(format!("{}", Mode::Insert), "INSERT");
    }

    #[test]
    fn mode_equality() {
        assert_eq!(Mode::Normal, Mode::Normal);
        assert_ne!(Mode::Normal, Mode::Insert);
        assert_ne!(Mode::Insert, Mode::Command);
    }

    #[test]
    fn mode_is_copy() {
        let a = Mode::Command;
        let b = a;
        assert_eq!(a, b);
    }
}
