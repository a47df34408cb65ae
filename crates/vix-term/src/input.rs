// SPDX-License-Identifier: MIT
//
// Blocking byte input from stdin.
//
// The editor consumes exactly one raw byte per loop iteration. With the
// terminal in raw mode (VMIN=1, VTIME=0), a read blocks until one byte is
// available and returns it unprocessed — no line buffering, no echo, no
// signal keys. This module is the thin seam over that read, plus the byte
// constants the key interpreters match on.

use std::io::{self, ErrorKind, Read};

// ─── Key bytes ───────────────────────────────────────────────────────────────

/// Escape (`0x1b`) — leaves Insert and Command mode.
pub const ESC: u8 = 0x1b;

/// Carriage return (`0x0d`) — the Enter key in raw mode.
pub const CR: u8 = 0x0d;

/// Delete (`0x7f`) — the Backspace key on modern terminals.
pub const DEL: u8 = 0x7f;

// ─── Reading ─────────────────────────────────────────────────────────────────

/// Read one byte from stdin, blocking until it arrives.
///
/// Returns `Ok(None)` on end of input (stdin closed). Interrupted reads
/// are retried.
///
/// # Errors
///
/// Returns any non-`Interrupted` I/O error from the underlying read.
pub fn read_byte() -> io::Result<Option<u8>> {
    read_byte_from(&mut io::stdin().lock())
}

/// Read one byte from an arbitrary reader, blocking until it arrives.
///
/// The seam behind [`read_byte`], generic so tests can drive the loop from
/// an in-memory reader.
///
/// # Errors
///
/// Returns any non-`Interrupted` I/O error from the underlying read.
pub fn read_byte_from(r: &mut impl Read) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match r.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == ErrorKind::Interrupted => {}
            Err(e) => return Err(e),
        }
    }
}

// ─── Tests ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn key_byte_values() {
        assert_eq!(ESC, 0x1b);
        assert_eq!(CR, 0x0d);
        assert_eq!(DEL, 0x7f);
    }

    #[test]
    fn reads_one_byte_at_a_time() {
        let mut input: &[u8] = b"ab";
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(b'a'));
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(b'b'));
        assert_eq!(read_byte_from(&mut input).unwrap(), None);
    }

    #[test]
    fn eof_returns_none() {
        let mut input: &[u8] = b"";
        assert_eq!(read_byte_from(&mut input).unwrap(), None);
    }

    #[test]
    fn passes_raw_bytes_through() {
        let mut input: &[u8] = &[ESC, CR, DEL, 0x00, 0xff];
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(ESC));
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(CR));
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(DEL));
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(0x00));
        assert_eq!(read_byte_from(&mut input).unwrap(), Some(0xff));
    }

    #[test]
    fn retries_interrupted_reads() {
        struct Interrupting {
            interrupts_left: usize,
        }

        impl Read for Interrupting {
            fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
                if self.interrupts_left > 0 {
                    self.interrupts_left -= 1;
                    return Err(io::Error::from(ErrorKind::Interrupted));
                }
                buf[0] = b'x';
                Ok(1)
            }
        }

        let mut r = Interrupting { interrupts_left: 3 };
        assert_eq!(read_byte_from(&mut r).unwrap(), Some(b'x'));
    }

    #[test]
    fn propagates_real_errors() {
        struct Failing;

        impl Read for Failing {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::from(ErrorKind::BrokenPipe))
            }
        }

        let err = read_byte_from(&mut Failing).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::BrokenPipe);
    }
}
