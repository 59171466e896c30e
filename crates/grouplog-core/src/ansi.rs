#![forbid(unsafe_code)]

//! ANSI escape sequence helpers.
//!
//! | Sequence | Description |
//! |----------|-------------|
//! | `ESC [ n A` | CUU (Cursor Up) |
//! | `ESC [ n m` | SGR (Select Graphic Rendition) |

use std::io::{self, Write};

/// Move cursor up: `CSI n A`
///
/// `n == 0` writes nothing; most terminals treat `CSI 0 A` as one line.
pub fn cuu<W: Write>(w: &mut W, n: u16) -> io::Result<()> {
    if n == 0 {
        return Ok(());
    }
    write!(w, "\x1b[{n}A")
}

/// Escape sequence for [`cuu`] as a string.
#[must_use]
pub fn cuu_sequence(n: u16) -> String {
    if n == 0 {
        String::new()
    } else {
        format!("\x1b[{n}A")
    }
}

/// Remove CSI escape sequences (colors, cursor motion) from `text`.
///
/// Only `ESC [ params final` is recognized; other escapes are kept verbatim.
#[must_use]
pub fn strip_csi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if c == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            // Parameters and intermediates run until a final byte in 0x40..=0x7E.
            for next in chars.by_ref() {
                if ('\x40'..='\x7e').contains(&next) {
                    break;
                }
            }
            continue;
        }
        out.push(c);
    }

    out
}
