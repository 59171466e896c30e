#![forbid(unsafe_code)]

//! Fixed-width chunking of log lines.
//!
//! A log payload is first split into raw lines ([`raw_lines`]); every raw line
//! is then cut into consecutive segments that fit the interior of a box
//! ([`wrap_line`]). Segments are never trimmed or re-flowed: concatenating
//! them gives back the raw line exactly.
//!
//! Two chunking modes exist:
//! - [`WrapMode::Columns`] measures display width and never splits a grapheme
//!   cluster (CJK characters count as 2 cells, combining marks as 0).
//! - [`WrapMode::Chars`] counts Unicode scalar values, ignoring display width.
//!   Wide characters can then overflow the box; the mode exists for output
//!   that must match older renderers byte for byte.
//!
//! # Example
//! ```
//! use grouplog_text::wrap::{wrap_line, WrapMode};
//!
//! assert_eq!(wrap_line("hello world", 5, WrapMode::Columns), vec!["hello", " worl", "d"]);
//! // Same width budget, but counting characters instead of cells:
//! assert_eq!(wrap_line("你好世界", 2, WrapMode::Chars), vec!["你好", "世界"]);
//! assert_eq!(wrap_line("你好世界", 2, WrapMode::Columns), vec!["你", "好", "世", "界"]);
//! ```

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// How a line is cut into segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WrapMode {
    /// Fill each segment up to the width limit in terminal cells.
    #[default]
    Columns,
    /// Fill each segment up to the width limit in Unicode scalar values.
    Chars,
}

/// Split a payload into raw lines on `\n`, dropping a trailing `\r`.
///
/// Empty lines are kept, including a final one after a trailing newline.
pub fn raw_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
}

/// Cut one raw line into segments of at most `width` units.
///
/// An empty line yields no segments. A `width` of zero yields the line
/// unchanged as a single segment (callers treat that case as "cannot wrap").
#[must_use]
pub fn wrap_line(line: &str, width: usize, mode: WrapMode) -> Vec<String> {
    if line.is_empty() {
        return Vec::new();
    }
    if width == 0 {
        return vec![line.to_string()];
    }

    match mode {
        WrapMode::Columns => chunk_columns(line, width),
        WrapMode::Chars => chunk_chars(line, width),
    }
}

/// Chunk by display width at grapheme boundaries.
fn chunk_columns(line: &str, width: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for grapheme in line.graphemes(true) {
        let grapheme_width = grapheme.width();

        // A grapheme wider than the limit still gets a segment of its own.
        if current_width + grapheme_width > width && !current.is_empty() {
            segments.push(std::mem::take(&mut current));
            current_width = 0;
        }

        current.push_str(grapheme);
        current_width += grapheme_width;
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Chunk every `width` scalar values.
fn chunk_chars(line: &str, width: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut count = 0;

    for c in line.chars() {
        if count == width {
            segments.push(std::mem::take(&mut current));
            count = 0;
        }
        current.push(c);
        count += 1;
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

/// Calculate the display width of text in cells.
#[inline]
#[must_use]
pub fn display_width(text: &str) -> usize {
    text.width()
}

/// Number of extended grapheme clusters in `text`.
#[must_use]
pub fn grapheme_count(text: &str) -> usize {
    text.graphemes(true).count()
}
