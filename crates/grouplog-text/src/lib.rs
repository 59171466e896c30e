#![forbid(unsafe_code)]

//! Text handling for grouplog.
//!
//! - [`wrap`] - display width, line splitting, and fixed-width chunking
//! - [`stringify`] - turning arbitrary `Debug` payloads into loggable text
//!
//! # Example
//! ```
//! use grouplog_text::{display_width, wrap_line, WrapMode};
//!
//! assert_eq!(display_width("你好"), 4);
//! assert_eq!(wrap_line("abcdefg", 3, WrapMode::Columns), vec!["abc", "def", "g"]);
//! assert_eq!(wrap_line("你好世界", 4, WrapMode::Columns), vec!["你好", "世界"]);
//! ```

pub mod stringify;
pub mod wrap;

pub use stringify::{DebugFormat, Stringify};
pub use wrap::{
    WrapMode, display_width, grapheme_count, raw_lines, wrap_line,
};
