#![forbid(unsafe_code)]

//! Stringification of non-text payloads.
//!
//! Log groups print strings verbatim; everything else goes through a
//! [`Stringify`] implementation first. The default is the value's pretty
//! [`Debug`] form (`{:#?}`), which spreads structs and collections over
//! several lines that the box then wraps individually.
//!
//! # Example
//!
//! ```
//! use grouplog_text::stringify::{DebugFormat, Stringify};
//!
//! let text = DebugFormat::compact().stringify(&vec![1, 2, 3]);
//! assert_eq!(text, "[1, 2, 3]");
//! ```

use std::fmt::Debug;

/// Converts a structured value into loggable text.
pub trait Stringify {
    /// Render `value` as text (may contain newlines).
    fn stringify(&self, value: &dyn Debug) -> String;
}

/// [`Stringify`] using the value's `Debug` implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DebugFormat {
    compact: bool,
}

impl DebugFormat {
    /// Multi-line `{:#?}` output.
    #[must_use]
    pub const fn pretty() -> Self {
        Self { compact: false }
    }

    /// Single-line `{:?}` output.
    #[must_use]
    pub const fn compact() -> Self {
        Self { compact: true }
    }

    /// Whether this formatter produces single-line output.
    #[must_use]
    pub const fn is_compact(&self) -> bool {
        self.compact
    }
}

impl Default for DebugFormat {
    fn default() -> Self {
        Self::pretty()
    }
}

impl Stringify for DebugFormat {
    fn stringify(&self, value: &dyn Debug) -> String {
        if self.compact {
            format!("{value:?}")
        } else {
            format!("{value:#?}")
        }
    }
}

impl<F> Stringify for F
where
    F: Fn(&dyn Debug) -> String,
{
    fn stringify(&self, value: &dyn Debug) -> String {
        self(value)
    }
}
