#![forbid(unsafe_code)]

//! Registry of named styles.
//!
//! Log groups name their color the way JavaScript terminal color libraries
//! do: `"dim"`, `"red"`, `"greenBright"`, `"bgYellow"`. [`StyleSheet::standard`]
//! holds all of those names; [`StyleSheet::define`] adds or overrides entries.
//! Names can be chained with `.` to combine styles, e.g. `"bold.red"`.
//!
//! # Example
//! ```
//! use grouplog_style::{Ansi16, Style, StyleSheet};
//!
//! let mut sheet = StyleSheet::standard();
//! sheet.define("failure", Style::new().fg(Ansi16::Red).bold());
//!
//! assert_eq!(sheet.resolve("failure")?, Style::new().fg(Ansi16::Red).bold());
//! assert!(sheet.resolve("chartreuse").is_err());
//! # Ok::<(), grouplog_style::StyleError>(())
//! ```

use std::collections::HashMap;
use std::fmt;

use crate::color::Ansi16;
use crate::style::{Style, StyleFlags};

/// Style name lookup failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleError {
    /// No style registered under this name.
    Unknown { name: String },
    /// Empty name or empty link in a `.` chain.
    EmptyName,
}

impl fmt::Display for StyleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown { name } => write!(f, "unknown style name: {name:?}"),
            Self::EmptyName => f.write_str("style name is empty"),
        }
    }
}

impl std::error::Error for StyleError {}

const MODIFIERS: [(&str, StyleFlags); 9] = [
    ("reset", StyleFlags::RESET),
    ("bold", StyleFlags::BOLD),
    ("dim", StyleFlags::DIM),
    ("italic", StyleFlags::ITALIC),
    ("underline", StyleFlags::UNDERLINE),
    ("overline", StyleFlags::OVERLINE),
    ("inverse", StyleFlags::INVERSE),
    ("hidden", StyleFlags::HIDDEN),
    ("strikethrough", StyleFlags::STRIKETHROUGH),
];

const BASE_COLORS: [(&str, Ansi16); 8] = [
    ("black", Ansi16::Black),
    ("red", Ansi16::Red),
    ("green", Ansi16::Green),
    ("yellow", Ansi16::Yellow),
    ("blue", Ansi16::Blue),
    ("magenta", Ansi16::Magenta),
    ("cyan", Ansi16::Cyan),
    ("white", Ansi16::White),
];

/// Map from style name to [`Style`].
#[derive(Debug, Clone, Default)]
pub struct StyleSheet {
    styles: HashMap<String, Style>,
}

impl StyleSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sheet with every standard modifier, foreground, and background name.
    ///
    /// - modifiers: `reset bold dim italic underline overline inverse hidden strikethrough`
    /// - foregrounds: `black red green yellow blue magenta cyan white`, their
    ///   `*Bright` variants, and `gray`/`grey` for `blackBright`
    /// - backgrounds: the same names prefixed with `bg` (`bgRed`, `bgGray`, ...)
    #[must_use]
    pub fn standard() -> Self {
        let mut sheet = Self::new();

        for (name, flag) in MODIFIERS {
            sheet.define(name, Style::new().flags(flag));
        }

        for (name, color) in BASE_COLORS {
            let bright = bright_variant(color);
            let capitalized = capitalize(name);

            sheet.define(name, Style::new().fg(color));
            sheet.define(format!("{name}Bright"), Style::new().fg(bright));
            sheet.define(format!("bg{capitalized}"), Style::new().bg(color));
            sheet.define(format!("bg{capitalized}Bright"), Style::new().bg(bright));
        }

        for alias in ["gray", "grey"] {
            sheet.define(alias, Style::new().fg(Ansi16::BrightBlack));
            sheet.define(
                format!("bg{}", capitalize(alias)),
                Style::new().bg(Ansi16::BrightBlack),
            );
        }

        sheet
    }

    /// Register (or replace) a named style.
    pub fn define(&mut self, name: impl Into<String>, style: Style) {
        self.styles.insert(name.into(), style);
    }

    /// Look up a single name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Style> {
        self.styles.get(name).copied()
    }

    /// Resolve a name or a `.`-separated chain of names.
    ///
    /// Later links win for colors; attribute flags accumulate.
    pub fn resolve(&self, name: &str) -> Result<Style, StyleError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StyleError::EmptyName);
        }

        name.split('.').try_fold(Style::new(), |acc, link| {
            if link.is_empty() {
                return Err(StyleError::EmptyName);
            }
            self.get(link)
                .map(|style| acc.patch(style))
                .ok_or_else(|| StyleError::Unknown {
                    name: link.to_string(),
                })
        })
    }
}

const fn bright_variant(color: Ansi16) -> Ansi16 {
    match Ansi16::from_u8(color.as_u8() + 8) {
        Some(bright) => bright,
        None => color,
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
