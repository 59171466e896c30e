#![forbid(unsafe_code)]

//! Box-drawing glyph sets.
//!
//! | Name | Sample |
//! |------|--------|
//! | `single` | `┌─┐ │ └─┘` |
//! | `double` | `╔═╗ ║ ╚═╝` |
//! | `round` | `╭─╮ │ ╰─╯` |
//! | `bold` | `┏━┓ ┃ ┗━┛` |
//! | `singleDouble` | `╓─╖ ║ ╙─╜` |
//! | `doubleSingle` | `╒═╕ │ ╘═╛` |
//! | `classic` | `+-+ \| +-+` |
//! | `arrow` | `↘↓↙ ← ↗↓↖` |
//!
//! Names are matched case-insensitively, ignoring `_` and `-`, so
//! `singleDouble`, `single_double` and `single-double` are the same style.

use std::fmt;
use std::str::FromStr;

/// Characters used to draw a box border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxStyle {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
}

impl BoxStyle {
    /// Light lines with square corners.
    pub const SINGLE: Self = Self {
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
        horizontal: '─',
        vertical: '│',
    };

    /// Double lines.
    pub const DOUBLE: Self = Self {
        top_left: '╔',
        top_right: '╗',
        bottom_left: '╚',
        bottom_right: '╝',
        horizontal: '═',
        vertical: '║',
    };

    /// Light lines with rounded corners.
    pub const ROUND: Self = Self {
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
        horizontal: '─',
        vertical: '│',
    };

    /// Heavy lines.
    pub const BOLD: Self = Self {
        top_left: '┏',
        top_right: '┓',
        bottom_left: '┗',
        bottom_right: '┛',
        horizontal: '━',
        vertical: '┃',
    };

    /// Single horizontal, double vertical.
    pub const SINGLE_DOUBLE: Self = Self {
        top_left: '╓',
        top_right: '╖',
        bottom_left: '╙',
        bottom_right: '╜',
        horizontal: '─',
        vertical: '║',
    };

    /// Double horizontal, single vertical.
    pub const DOUBLE_SINGLE: Self = Self {
        top_left: '╒',
        top_right: '╕',
        bottom_left: '╘',
        bottom_right: '╛',
        horizontal: '═',
        vertical: '│',
    };

    /// ASCII only.
    pub const CLASSIC: Self = Self {
        top_left: '+',
        top_right: '+',
        bottom_left: '+',
        bottom_right: '+',
        horizontal: '-',
        vertical: '|',
    };

    /// Arrows pointing into the box.
    pub const ARROW: Self = Self {
        top_left: '↘',
        top_right: '↙',
        bottom_left: '↗',
        bottom_right: '↖',
        horizontal: '↓',
        vertical: '←',
    };

    /// Registered styles under their canonical names.
    pub const NAMED: [(&'static str, Self); 8] = [
        ("single", Self::SINGLE),
        ("double", Self::DOUBLE),
        ("round", Self::ROUND),
        ("bold", Self::BOLD),
        ("singleDouble", Self::SINGLE_DOUBLE),
        ("doubleSingle", Self::DOUBLE_SINGLE),
        ("classic", Self::CLASSIC),
        ("arrow", Self::ARROW),
    ];

    /// Look up a registered style by name.
    pub fn from_name(name: &str) -> Result<Self, UnknownBoxStyle> {
        let key = fold_name(name);
        Self::NAMED
            .iter()
            .find(|(canonical, _)| fold_name(canonical) == key)
            .map(|(_, style)| *style)
            .ok_or_else(|| UnknownBoxStyle {
                name: name.to_string(),
            })
    }

    /// Canonical names of every registered style.
    pub fn names() -> impl Iterator<Item = &'static str> {
        Self::NAMED.iter().map(|(name, _)| *name)
    }
}

impl Default for BoxStyle {
    fn default() -> Self {
        Self::ROUND
    }
}

impl FromStr for BoxStyle {
    type Err = UnknownBoxStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

fn fold_name(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| *c != '_' && *c != '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// A box style name that is not registered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownBoxStyle {
    pub name: String,
}

impl fmt::Display for UnknownBoxStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown box style {:?} (expected one of: ", self.name)?;
        for (idx, name) in BoxStyle::names().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            f.write_str(name)?;
        }
        f.write_str(")")
    }
}

impl std::error::Error for UnknownBoxStyle {}
