#![forbid(unsafe_code)]

//! Color profiles and the 16-color ANSI palette.
//!
//! Log group styles only ever use the 16 basic ANSI colors (the same set the
//! common JavaScript terminal color libraries name), so the palette is
//! modelled directly by [`Ansi16`]. The [`ColorProfile`] decides whether any
//! SGR codes are emitted at all.

use grouplog_core::TerminalCapabilities;

/// Terminal color profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    /// No color output.
    Mono,
    /// Standard 16 ANSI colors.
    Ansi16,
}

impl ColorProfile {
    /// Profile matching detected terminal capabilities.
    #[must_use]
    pub const fn from_capabilities(caps: &TerminalCapabilities) -> Self {
        if caps.color_allowed() {
            Self::Ansi16
        } else {
            Self::Mono
        }
    }

    /// Detect the profile for stdout from the environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_capabilities(&TerminalCapabilities::detect())
    }

    /// Whether any SGR color or attribute codes should be written.
    #[must_use]
    pub const fn supports_color(self) -> bool {
        !matches!(self, Self::Mono)
    }
}

/// ANSI 16-color indices (0-15).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Ansi16 {
    Black = 0,
    Red = 1,
    Green = 2,
    Yellow = 3,
    Blue = 4,
    Magenta = 5,
    Cyan = 6,
    White = 7,
    /// Also known as gray.
    BrightBlack = 8,
    BrightRed = 9,
    BrightGreen = 10,
    BrightYellow = 11,
    BrightBlue = 12,
    BrightMagenta = 13,
    BrightCyan = 14,
    BrightWhite = 15,
}

impl Ansi16 {
    /// Every palette entry in index order.
    pub const ALL: [Self; 16] = [
        Self::Black,
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
        Self::BrightBlack,
        Self::BrightRed,
        Self::BrightGreen,
        Self::BrightYellow,
        Self::BrightBlue,
        Self::BrightMagenta,
        Self::BrightCyan,
        Self::BrightWhite,
    ];

    /// Return the raw ANSI index (0-15).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Convert a `u8` index to an `Ansi16` variant, returning `None` if out of range.
    #[must_use]
    pub const fn from_u8(value: u8) -> Option<Self> {
        if value < 16 {
            Some(Self::ALL[value as usize])
        } else {
            None
        }
    }

    /// SGR parameter selecting this color as foreground (30-37, 90-97).
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        let idx = self.as_u8();
        if idx < 8 { 30 + idx } else { 90 + (idx - 8) }
    }

    /// SGR parameter selecting this color as background (40-47, 100-107).
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }
}

/// SGR parameter restoring the default foreground.
pub const FG_DEFAULT: u8 = 39;
/// SGR parameter restoring the default background.
pub const BG_DEFAULT: u8 = 49;
