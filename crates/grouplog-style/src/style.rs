#![forbid(unsafe_code)]

//! Text styles and SGR painting.
//!
//! A [`Style`] is a foreground, a background, and a set of attribute
//! [`StyleFlags`]. [`Painter`] wraps text in the matching open/close SGR
//! pairs, one sequence per attribute, e.g. `dim` gives `ESC[2m ... ESC[22m`.
//!
//! | Attribute | Open | Close |
//! |-----------|------|-------|
//! | reset | 0 | 0 |
//! | bold | 1 | 22 |
//! | dim | 2 | 22 |
//! | italic | 3 | 23 |
//! | underline | 4 | 24 |
//! | inverse | 7 | 27 |
//! | hidden | 8 | 28 |
//! | strikethrough | 9 | 29 |
//! | overline | 53 | 55 |
//! | foreground | 30-37, 90-97 | 39 |
//! | background | 40-47, 100-107 | 49 |

use crate::color::{Ansi16, BG_DEFAULT, ColorProfile, FG_DEFAULT};

bitflags::bitflags! {
    /// Text attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        /// Reset all attributes.
        const RESET         = 0b0000_0000_0001;
        /// Bold / increased intensity.
        const BOLD          = 0b0000_0000_0010;
        /// Dim / decreased intensity.
        const DIM           = 0b0000_0000_0100;
        /// Italic text.
        const ITALIC        = 0b0000_0000_1000;
        /// Underlined text.
        const UNDERLINE     = 0b0000_0001_0000;
        /// Reverse video (swap fg/bg).
        const INVERSE       = 0b0000_0010_0000;
        /// Hidden / invisible text.
        const HIDDEN        = 0b0000_0100_0000;
        /// Strikethrough text.
        const STRIKETHROUGH = 0b0000_1000_0000;
        /// Line over the text.
        const OVERLINE      = 0b0001_0000_0000;
    }
}

/// SGR open/close parameter pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct SgrPair {
    open: u8,
    close: u8,
}

/// Attribute flags in emission order.
const FLAG_TABLE: [(StyleFlags, SgrPair); 9] = [
    (StyleFlags::RESET, SgrPair { open: 0, close: 0 }),
    (StyleFlags::BOLD, SgrPair { open: 1, close: 22 }),
    (StyleFlags::DIM, SgrPair { open: 2, close: 22 }),
    (StyleFlags::ITALIC, SgrPair { open: 3, close: 23 }),
    (StyleFlags::UNDERLINE, SgrPair { open: 4, close: 24 }),
    (StyleFlags::INVERSE, SgrPair { open: 7, close: 27 }),
    (StyleFlags::HIDDEN, SgrPair { open: 8, close: 28 }),
    (StyleFlags::STRIKETHROUGH, SgrPair { open: 9, close: 29 }),
    (StyleFlags::OVERLINE, SgrPair { open: 53, close: 55 }),
];

/// Foreground, background, and attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
    pub fg: Option<Ansi16>,
    pub bg: Option<Ansi16>,
    pub flags: StyleFlags,
}

impl Style {
    /// Empty style; painting with it leaves text untouched.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            flags: StyleFlags::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Ansi16) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Ansi16) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add attribute flags.
    #[must_use]
    pub const fn flags(mut self, flags: StyleFlags) -> Self {
        self.flags = self.flags.union(flags);
        self
    }

    #[must_use]
    pub const fn bold(self) -> Self {
        self.flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub const fn dim(self) -> Self {
        self.flags(StyleFlags::DIM)
    }

    #[must_use]
    pub const fn italic(self) -> Self {
        self.flags(StyleFlags::ITALIC)
    }

    #[must_use]
    pub const fn underline(self) -> Self {
        self.flags(StyleFlags::UNDERLINE)
    }

    /// Whether the style has no effect.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags.is_empty()
    }

    /// Layer `other` on top of `self`: colors set in `other` win, flags add up.
    #[must_use]
    pub const fn patch(self, other: Self) -> Self {
        Self {
            fg: match other.fg {
                Some(fg) => Some(fg),
                None => self.fg,
            },
            bg: match other.bg {
                Some(bg) => Some(bg),
                None => self.bg,
            },
            flags: self.flags.union(other.flags),
        }
    }

    /// SGR open/close pairs for this style, outermost first.
    fn sgr_pairs(&self) -> Vec<SgrPair> {
        let mut pairs: Vec<SgrPair> = FLAG_TABLE
            .iter()
            .filter(|(flag, _)| self.flags.contains(*flag))
            .map(|(_, pair)| *pair)
            .collect();
        if let Some(fg) = self.fg {
            pairs.push(SgrPair {
                open: fg.fg_code(),
                close: FG_DEFAULT,
            });
        }
        if let Some(bg) = self.bg {
            pairs.push(SgrPair {
                open: bg.bg_code(),
                close: BG_DEFAULT,
            });
        }
        pairs
    }
}

/// Applies a [`Style`] to text for a given [`ColorProfile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Painter {
    style: Style,
    profile: ColorProfile,
}

impl Painter {
    #[must_use]
    pub const fn new(style: Style, profile: ColorProfile) -> Self {
        Self { style, profile }
    }

    /// Painter that never emits escape codes.
    #[must_use]
    pub const fn plain() -> Self {
        Self::new(Style::new(), ColorProfile::Mono)
    }

    #[must_use]
    pub const fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub const fn profile(&self) -> ColorProfile {
        self.profile
    }

    /// Wrap `text` in the style's SGR sequences.
    ///
    /// Empty text, an empty style, or a [`ColorProfile::Mono`] profile return
    /// the text unchanged. A close sequence already inside `text` is followed
    /// by the matching open sequence again, so nested styling does not cut
    /// the outer style short.
    #[must_use]
    pub fn paint(&self, text: &str) -> String {
        if text.is_empty() || self.style.is_empty() || !self.profile.supports_color() {
            return text.to_string();
        }

        let pairs = self.style.sgr_pairs();
        let mut body = text.to_string();
        for pair in &pairs {
            let close = sgr(pair.close);
            if body.contains(&close) {
                body = body.replace(&close, &format!("{close}{}", sgr(pair.open)));
            }
        }

        let mut out = String::with_capacity(body.len() + pairs.len() * 10);
        for pair in &pairs {
            out.push_str(&sgr(pair.open));
        }
        out.push_str(&body);
        for pair in pairs.iter().rev() {
            out.push_str(&sgr(pair.close));
        }
        out
    }
}

fn sgr(param: u8) -> String {
    format!("\x1b[{param}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ansi(style: Style) -> Painter {
        Painter::new(style, ColorProfile::Ansi16)
    }

    #[test]
    fn dim_wraps_in_2_22() {
        assert_eq!(ansi(Style::new().dim()).paint("›"), "\x1b[2m›\x1b[22m");
    }

    #[test]
    fn foreground_closes_with_39() {
        assert_eq!(
            ansi(Style::new().fg(Ansi16::Green)).paint("ok"),
            "\x1b[32mok\x1b[39m"
        );
    }

    #[test]
    fn background_closes_with_49() {
        assert_eq!(
            ansi(Style::new().bg(Ansi16::BrightBlue)).paint("x"),
            "\x1b[104mx\x1b[49m"
        );
    }

    #[test]
    fn combined_style_nests_in_order() {
        let style = Style::new().bold().fg(Ansi16::Red);
        assert_eq!(ansi(style).paint("e"), "\x1b[1m\x1b[31me\x1b[39m\x1b[22m");
    }

    #[test]
    fn reset_uses_zero_both_ways() {
        let style = Style::new().flags(StyleFlags::RESET);
        assert_eq!(ansi(style).paint("r"), "\x1b[0mr\x1b[0m");
    }

    #[test]
    fn mono_profile_is_plain() {
        let painter = Painter::new(Style::new().dim(), ColorProfile::Mono);
        assert_eq!(painter.paint("│"), "│");
        assert_eq!(Painter::plain().paint("│"), "│");
    }

    #[test]
    fn empty_text_gets_no_codes() {
        assert_eq!(ansi(Style::new().dim()).paint(""), "");
    }

    #[test]
    fn empty_style_gets_no_codes() {
        assert_eq!(ansi(Style::new()).paint("abc"), "abc");
    }

    #[test]
    fn inner_close_reopens_outer_style() {
        let inner = ansi(Style::new().fg(Ansi16::Red)).paint("a");
        let outer = ansi(Style::new().fg(Ansi16::Blue)).paint(&format!("{inner}b"));
        assert_eq!(
            outer,
            "\x1b[34m\x1b[31ma\x1b[39m\x1b[34mb\x1b[39m"
        );
    }

    #[test]
    fn patch_layers_styles() {
        let base = Style::new().fg(Ansi16::Red).dim();
        let patched = base.patch(Style::new().fg(Ansi16::Cyan).bold());
        assert_eq!(patched.fg, Some(Ansi16::Cyan));
        assert!(patched.flags.contains(StyleFlags::DIM | StyleFlags::BOLD));
        assert_eq!(base.patch(Style::new()), base);
    }

    #[test]
    fn accessors_report_construction_values() {
        let painter = Painter::new(Style::new().dim(), ColorProfile::Ansi16);
        assert_eq!(painter.profile(), ColorProfile::Ansi16);
        assert_eq!(painter.style(), Style::new().dim());
    }

    #[test]
    fn every_attribute_closes_in_reverse_order() {
        let style = Style::new()
            .flags(StyleFlags::ITALIC | StyleFlags::OVERLINE)
            .bg(Ansi16::Black);
        assert_eq!(
            ansi(style).paint("t"),
            "\x1b[3m\x1b[53m\x1b[40mt\x1b[49m\x1b[55m\x1b[23m"
        );
    }
}
