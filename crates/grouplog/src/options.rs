#![forbid(unsafe_code)]

//! Log group configuration.
//!
//! ```
//! use grouplog::{BoxStyle, GroupOptions};
//!
//! let options = GroupOptions::new()
//!     .title("Process 1")
//!     .color("green")
//!     .padding(0)
//!     .box_style("classic")
//!     .fallback_width(20)
//!     .max_width(50);
//!
//! assert_eq!(options.box_style.resolve()?, BoxStyle::CLASSIC);
//! # Ok::<(), grouplog::style::UnknownBoxStyle>(())
//! ```

use grouplog_core::PaddingSpec;
use grouplog_style::{BoxStyle, ColorProfile, UnknownBoxStyle};
use grouplog_text::WrapMode;

/// Style name used when none is given.
pub const DEFAULT_COLOR: &str = "dim";
/// Block width when the terminal width is unknown.
pub const DEFAULT_FALLBACK_WIDTH: u16 = 50;
/// Upper bound on the block width.
pub const DEFAULT_MAX_WIDTH: u16 = 1000;

/// A box glyph set, by registry name or given directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoxSpec {
    Named(String),
    Custom(BoxStyle),
}

impl BoxSpec {
    /// The glyphs this box spec names.
    pub fn resolve(&self) -> Result<BoxStyle, UnknownBoxStyle> {
        match self {
            Self::Named(name) => BoxStyle::from_name(name),
            Self::Custom(style) => Ok(*style),
        }
    }
}

impl Default for BoxSpec {
    fn default() -> Self {
        Self::Custom(BoxStyle::ROUND)
    }
}

impl From<BoxStyle> for BoxSpec {
    fn from(style: BoxStyle) -> Self {
        Self::Custom(style)
    }
}

impl From<&str> for BoxSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for BoxSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Configuration for one [`LogGroup`](crate::LogGroup).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupOptions {
    /// Group title; also the continuity key. Empty means untitled.
    pub title: String,
    /// Style name for borders and title, resolved through the standard style sheet.
    pub color: String,
    pub box_style: BoxSpec,
    pub padding: PaddingSpec,
    /// Width used when the sink cannot report its column count.
    pub fallback_width: u16,
    pub max_width: u16,
    pub wrap_mode: WrapMode,
    /// Overrides the detected color profile.
    pub color_profile: Option<ColorProfile>,
}

impl Default for GroupOptions {
    fn default() -> Self {
        Self {
            title: String::new(),
            color: DEFAULT_COLOR.to_string(),
            box_style: BoxSpec::default(),
            padding: PaddingSpec::default(),
            fallback_width: DEFAULT_FALLBACK_WIDTH,
            max_width: DEFAULT_MAX_WIDTH,
            wrap_mode: WrapMode::default(),
            color_profile: None,
        }
    }
}

impl GroupOptions {
    /// Options with every default applied.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = color.into();
        self
    }

    #[must_use]
    pub fn box_style(mut self, box_style: impl Into<BoxSpec>) -> Self {
        self.box_style = box_style.into();
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: impl Into<PaddingSpec>) -> Self {
        self.padding = padding.into();
        self
    }

    #[must_use]
    pub fn fallback_width(mut self, width: u16) -> Self {
        self.fallback_width = width;
        self
    }

    #[must_use]
    pub fn max_width(mut self, width: u16) -> Self {
        self.max_width = width;
        self
    }

    #[must_use]
    pub fn wrap_mode(mut self, mode: WrapMode) -> Self {
        self.wrap_mode = mode;
        self
    }

    /// Force a color profile instead of detecting one.
    #[must_use]
    pub fn color_profile(mut self, profile: ColorProfile) -> Self {
        self.color_profile = Some(profile);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let options = GroupOptions::default();
        assert_eq!(options.title, "");
        assert_eq!(options.color, "dim");
        assert_eq!(options.box_style, BoxSpec::Custom(BoxStyle::ROUND));
        assert_eq!(options.padding, PaddingSpec::Uniform(1));
        assert_eq!(options.fallback_width, 50);
        assert_eq!(options.max_width, 1000);
        assert_eq!(options.wrap_mode, WrapMode::Columns);
        assert_eq!(options.color_profile, None);
    }

    #[test]
    fn builder_sets_fields() {
        let options = GroupOptions::new()
            .title("build")
            .color("red")
            .box_style(BoxStyle::DOUBLE)
            .padding((0, 2))
            .fallback_width(30)
            .max_width(40)
            .wrap_mode(WrapMode::Chars)
            .color_profile(ColorProfile::Mono);

        assert_eq!(options.title, "build");
        assert_eq!(options.color, "red");
        assert_eq!(options.box_style, BoxSpec::Custom(BoxStyle::DOUBLE));
        assert_eq!(options.padding, PaddingSpec::from((0, 2)));
        assert_eq!((options.fallback_width, options.max_width), (30, 40));
        assert_eq!(options.wrap_mode, WrapMode::Chars);
        assert_eq!(options.color_profile, Some(ColorProfile::Mono));
    }

    #[test]
    fn named_box_resolves_lazily() {
        let spec = BoxSpec::from("nope");
        assert!(spec.resolve().is_err());
        assert_eq!(BoxSpec::from("bold").resolve(), Ok(BoxStyle::BOLD));
    }
}
