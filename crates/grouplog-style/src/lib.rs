#![forbid(unsafe_code)]

//! Styling for grouplog: color profiles, named styles, and box glyph sets.
//!
//! # Role in grouplog
//! A log group is configured with a style *name* (`"dim"`, `"red"`,
//! `"bgBlue"`, ...) and a box *name* (`"round"`, `"double"`, ...). This crate
//! turns those names into a [`Style`] (via [`StyleSheet`]) and a [`BoxStyle`],
//! and a [`Painter`] applies the style to border text as SGR sequences,
//! honoring the terminal's [`ColorProfile`].
//!
//! # Example
//! ```
//! use grouplog_style::{BoxStyle, ColorProfile, Painter, StyleSheet};
//!
//! let style = StyleSheet::standard().resolve("red")?;
//! let painter = Painter::new(style, ColorProfile::Ansi16);
//! assert_eq!(painter.paint("│"), "\x1b[31m│\x1b[39m");
//!
//! let glyphs: BoxStyle = "round".parse()?;
//! assert_eq!(glyphs.top_left, '╭');
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod boxes;
pub mod color;
pub mod style;
pub mod stylesheet;

pub use boxes::{BoxStyle, UnknownBoxStyle};
pub use color::{Ansi16, ColorProfile};
pub use style::{Painter, Style, StyleFlags};
pub use stylesheet::{StyleError, StyleSheet};
