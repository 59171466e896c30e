#![forbid(unsafe_code)]

//! The [`LogGroup`] façade.
//!
//! # Example
//! ```
//! use grouplog::{CaptureSink, ColorProfile, Continuity, GroupOptions, LogGroup};
//!
//! let sink = CaptureSink::new();
//! let options = GroupOptions::new()
//!     .title("P1")
//!     .padding(0)
//!     .fallback_width(20)
//!     .color_profile(ColorProfile::Mono);
//! let mut group = LogGroup::with_sink(options, sink.clone())?
//!     .with_continuity(Continuity::new());
//!
//! group.log(["hello"]);
//! assert_eq!(sink.screen(), vec![
//!     "╭─────── P1 ───────╮",
//!     "│  hello           │",
//!     "╰──────────────────╯",
//! ]);
//! # Ok::<(), grouplog::ConfigError>(())
//! ```

use std::borrow::Cow;
use std::fmt::{self, Debug};
use std::io;

use grouplog_core::{PaddingSpec, Sides, StdoutSink, TerminalSink, WriterSink};
use grouplog_style::{BoxStyle, ColorProfile, Painter, Style, StyleSheet};
use grouplog_text::{DebugFormat, Stringify};

use crate::continuity::Continuity;
use crate::error::ConfigError;
use crate::options::GroupOptions;
use crate::render::BlockRenderer;
use crate::width;

/// One part of a log call.
#[derive(Clone, Copy)]
pub enum Payload<'a> {
    /// Printed as is.
    Text(&'a str),
    /// Converted with the group's [`Stringify`] first.
    Value(&'a dyn Debug),
}

impl Debug for Payload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.debug_tuple("Text").field(text).finish(),
            Self::Value(value) => f.debug_tuple("Value").field(value).finish(),
        }
    }
}

impl<'a> From<&'a str> for Payload<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for Payload<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a dyn Debug> for Payload<'a> {
    fn from(value: &'a dyn Debug) -> Self {
        Self::Value(value)
    }
}

/// A titled log group drawing boxed blocks on a terminal sink.
///
/// Consecutive calls from groups with the same title (sharing one
/// [`Continuity`] context) extend a single block; any other group's call in
/// between closes it.
pub struct LogGroup<S: TerminalSink = StdoutSink> {
    options: GroupOptions,
    glyphs: BoxStyle,
    border: Painter,
    pointer: Painter,
    padding: Sides,
    sink: S,
    continuity: Continuity,
    stringify: Box<dyn Stringify + Send + Sync>,
}

impl LogGroup<StdoutSink> {
    /// Group writing to standard output, using the process-wide continuity context.
    pub fn new(options: GroupOptions) -> Result<Self, ConfigError> {
        Self::with_sink(options, WriterSink::stdout())
    }
}

impl<S: TerminalSink> LogGroup<S> {
    /// Group writing to `sink`, using the process-wide continuity context.
    ///
    /// Fails when a width bound is zero, the padding has a negative edge, or
    /// the box or color name is unknown.
    pub fn with_sink(options: GroupOptions, sink: S) -> Result<Self, ConfigError> {
        if options.fallback_width == 0 {
            return Err(ConfigError::InvalidWidth {
                field: "fallback_width",
            });
        }
        if options.max_width == 0 {
            return Err(ConfigError::InvalidWidth { field: "max_width" });
        }

        let padding = Sides::try_from(options.padding)?;
        let glyphs = options.box_style.resolve()?;

        let sheet = StyleSheet::standard();
        let style = sheet.resolve(&options.color)?;
        let pointer_style = sheet.resolve("dim")?;
        let profile = options.color_profile.unwrap_or_else(ColorProfile::detect);

        Ok(Self {
            border: Painter::new(style, profile),
            pointer: Painter::new(pointer_style, profile),
            options,
            glyphs,
            padding,
            sink,
            continuity: Continuity::global(),
            stringify: Box::new(DebugFormat::default()),
        })
    }

    /// Use `continuity` instead of the process-wide context.
    #[must_use]
    pub fn with_continuity(mut self, continuity: Continuity) -> Self {
        self.continuity = continuity;
        self
    }

    /// Convert [`Payload::Value`] parts with `stringify`.
    #[must_use]
    pub fn with_stringify(mut self, stringify: impl Stringify + Send + Sync + 'static) -> Self {
        self.stringify = Box::new(stringify);
        self
    }

    #[must_use]
    pub fn options(&self) -> &GroupOptions {
        &self.options
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.options.title
    }

    /// Validated padding.
    #[must_use]
    pub const fn padding(&self) -> Sides {
        self.padding
    }

    #[must_use]
    pub const fn box_style(&self) -> BoxStyle {
        self.glyphs
    }

    /// Resolved border style.
    #[must_use]
    pub const fn border_style(&self) -> Style {
        self.border.style()
    }

    /// Profile borders are painted with, detected or overridden.
    #[must_use]
    pub const fn color_profile(&self) -> ColorProfile {
        self.border.profile()
    }

    #[must_use]
    pub fn continuity(&self) -> &Continuity {
        &self.continuity
    }

    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    /// Replace the padding; rejected padding leaves the current one in place.
    pub fn set_padding(&mut self, padding: impl Into<PaddingSpec>) -> Result<(), ConfigError> {
        let spec = padding.into();
        self.padding = Sides::try_from(spec)?;
        self.options.padding = spec;
        Ok(())
    }

    /// Log every part in this group's block.
    ///
    /// Each part gets its own run of content rows. Sink errors are reported
    /// through tracing and otherwise ignored; use [`LogGroup::try_log`] to
    /// handle them.
    pub fn log<'a, I, P>(&mut self, parts: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<Payload<'a>>,
    {
        if let Err(err) = self.try_log(parts) {
            grouplog_core::warn!(
                title = %self.options.title,
                error = %err,
                "failed to write log group"
            );
        }
    }

    /// Log one string.
    pub fn log_str(&mut self, text: &str) {
        self.log([text]);
    }

    /// Log one structured value through the group's [`Stringify`].
    pub fn log_value(&mut self, value: &dyn Debug) {
        self.log([Payload::Value(value)]);
    }

    /// Like [`LogGroup::log`], but returns sink errors.
    pub fn try_log<'a, I, P>(&mut self, parts: I) -> io::Result<()>
    where
        I: IntoIterator<Item = P>,
        P: Into<Payload<'a>>,
    {
        let texts: Vec<Cow<'a, str>> = parts
            .into_iter()
            .map(|part| match part.into() {
                Payload::Text(text) => Cow::Borrowed(text),
                Payload::Value(value) => Cow::Owned(self.stringify.stringify(value)),
            })
            .collect();

        let base = width::base_width(
            self.sink.columns(),
            self.options.fallback_width,
            self.options.max_width,
        );
        let (transition, width) = self.continuity.enter(&self.options.title, base);

        let _span = grouplog_core::debug_span!(
            "log_group",
            title = %self.options.title,
            width
        )
        .entered();
        grouplog_core::trace!(?transition, parts = texts.len(), "log call");

        let renderer = self.renderer(width);
        if renderer.is_degraded() {
            grouplog_core::debug!(
                inner_width = renderer.inner_width(),
                "box too narrow for text, writing plain lines"
            );
        }

        for op in renderer.render_call(transition, &self.options.title, &texts) {
            self.sink.apply(&op)?;
        }
        self.sink.flush()
    }

    fn renderer(&self, width: u16) -> BlockRenderer {
        BlockRenderer::new(
            self.glyphs,
            self.border,
            self.pointer,
            self.padding,
            self.options.wrap_mode,
            width,
        )
    }
}

impl<S: TerminalSink + Debug> Debug for LogGroup<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LogGroup")
            .field("options", &self.options)
            .field("padding", &self.padding)
            .field("profile", &self.color_profile())
            .field("sink", &self.sink)
            .field("continuity", &self.continuity)
            .finish_non_exhaustive()
    }
}

/// Each `write` is one log call whose only part is the chunk, decoded as
/// UTF-8 (invalid sequences replaced). An empty chunk draws nothing.
///
/// Formatting macros may split one `write!` into several chunks; format into
/// a `String` first when a message must stay in one call.
impl<S: TerminalSink> io::Write for LogGroup<S> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        let text = String::from_utf8_lossy(buf);
        self.try_log([text.as_ref()])?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.sink.flush()
    }
}
