#![forbid(unsafe_code)]

//! Core: terminal sinks, padding geometry, ANSI helpers, and capability detection.

pub mod ansi;
pub mod capabilities;
pub mod geometry;
pub mod logging;
pub mod sink;

pub use capabilities::TerminalCapabilities;
pub use geometry::{Edge, Padding, PaddingError, PaddingSpec, Sides, normalize};
pub use sink::{CaptureSink, ColumnSource, SinkOp, StdoutSink, TerminalSink, WriterSink};

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
