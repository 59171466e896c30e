#![forbid(unsafe_code)]

//! Grouped, boxed log output for terminals.
//!
//! A [`LogGroup`] draws its messages inside a bordered block. Calls from the
//! same group that follow each other extend the open block in place (the
//! cursor moves up over the old bottom edge), so a stream of messages reads
//! as one box instead of a stack of boxes. A call from any other group closes
//! the block.
//!
//! ```text
//! ╭────── build ──────╮
//! │                   │
//! │  compiling core   │
//! │  compiling text   │
//! │                   │
//! ╰───────────────────╯
//! ```
//!
//! # Example
//! ```no_run
//! use grouplog::{GroupOptions, LogGroup};
//!
//! let mut main = LogGroup::new(GroupOptions::new())?;
//! let mut worker = LogGroup::new(GroupOptions::new().title("worker").color("green"))?;
//!
//! main.log(["Log 1"]);
//! main.log(["Log 2"]); // same block as "Log 1"
//! worker.log(["started"]); // new block
//! # Ok::<(), grouplog::ConfigError>(())
//! ```
//!
//! Everything above the façade lives in the member crates, re-exported as
//! [`core`], [`style`] and [`text`].

pub mod continuity;
pub mod error;
pub mod group;
pub mod options;
pub mod render;
pub mod width;

pub use continuity::{Continuity, ContinuityState, Transition};
pub use error::ConfigError;
pub use group::{LogGroup, Payload};
pub use options::{BoxSpec, GroupOptions};
pub use render::BlockRenderer;

// --- Member re-exports -----------------------------------------------------

pub use grouplog_core::{
    CaptureSink, ColumnSource, Padding, PaddingSpec, Sides, SinkOp, StdoutSink, TerminalSink,
    WriterSink, normalize,
};
pub use grouplog_style::{BoxStyle, ColorProfile, Style, StyleSheet};
pub use grouplog_text::{DebugFormat, Stringify, WrapMode};

pub use grouplog_core as core;
pub use grouplog_style as style;
pub use grouplog_text as text;
