#![forbid(unsafe_code)]

//! Terminal sinks.
//!
//! Everything a log group puts on screen goes through a [`TerminalSink`]:
//! styled text, the "move cursor up N lines" used to reopen a block, and the
//! plain fallback line used when a box is too narrow to hold any text.
//! Rendering code produces [`SinkOp`]s and never touches stdout directly.
//!
//! Two sinks ship with the crate:
//! - [`WriterSink`] writes to any [`io::Write`] (stdout via [`WriterSink::stdout`])
//! - [`CaptureSink`] records operations in memory for tests
//!
//! ```
//! use grouplog_core::sink::{CaptureSink, SinkOp, TerminalSink};
//!
//! let mut sink = CaptureSink::new();
//! sink.apply(&SinkOp::Write("one\n".into()))?;
//! sink.apply(&SinkOp::Write("two\n".into()))?;
//! sink.apply(&SinkOp::MoveUp(1))?;
//! sink.apply(&SinkOp::Write("TWO\n".into()))?;
//!
//! assert_eq!(sink.screen(), vec!["one", "TWO"]);
//! # Ok::<(), std::io::Error>(())
//! ```

use std::io::{self, Write};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::ansi;
use crate::capabilities::TerminalCapabilities;

/// One primitive terminal operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkOp {
    /// Raw text, possibly containing SGR sequences and newlines.
    Write(String),
    /// Move the cursor up this many lines.
    MoveUp(u16),
    /// A line written without any decoration (newline appended by the sink).
    Plain(String),
}

/// Destination for rendered log output.
pub trait TerminalSink {
    /// Write raw text.
    fn write_text(&mut self, text: &str) -> io::Result<()>;

    /// Move the cursor up `lines` lines.
    fn move_up(&mut self, lines: u16) -> io::Result<()>;

    /// Write an undecorated line followed by a newline.
    fn write_plain_line(&mut self, line: &str) -> io::Result<()> {
        self.write_text(line)?;
        self.write_text("\n")
    }

    /// Current terminal width in columns, `None` when unknown.
    fn columns(&self) -> Option<u16>;

    /// Flush buffered output.
    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }

    /// Dispatch a [`SinkOp`].
    fn apply(&mut self, op: &SinkOp) -> io::Result<()> {
        match op {
            SinkOp::Write(text) => self.write_text(text),
            SinkOp::MoveUp(lines) => self.move_up(*lines),
            SinkOp::Plain(line) => self.write_plain_line(line),
        }
    }
}

impl<S: TerminalSink + ?Sized> TerminalSink for &mut S {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        (**self).write_text(text)
    }

    fn move_up(&mut self, lines: u16) -> io::Result<()> {
        (**self).move_up(lines)
    }

    fn write_plain_line(&mut self, line: &str) -> io::Result<()> {
        (**self).write_plain_line(line)
    }

    fn columns(&self) -> Option<u16> {
        (**self).columns()
    }

    fn flush(&mut self) -> io::Result<()> {
        (**self).flush()
    }
}

// ============================================================================
// Writer sink
// ============================================================================

/// Where a [`WriterSink`] gets its column count from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSource {
    /// Query the controlling terminal when the output is one, falling back
    /// to a `COLUMNS` hint.
    ///
    /// With `is_tty == false` (piped or redirected output) the terminal is
    /// never queried: its size says nothing about the destination.
    Terminal { hint: Option<u16>, is_tty: bool },
    /// Fixed width (e.g. writing to a file with a known layout).
    Fixed(u16),
    /// Width is never known; groups use their fallback width.
    Unknown,
}

impl ColumnSource {
    fn resolve(&self) -> Option<u16> {
        let columns = match *self {
            Self::Terminal { hint, is_tty: true } => {
                query_terminal_columns().filter(|cols| *cols > 0).or(hint)
            }
            Self::Terminal { hint, is_tty: false } => hint,
            Self::Fixed(cols) => Some(cols),
            Self::Unknown => None,
        };
        columns.filter(|cols| *cols > 0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn query_terminal_columns() -> Option<u16> {
    crossterm::terminal::size().ok().map(|(cols, _rows)| cols)
}

#[cfg(target_arch = "wasm32")]
fn query_terminal_columns() -> Option<u16> {
    None
}

/// Sink writing to an [`io::Write`].
#[derive(Debug)]
pub struct WriterSink<W: Write> {
    writer: W,
    columns: ColumnSource,
}

/// Sink for the process's standard output.
pub type StdoutSink = WriterSink<io::Stdout>;

impl WriterSink<io::Stdout> {
    /// Standard output, sized by the controlling terminal when stdout is one.
    #[must_use]
    pub fn stdout() -> Self {
        let caps = TerminalCapabilities::detect();
        Self::new(
            io::stdout(),
            ColumnSource::Terminal {
                hint: caps.columns_hint,
                is_tty: caps.stdout_is_tty,
            },
        )
    }
}

impl<W: Write> WriterSink<W> {
    /// Wrap a writer.
    pub const fn new(writer: W, columns: ColumnSource) -> Self {
        Self { writer, columns }
    }

    /// Get a reference to the underlying writer.
    pub const fn get_ref(&self) -> &W {
        &self.writer
    }

    /// Consume the sink and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> TerminalSink for WriterSink<W> {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.writer.write_all(text.as_bytes())
    }

    fn move_up(&mut self, lines: u16) -> io::Result<()> {
        ansi::cuu(&mut self.writer, lines)
    }

    fn columns(&self) -> Option<u16> {
        self.columns.resolve()
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

// ============================================================================
// Capture sink
// ============================================================================

#[derive(Debug, Default)]
struct CaptureState {
    ops: Vec<SinkOp>,
    columns: Option<u16>,
}

/// In-memory sink for tests.
///
/// Clones share the same recording, so one handle can be given to a log
/// group while another is kept for inspection (or to simulate a resize via
/// [`CaptureSink::set_columns`]).
#[derive(Debug, Clone, Default)]
pub struct CaptureSink {
    state: Arc<Mutex<CaptureState>>,
}

impl CaptureSink {
    /// Capture sink reporting an unknown terminal width.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture sink reporting a fixed terminal width.
    #[must_use]
    pub fn with_columns(columns: u16) -> Self {
        let sink = Self::new();
        sink.set_columns(Some(columns));
        sink
    }

    fn lock(&self) -> MutexGuard<'_, CaptureState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn record(&self, op: SinkOp) {
        self.lock().ops.push(op);
    }

    /// Change the width reported to log groups.
    pub fn set_columns(&self, columns: Option<u16>) {
        self.lock().columns = columns;
    }

    /// Every operation recorded so far.
    #[must_use]
    pub fn ops(&self) -> Vec<SinkOp> {
        self.lock().ops.clone()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.lock().ops.clear();
    }

    /// The byte stream a real terminal would have received.
    #[must_use]
    pub fn raw(&self) -> String {
        let mut out = String::new();
        for op in self.lock().ops.iter() {
            match op {
                SinkOp::Write(text) => out.push_str(text),
                SinkOp::MoveUp(lines) => out.push_str(&ansi::cuu_sequence(*lines)),
                SinkOp::Plain(line) => {
                    out.push_str(line);
                    out.push('\n');
                }
            }
        }
        out
    }

    /// Final screen contents after replaying cursor motion, styling stripped.
    ///
    /// The replay is line-granular: a completed line replaces whatever was on
    /// the row under the cursor. That matches how log groups draw (every row
    /// is written whole, from column 0).
    #[must_use]
    pub fn screen(&self) -> Vec<String> {
        let mut screen = LineScreen::default();
        for op in self.lock().ops.iter() {
            match op {
                SinkOp::Write(text) => screen.write(text),
                SinkOp::MoveUp(lines) => screen.move_up(*lines),
                SinkOp::Plain(line) => {
                    screen.write(line);
                    screen.write("\n");
                }
            }
        }
        screen.into_rows()
    }
}

impl TerminalSink for CaptureSink {
    fn write_text(&mut self, text: &str) -> io::Result<()> {
        self.record(SinkOp::Write(text.to_string()));
        Ok(())
    }

    fn move_up(&mut self, lines: u16) -> io::Result<()> {
        self.record(SinkOp::MoveUp(lines));
        Ok(())
    }

    fn write_plain_line(&mut self, line: &str) -> io::Result<()> {
        self.record(SinkOp::Plain(line.to_string()));
        Ok(())
    }

    fn columns(&self) -> Option<u16> {
        self.lock().columns.filter(|cols| *cols > 0)
    }
}

/// Row model used by [`CaptureSink::screen`].
#[derive(Debug, Default)]
struct LineScreen {
    rows: Vec<String>,
    cursor: usize,
    pending: String,
}

impl LineScreen {
    fn write(&mut self, text: &str) {
        for (idx, piece) in text.split('\n').enumerate() {
            if idx > 0 {
                self.commit();
            }
            self.pending.push_str(piece);
        }
    }

    fn commit(&mut self) {
        let row = ansi::strip_csi(&std::mem::take(&mut self.pending));
        if let Some(slot) = self.rows.get_mut(self.cursor) {
            *slot = row;
        } else {
            self.rows.push(row);
        }
        self.cursor += 1;
    }

    fn move_up(&mut self, lines: u16) {
        self.cursor = self.cursor.saturating_sub(usize::from(lines));
    }

    fn into_rows(mut self) -> Vec<String> {
        if !self.pending.is_empty() {
            self.commit();
        }
        self.rows
    }
}
