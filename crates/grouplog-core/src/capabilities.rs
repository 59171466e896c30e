#![forbid(unsafe_code)]

//! Terminal capability detection from the environment.
//!
//! Only what boxed log output needs is modelled: whether styling may be
//! written to stdout, and a column count hint for when the terminal cannot be
//! queried directly.
//!
//! # Detection Strategy
//!
//! - stdout not a terminal: disables color
//! - `NO_COLOR`: disables color
//! - `TERM`: `dumb` or empty disables color (unless running in Windows Terminal)
//! - `FORCE_COLOR`: overrides all of the above. `0` / `false` disables color;
//!   empty, `true` or a positive level enables it
//! - `COLUMNS`: column count hint, used when the terminal size query fails
//!
//! Given the same environment and stdout, [`TerminalCapabilities::detect`]
//! always yields the same result.

use std::env;
use std::io::{self, IsTerminal};

#[derive(Debug, Clone, Default)]
struct DetectInputs {
    no_color: bool,
    force_color: Option<String>,
    term: String,
    columns: Option<String>,
    wt_session: bool,
    stdout_is_tty: bool,
}

impl DetectInputs {
    fn from_env() -> Self {
        Self {
            no_color: env::var("NO_COLOR").is_ok(),
            force_color: env::var("FORCE_COLOR").ok(),
            term: env::var("TERM").unwrap_or_default(),
            columns: env::var("COLUMNS").ok(),
            wt_session: env::var("WT_SESSION").is_ok(),
            stdout_is_tty: io::stdout().is_terminal(),
        }
    }
}

/// `FORCE_COLOR` as on/off. Unparseable values are ignored.
fn forced(raw: &str) -> Option<bool> {
    match raw.trim() {
        "" | "true" => Some(true),
        "false" => Some(false),
        level => level.parse::<u32>().ok().map(|level| level > 0),
    }
}

/// What the attached terminal is believed to support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    /// User asked for no color (`NO_COLOR`, `FORCE_COLOR=0`).
    pub no_color: bool,
    /// `TERM=dumb` or no `TERM` at all.
    pub is_dumb: bool,
    /// Standard output is attached to a terminal.
    pub stdout_is_tty: bool,
    /// `FORCE_COLOR` asked for color where it would otherwise be disabled.
    pub force_color: bool,
    /// Column count from `COLUMNS`, if set to a positive number.
    pub columns_hint: Option<u16>,
}

impl TerminalCapabilities {
    /// Detect capabilities from the environment.
    #[must_use]
    pub fn detect() -> Self {
        Self::detect_from_inputs(&DetectInputs::from_env())
    }

    /// Color-capable terminal on stdout with no column hint.
    #[must_use]
    pub const fn basic() -> Self {
        Self {
            no_color: false,
            is_dumb: false,
            stdout_is_tty: true,
            force_color: false,
            columns_hint: None,
        }
    }

    /// Output that must not receive any styling.
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            no_color: true,
            is_dumb: true,
            stdout_is_tty: false,
            force_color: false,
            columns_hint: None,
        }
    }

    fn detect_from_inputs(env: &DetectInputs) -> Self {
        let term = env.term.as_str();

        // Windows Terminal often omits TERM.
        let is_dumb = term == "dumb" || (term.is_empty() && !env.wt_session);

        let (no_color, force_color) = match env.force_color.as_deref().and_then(forced) {
            Some(true) => (false, true),
            Some(false) => (true, false),
            None => (env.no_color, false),
        };

        let columns_hint = env
            .columns
            .as_deref()
            .and_then(|raw| raw.trim().parse::<u16>().ok())
            .filter(|cols| *cols > 0);

        Self {
            no_color,
            is_dumb,
            stdout_is_tty: env.stdout_is_tty,
            force_color,
            columns_hint,
        }
    }

    /// Whether any SGR styling should be emitted.
    #[must_use]
    pub const fn color_allowed(&self) -> bool {
        self.force_color || (!self.no_color && !self.is_dumb && self.stdout_is_tty)
    }
}

impl Default for TerminalCapabilities {
    fn default() -> Self {
        Self::basic()
    }
}
