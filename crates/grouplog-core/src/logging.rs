#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the crate root re-exports the `tracing` macros,
//! so dependent crates write `grouplog_core::debug!(...)` and get real events.
//! Without it every macro expands to nothing and span macros hand back a
//! [`NoopSpan`], keeping call sites identical in both builds.

#[cfg(feature = "tracing")]
pub use tracing::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};

#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// Event macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// Event macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// Event macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! info {
        ($($arg:tt)*) => {};
    }

    /// Event macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }

    /// Event macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! error {
        ($($arg:tt)*) => {};
    }

    /// Span macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! trace_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// Span macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// Span macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! info_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// Span macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! warn_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// Span macro stand-in (tracing disabled).
    #[macro_export]
    macro_rules! error_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }
}

/// Span returned by the span macros when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the span by reference.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }

    /// Enter the span by value, mirroring `tracing::Span::entered`.
    pub fn entered(self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
