#![forbid(unsafe_code)]

//! Construction-time errors.

use std::fmt;

use grouplog_core::PaddingError;
use grouplog_style::{StyleError, UnknownBoxStyle};

/// Invalid [`GroupOptions`](crate::GroupOptions).
///
/// Rendering never fails with this error; only building a
/// [`LogGroup`](crate::LogGroup) or replacing its padding does.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Padding has a negative (or oversized) edge.
    Padding(PaddingError),
    /// Box style name is not registered.
    BoxStyle(UnknownBoxStyle),
    /// Color name does not resolve to a style.
    Color(StyleError),
    /// A width bound is zero.
    InvalidWidth { field: &'static str },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Padding(err) => write!(f, "invalid padding: {err}"),
            Self::BoxStyle(err) => write!(f, "invalid box: {err}"),
            Self::Color(err) => write!(f, "invalid color: {err}"),
            Self::InvalidWidth { field } => write!(f, "{field} must be greater than zero"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Padding(err) => Some(err),
            Self::BoxStyle(err) => Some(err),
            Self::Color(err) => Some(err),
            Self::InvalidWidth { .. } => None,
        }
    }
}

impl From<PaddingError> for ConfigError {
    fn from(err: PaddingError) -> Self {
        Self::Padding(err)
    }
}

impl From<UnknownBoxStyle> for ConfigError {
    fn from(err: UnknownBoxStyle) -> Self {
        Self::BoxStyle(err)
    }
}

impl From<StyleError> for ConfigError {
    fn from(err: StyleError) -> Self {
        Self::Color(err)
    }
}
