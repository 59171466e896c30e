#![forbid(unsafe_code)]

//! Padding geometry.
//!
//! Callers describe padding loosely with a [`PaddingSpec`]: one number for all
//! edges, a vertical/horizontal pair, or four explicit edges. [`normalize`]
//! turns any of them into a signed [`Padding`], and [`Sides`] is the validated
//! unsigned form the renderer works with.
//!
//! ```
//! use grouplog_core::geometry::{normalize, Padding, PaddingSpec, Sides};
//!
//! assert_eq!(normalize(PaddingSpec::from(2)), Padding::new(2, 2, 2, 2));
//! assert_eq!(normalize(PaddingSpec::from((0, 3))), Padding::new(0, 3, 0, 3));
//!
//! let sides = Sides::try_from(Padding::new(1, 2, 1, 2))?;
//! assert_eq!(sides.horizontal_total(), 4);
//! assert!(Sides::try_from(Padding::new(0, -1, 0, 0)).is_err());
//! # Ok::<(), grouplog_core::geometry::PaddingError>(())
//! ```

use std::fmt;

/// Padding as written by the caller, possibly negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    /// Create padding with explicit edges (CSS order: top, right, bottom, left).
    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same value on every edge.
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Edges paired with their names, in CSS order.
    pub const fn edges(&self) -> [(Edge, i32); 4] {
        [
            (Edge::Top, self.top),
            (Edge::Right, self.right),
            (Edge::Bottom, self.bottom),
            (Edge::Left, self.left),
        ]
    }

    /// Whether every edge is zero or positive.
    pub fn is_non_negative(&self) -> bool {
        self.edges().iter().all(|(_, value)| *value >= 0)
    }
}

/// Flexible padding specification accepted at configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaddingSpec {
    /// One value for all four edges.
    Uniform(i32),
    /// Vertical and horizontal values.
    Axes {
        top_and_bottom: i32,
        left_and_right: i32,
    },
    /// Every edge given explicitly.
    Explicit(Padding),
}

impl Default for PaddingSpec {
    fn default() -> Self {
        Self::Uniform(1)
    }
}

impl From<i32> for PaddingSpec {
    fn from(value: i32) -> Self {
        Self::Uniform(value)
    }
}

impl From<(i32, i32)> for PaddingSpec {
    fn from((top_and_bottom, left_and_right): (i32, i32)) -> Self {
        Self::Axes {
            top_and_bottom,
            left_and_right,
        }
    }
}

impl From<(i32, i32, i32, i32)> for PaddingSpec {
    fn from((top, right, bottom, left): (i32, i32, i32, i32)) -> Self {
        Self::Explicit(Padding::new(top, right, bottom, left))
    }
}

impl From<Padding> for PaddingSpec {
    fn from(padding: Padding) -> Self {
        Self::Explicit(padding)
    }
}

/// Expand a [`PaddingSpec`] into four explicit edges.
#[must_use]
pub const fn normalize(spec: PaddingSpec) -> Padding {
    match spec {
        PaddingSpec::Uniform(value) => Padding::uniform(value),
        PaddingSpec::Axes {
            top_and_bottom,
            left_and_right,
        } => Padding::new(top_and_bottom, left_and_right, top_and_bottom, left_and_right),
        PaddingSpec::Explicit(padding) => padding,
    }
}

/// Padding edge name, used in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Edge {
    Top,
    Right,
    Bottom,
    Left,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Top => "top",
            Self::Right => "right",
            Self::Bottom => "bottom",
            Self::Left => "left",
        })
    }
}

/// Padding that cannot be turned into [`Sides`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaddingError {
    /// An edge is below zero.
    Negative { edge: Edge, value: i32 },
    /// An edge does not fit a terminal column count.
    TooLarge { edge: Edge, value: i32 },
}

impl fmt::Display for PaddingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative { edge, value } => {
                write!(f, "padding must not be negative ({edge} = {value})")
            }
            Self::TooLarge { edge, value } => {
                write!(f, "padding {edge} = {value} exceeds {}", u16::MAX)
            }
        }
    }
}

impl std::error::Error for PaddingError {}

/// Validated padding in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Same value on every edge.
    pub const fn all(value: u16) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create sides with explicit edges.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Columns consumed by left plus right padding.
    pub const fn horizontal_total(&self) -> u32 {
        self.left as u32 + self.right as u32
    }
}

impl From<Sides> for Padding {
    fn from(sides: Sides) -> Self {
        Padding::new(
            i32::from(sides.top),
            i32::from(sides.right),
            i32::from(sides.bottom),
            i32::from(sides.left),
        )
    }
}

impl TryFrom<Padding> for Sides {
    type Error = PaddingError;

    fn try_from(padding: Padding) -> Result<Self, Self::Error> {
        let mut out = [0u16; 4];
        for (slot, (edge, value)) in out.iter_mut().zip(padding.edges()) {
            if value < 0 {
                return Err(PaddingError::Negative { edge, value });
            }
            *slot = u16::try_from(value).map_err(|_| PaddingError::TooLarge { edge, value })?;
        }
        let [top, right, bottom, left] = out;
        Ok(Self::new(top, right, bottom, left))
    }
}

impl TryFrom<PaddingSpec> for Sides {
    type Error = PaddingError;

    fn try_from(spec: PaddingSpec) -> Result<Self, Self::Error> {
        Self::try_from(normalize(spec))
    }
}
