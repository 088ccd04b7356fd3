//! Layout value types shared across crates.

use std::fmt;

/// Layout axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Columns run along this axis
    Horizontal,
    /// Rows run along this axis
    Vertical,
}

impl Axis {
    /// Name of the tracks that run along this axis.
    pub fn track_noun(self) -> &'static str {
        match self {
            Axis::Horizontal => "column",
            Axis::Vertical => "row",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
        }
    }
}

/// Alignment of an item within its cell, applied per axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Alignment {
    /// Align to start (left or top)
    Start,
    /// Center within the cell
    Center,
    /// Align to end (right or bottom)
    End,
    /// Fill the cell
    #[default]
    Stretch,
}
