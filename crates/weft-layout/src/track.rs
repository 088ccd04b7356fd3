//! Track definitions for grid columns and rows.

use std::fmt;
use std::str::FromStr;

use weft_core::LayoutError;

/// Sizing policy of a single column or row.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrackDefinition {
    /// Fixed size in device units
    Pixel(f64),
    /// Sized to the largest content in the track
    Auto,
    /// Weighted share of the space left after everything else
    Star(f64),
}

impl Default for TrackDefinition {
    fn default() -> Self {
        Self::Star(1.0)
    }
}

impl TrackDefinition {
    /// A `Star(1)` track.
    pub fn star() -> Self {
        Self::Star(1.0)
    }

    /// Fixed size rounded half away from zero. Negative and non-finite
    /// values clamp to zero.
    pub fn pixel_size(value: f64) -> i32 {
        if !value.is_finite() {
            return 0;
        }
        value.max(0.0).round().min(i32::MAX as f64) as i32
    }

    /// Effective Star weight. Non-positive and non-finite weights count as 1.
    pub fn star_weight(weight: f64) -> f64 {
        if weight.is_finite() && weight > 0.0 {
            weight
        } else {
            1.0
        }
    }

    /// Whether the track grows with leftover space.
    pub fn is_star(&self) -> bool {
        matches!(self, Self::Star(_))
    }

    /// Whether the track size depends on its content.
    pub fn is_content_sized(&self) -> bool {
        matches!(self, Self::Auto | Self::Star(_))
    }
}

impl fmt::Display for TrackDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pixel(value) => write!(f, "{}px", value),
            Self::Auto => write!(f, "auto"),
            Self::Star(weight) if *weight == 1.0 => write!(f, "*"),
            Self::Star(weight) => write!(f, "{}*", weight),
        }
    }
}

impl FromStr for TrackDefinition {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tracks = crate::parse::parse_track_list(s)?;
        if tracks.len() == 1 {
            Ok(tracks.remove(0))
        } else {
            Err(LayoutError::InvalidTrackList {
                input: s.to_string(),
                position: 0,
            })
        }
    }
}

/// Render a track list in the syntax accepted by [`crate::parse_track_list`].
pub fn format_track_list(tracks: &[TrackDefinition]) -> String {
    tracks
        .iter()
        .map(|t| t.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
