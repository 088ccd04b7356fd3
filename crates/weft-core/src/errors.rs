//! Error types for the weft layout engine.

use thiserror::Error;

use crate::types::Axis;

/// Errors and diagnostics produced during layout.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// A child's span reaches past the last track. The span is clamped and
    /// layout continues, so this is reported as a diagnostic.
    #[error(
        "{axis} span {start}+{span} is out of range for {track_count} {}(s)",
        .axis.track_noun()
    )]
    SpanOutOfRange {
        axis: Axis,
        start: usize,
        span: usize,
        track_count: usize,
    },

    #[error("layout pass started while another pass on the same grid is running")]
    ReentrantPass,

    #[error("invalid track list {input:?} at byte {position}")]
    InvalidTrackList { input: String, position: usize },
}
