//! Grid layout for weft.
//!
//! This crate sizes the columns and rows of a grid and positions each child
//! inside its cell.
//!
//! # Architecture
//!
//! 1. **Measure**: every child reports its natural and minimum size
//! 2. **Track resolution**: Pixel, Auto and Star tracks get concrete sizes
//! 3. **Placement**: each child is aligned inside the cell it occupies
//!
//! # Example
//!
//! ```
//! use weft_core::{Alignment, Rect};
//! use weft_layout::{FixedSize, GridItem, GridLayout, GridPlacement};
//!
//! let grid = GridLayout::from_track_lists("100px, *, 2*", "auto")?;
//! let mut label = FixedSize::natural(60, 20);
//! let mut items = [GridItem::new(
//!     &mut label,
//!     GridPlacement::cell(1, 0).with_alignment(Alignment::End, Alignment::Start),
//! )];
//!
//! let result = grid.layout(Rect::new(0, 0, 400, 100), &mut items)?;
//! assert_eq!(result.columns.sizes(), vec![100, 100, 200]);
//! assert_eq!(result.rects[0], Rect::new(140, 0, 60, 20));
//! # Ok::<(), weft_core::LayoutError>(())
//! ```

mod grid;
mod measure;
mod parse;
mod place;
mod resolve;
mod track;

pub use grid::{GridArrangement, GridChild, GridItem, GridLayout, GridPlacement};
pub use measure::{Arrange, AvailableSize, DesiredSize, FixedSize, Measure};
pub use parse::parse_track_list;
pub use place::{place, place_axis};
pub use resolve::{
    resolve_geometry, resolve_tracks, resolve_tracks_with_spans, SpanMinimum, SpanPolicy,
    TrackGeometry, TrackMinimum,
};
pub use track::{format_track_list, TrackDefinition};
