//! Grid layout pass.
//!
//! A pass measures every child once without constraints, resolves column
//! and row sizes, then places and arranges each child in its cell. Nothing
//! is carried over between passes.

use std::borrow::Cow;
use std::cell::Cell;

use tracing::{debug, error, warn};
use weft_core::{Alignment, Axis, LayoutError, Padding, Rect, Size};

use crate::measure::{Arrange, AvailableSize, DesiredSize, Measure};
use crate::parse::parse_track_list;
use crate::place::place;
use crate::resolve::{resolve_geometry, SpanMinimum, SpanPolicy, TrackGeometry, TrackMinimum};
use crate::track::TrackDefinition;

/// Anything the grid can measure and arrange.
pub trait GridChild: Measure + Arrange {}

impl<T: Measure + Arrange> GridChild for T {}

/// Grid layout configuration.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridLayout {
    /// Column track definitions
    pub columns: Vec<TrackDefinition>,
    /// Row track definitions
    pub rows: Vec<TrackDefinition>,
    /// Space between the container edge and the tracks
    pub padding: Padding,
    /// Default horizontal alignment of items within their cell
    pub horizontal_alignment: Alignment,
    /// Default vertical alignment of items within their cell
    pub vertical_alignment: Alignment,
    /// How children spanning several tracks affect track minimums
    pub span_policy: SpanPolicy,
    #[cfg_attr(feature = "serde", serde(skip))]
    pass: PassFlag,
}

/// Where a child sits in the grid. Tracks are zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPlacement {
    pub column: usize,
    pub row: usize,
    pub column_span: usize,
    pub row_span: usize,
    /// Overrides the grid's horizontal alignment
    pub horizontal: Option<Alignment>,
    /// Overrides the grid's vertical alignment
    pub vertical: Option<Alignment>,
}

impl Default for GridPlacement {
    fn default() -> Self {
        Self::cell(0, 0)
    }
}

impl GridPlacement {
    /// A single cell.
    pub fn cell(column: usize, row: usize) -> Self {
        Self {
            column,
            row,
            column_span: 1,
            row_span: 1,
            horizontal: None,
            vertical: None,
        }
    }

    /// A block of `column_span` x `row_span` cells.
    pub fn span(column: usize, row: usize, column_span: usize, row_span: usize) -> Self {
        Self {
            column_span,
            row_span,
            ..Self::cell(column, row)
        }
    }

    /// Set the alignment for this item.
    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal = Some(horizontal);
        self.vertical = Some(vertical);
        self
    }

    fn along(&self, axis: Axis) -> (usize, usize) {
        match axis {
            Axis::Horizontal => (self.column, self.column_span.max(1)),
            Axis::Vertical => (self.row, self.row_span.max(1)),
        }
    }
}

/// A child taking part in a layout pass.
pub struct GridItem<'a> {
    pub child: &'a mut dyn GridChild,
    pub placement: GridPlacement,
}

impl<'a> GridItem<'a> {
    pub fn new(child: &'a mut dyn GridChild, placement: GridPlacement) -> Self {
        Self { child, placement }
    }
}

/// Output of a layout pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridArrangement {
    pub columns: TrackGeometry,
    pub rows: TrackGeometry,
    /// Final rectangle of each item, in input order
    pub rects: Vec<Rect>,
    /// Problems that were corrected so layout could continue
    pub diagnostics: Vec<LayoutError>,
}

impl GridArrangement {
    /// Total size of all tracks. May exceed the container when Star tracks
    /// could not shrink to fit.
    pub fn extent(&self) -> Size {
        Size::new(self.columns.total(), self.rows.total())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct CellSpan {
    column: usize,
    column_span: usize,
    row: usize,
    row_span: usize,
}

impl CellSpan {
    fn along(&self, axis: Axis) -> (usize, usize) {
        match axis {
            Axis::Horizontal => (self.column, self.column_span),
            Axis::Vertical => (self.row, self.row_span),
        }
    }
}

impl GridLayout {
    /// Create a grid with the given column and row tracks.
    pub fn new(columns: Vec<TrackDefinition>, rows: Vec<TrackDefinition>) -> Self {
        Self {
            columns,
            rows,
            ..Default::default()
        }
    }

    /// Create a grid from track lists such as `"120px, auto, *"`.
    pub fn from_track_lists(columns: &str, rows: &str) -> Result<Self, LayoutError> {
        Ok(Self::new(parse_track_list(columns)?, parse_track_list(rows)?))
    }

    /// Set padding between the container edge and the tracks.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Set the default item alignment.
    pub fn with_alignment(mut self, horizontal: Alignment, vertical: Alignment) -> Self {
        self.horizontal_alignment = horizontal;
        self.vertical_alignment = vertical;
        self
    }

    /// Set how spanning children affect track minimums.
    pub fn with_span_policy(mut self, policy: SpanPolicy) -> Self {
        self.span_policy = policy;
        self
    }

    /// Run a layout pass: measure, resolve tracks, place and arrange children.
    ///
    /// Fails only when called while another pass on this grid is running,
    /// for example from a child's measure or arrange callback.
    pub fn layout(
        &self,
        container: Rect,
        items: &mut [GridItem<'_>],
    ) -> Result<GridArrangement, LayoutError> {
        let _guard = self.enter_pass()?;

        let content = container.inset(self.padding);
        let columns = effective_tracks(&self.columns);
        let rows = effective_tracks(&self.rows);
        debug!(
            "Grid layout: {} items, {}x{} tracks, content {:?}",
            items.len(),
            columns.len(),
            rows.len(),
            content
        );

        let mut diagnostics = Vec::new();
        let cells: Vec<CellSpan> = items
            .iter()
            .map(|item| clamp_cell(&item.placement, columns.len(), rows.len(), &mut diagnostics))
            .collect();

        let desired: Vec<DesiredSize> = items
            .iter()
            .map(|item| item.child.measure(AvailableSize::UNBOUNDED))
            .collect();

        let column_geometry =
            self.resolve_axis(Axis::Horizontal, &columns, &cells, &desired, content);
        let row_geometry = self.resolve_axis(Axis::Vertical, &rows, &cells, &desired, content);

        let mut rects = Vec::with_capacity(items.len());
        for ((item, cell), desired) in items.iter_mut().zip(&cells).zip(&desired) {
            let (x, width) = column_geometry.span(cell.column, cell.column_span);
            let (y, height) = row_geometry.span(cell.row, cell.row_span);
            let cell_rect = Rect::new(x, y, width, height);

            let horizontal = item.placement.horizontal.unwrap_or(self.horizontal_alignment);
            let vertical = item.placement.vertical.unwrap_or(self.vertical_alignment);
            let natural = natural_in_cell(&*item.child, *desired, cell_rect, horizontal, vertical);

            let rect = place(cell_rect, natural, horizontal, vertical);
            item.child.arrange(rect);
            rects.push(rect);
        }

        Ok(GridArrangement {
            columns: column_geometry,
            rows: row_geometry,
            rects,
            diagnostics,
        })
    }

    /// Smallest size the grid can take: every track at its minimum, plus
    /// padding. Used when this grid is itself measured by a parent.
    pub fn measure(&self, items: &[GridItem<'_>]) -> Result<DesiredSize, LayoutError> {
        let _guard = self.enter_pass()?;

        let columns = effective_tracks(&self.columns);
        let rows = effective_tracks(&self.rows);
        let mut ignored = Vec::new();
        let cells: Vec<CellSpan> = items
            .iter()
            .map(|item| clamp_cell(&item.placement, columns.len(), rows.len(), &mut ignored))
            .collect();
        let desired: Vec<DesiredSize> = items
            .iter()
            .map(|item| item.child.measure(AvailableSize::UNBOUNDED))
            .collect();

        let zero = Rect::default();
        let width = self
            .resolve_axis(Axis::Horizontal, &columns, &cells, &desired, zero)
            .total();
        let height = self
            .resolve_axis(Axis::Vertical, &rows, &cells, &desired, zero)
            .total();

        let size = Size::new(
            width.saturating_add(self.padding.horizontal()),
            height.saturating_add(self.padding.vertical()),
        );
        Ok(DesiredSize::fixed(size))
    }

    fn enter_pass(&self) -> Result<PassGuard<'_>, LayoutError> {
        self.pass.enter().ok_or_else(|| {
            error!("Grid layout re-entered while a pass is running");
            LayoutError::ReentrantPass
        })
    }

    fn resolve_axis(
        &self,
        axis: Axis,
        tracks: &[TrackDefinition],
        cells: &[CellSpan],
        desired: &[DesiredSize],
        content: Rect,
    ) -> TrackGeometry {
        let mut minimums = Vec::new();
        let mut spanning = Vec::new();

        for (cell, desired) in cells.iter().zip(desired) {
            let (start, span) = cell.along(axis);
            if span == 1 {
                let size = match tracks[start] {
                    TrackDefinition::Auto => desired.content_along(axis),
                    TrackDefinition::Star(_) => desired.minimum_along(axis),
                    TrackDefinition::Pixel(_) => continue,
                };
                minimums.push(TrackMinimum::new(start, size));
            } else if self.span_policy == SpanPolicy::Distribute {
                spanning.push(SpanMinimum::new(start, span, desired.minimum_along(axis)));
            }
        }

        resolve_geometry(
            tracks,
            &minimums,
            &spanning,
            content.extent(axis),
            content.offset(axis),
        )
    }
}

/// An axis without tracks behaves as one `Star(1)` track.
fn effective_tracks(tracks: &[TrackDefinition]) -> Cow<'_, [TrackDefinition]> {
    if tracks.is_empty() {
        Cow::Owned(vec![TrackDefinition::star()])
    } else {
        Cow::Borrowed(tracks)
    }
}

fn clamp_cell(
    placement: &GridPlacement,
    column_count: usize,
    row_count: usize,
    diagnostics: &mut Vec<LayoutError>,
) -> CellSpan {
    let (column, column_span) = clamp_span(
        Axis::Horizontal,
        placement.along(Axis::Horizontal),
        column_count,
        diagnostics,
    );
    let (row, row_span) = clamp_span(
        Axis::Vertical,
        placement.along(Axis::Vertical),
        row_count,
        diagnostics,
    );
    CellSpan {
        column,
        column_span,
        row,
        row_span,
    }
}

fn clamp_span(
    axis: Axis,
    (start, span): (usize, usize),
    track_count: usize,
    diagnostics: &mut Vec<LayoutError>,
) -> (usize, usize) {
    if start.saturating_add(span) <= track_count {
        return (start, span);
    }

    warn!(
        "{} span {}+{} exceeds {} tracks, clamping",
        axis, start, span, track_count
    );
    diagnostics.push(LayoutError::SpanOutOfRange {
        axis,
        start,
        span,
        track_count,
    });

    let clamped_start = start.min(track_count - 1);
    let clamped_span = span.min(track_count - clamped_start);
    (clamped_start, clamped_span)
}

/// Natural size used for placement. A stretched axis takes the cell
/// extent, and the child is measured again with that axis bounded so the
/// other axis can react (wrapping text, for example).
fn natural_in_cell(
    child: &dyn GridChild,
    desired: DesiredSize,
    cell: Rect,
    horizontal: Alignment,
    vertical: Alignment,
) -> Size {
    match (horizontal, vertical) {
        (Alignment::Stretch, Alignment::Stretch) => cell.size(),
        (Alignment::Stretch, _) => {
            let remeasured = child
                .measure(AvailableSize::bounded(Axis::Horizontal, cell.width))
                .content();
            Size::new(cell.width, remeasured.height)
        }
        (_, Alignment::Stretch) => {
            let remeasured = child
                .measure(AvailableSize::bounded(Axis::Vertical, cell.height))
                .content();
            Size::new(remeasured.width, cell.height)
        }
        _ => desired.content(),
    }
}

/// Marks a grid as being in the middle of a pass.
#[derive(Debug, Default)]
struct PassFlag(Cell<bool>);

impl Clone for PassFlag {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl PassFlag {
    fn enter(&self) -> Option<PassGuard<'_>> {
        if self.0.replace(true) {
            None
        } else {
            Some(PassGuard(&self.0))
        }
    }
}

struct PassGuard<'a>(&'a Cell<bool>);

impl Drop for PassGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
