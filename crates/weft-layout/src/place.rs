//! Placement of a child inside its cell.

use weft_core::{Alignment, Rect, Size};

/// Offset and extent of a child along one axis of its cell.
///
/// `natural` must be the child's unconstrained measurement. Anything but
/// `Stretch` keeps the natural extent (capped at the cell) and positions it;
/// the end edge is `cell_offset + cell_extent`, never an inclusive edge.
pub fn place_axis(
    cell_offset: i32,
    cell_extent: i32,
    natural: i32,
    alignment: Alignment,
) -> (i32, i32) {
    let cell_extent = cell_extent.max(0);
    if alignment == Alignment::Stretch {
        return (cell_offset, cell_extent);
    }

    let extent = natural.max(0).min(cell_extent);
    let free = cell_extent - extent;
    let offset = match alignment {
        Alignment::Start | Alignment::Stretch => cell_offset,
        Alignment::Center => cell_offset.saturating_add(free / 2),
        Alignment::End => cell_offset.saturating_add(free),
    };
    (offset, extent)
}

/// Final rectangle of a child with the given natural size and alignment.
pub fn place(cell: Rect, natural: Size, horizontal: Alignment, vertical: Alignment) -> Rect {
    let (x, width) = place_axis(cell.x, cell.width, natural.width, horizontal);
    let (y, height) = place_axis(cell.y, cell.height, natural.height, vertical);
    Rect::new(x, y, width, height)
}
