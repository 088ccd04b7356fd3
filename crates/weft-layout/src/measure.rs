//! Measure and arrange callbacks between the grid and its children.

use weft_core::{Axis, Rect, Size};

/// Space offered to a child during measurement. `None` means unconstrained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AvailableSize {
    pub width: Option<i32>,
    pub height: Option<i32>,
}

impl AvailableSize {
    /// No constraint on either axis.
    pub const UNBOUNDED: AvailableSize = AvailableSize {
        width: None,
        height: None,
    };

    /// Bound a single axis, leaving the other unconstrained.
    pub fn bounded(axis: Axis, extent: i32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                width: Some(extent),
                height: None,
            },
            Axis::Vertical => Self {
                width: None,
                height: Some(extent),
            },
        }
    }
}

/// Result of measuring a child.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DesiredSize {
    /// Preferred size when unconstrained
    pub natural: Size,
    /// Smallest usable size
    pub minimum: Size,
}

impl DesiredSize {
    pub fn new(natural: Size, minimum: Size) -> Self {
        Self { natural, minimum }
    }

    /// Natural and minimum sizes are the same.
    pub fn fixed(size: Size) -> Self {
        Self {
            natural: size,
            minimum: size,
        }
    }

    /// Minimum along `axis`, never negative.
    pub fn minimum_along(&self, axis: Axis) -> i32 {
        self.minimum.along(axis).max(0)
    }

    /// Size an Auto track needs along `axis`: the larger of natural and minimum.
    pub fn content_along(&self, axis: Axis) -> i32 {
        self.natural.along(axis).max(self.minimum.along(axis)).max(0)
    }

    /// Larger of natural and minimum on both axes.
    pub fn content(&self) -> Size {
        self.natural.max(self.minimum).clamp_non_negative()
    }
}

/// Measurement callback.
///
/// Implementations must be idempotent: the grid may measure a child more
/// than once per pass and expects the same answer for the same input.
pub trait Measure {
    fn measure(&self, available: AvailableSize) -> DesiredSize;
}

/// Arrange notification, delivered once per pass with the final rectangle.
///
/// Implementations may cache the rectangle but must not start a new
/// layout pass on the same grid from here.
pub trait Arrange {
    fn arrange(&mut self, _rect: Rect) {}
}

/// A child with a static desired size that records where it was arranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedSize {
    pub desired: DesiredSize,
    pub arranged: Option<Rect>,
}

impl FixedSize {
    /// Natural size only; minimum is zero.
    pub fn natural(width: i32, height: i32) -> Self {
        Self {
            desired: DesiredSize::new(Size::new(width, height), Size::ZERO),
            arranged: None,
        }
    }

    /// Natural and minimum size.
    pub fn with_minimum(width: i32, height: i32, min_width: i32, min_height: i32) -> Self {
        Self {
            desired: DesiredSize::new(Size::new(width, height), Size::new(min_width, min_height)),
            arranged: None,
        }
    }
}

impl Measure for FixedSize {
    fn measure(&self, _available: AvailableSize) -> DesiredSize {
        self.desired
    }
}

impl Arrange for FixedSize {
    fn arrange(&mut self, rect: Rect) {
        self.arranged = Some(rect);
    }
}
