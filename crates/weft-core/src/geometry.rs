//! Device-unit geometry.
//!
//! Everything the layout engine hands back is expressed in whole device
//! units, so offsets can be accumulated without floating-point drift.

use crate::types::Axis;

/// Width and height in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0, height: 0 };

    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Extent along the given axis.
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Component-wise maximum.
    pub fn max(self, other: Size) -> Size {
        Size::new(self.width.max(other.width), self.height.max(other.height))
    }

    /// Negative components clamped to zero.
    pub fn clamp_non_negative(self) -> Size {
        Size::new(self.width.max(0), self.height.max(0))
    }
}

/// Axis-aligned rectangle in device units.
///
/// The rectangle covers the half-open ranges `[x, x + width)` and
/// `[y, y + height)`. `right()` and `bottom()` are the exclusive edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a rectangle from position and size.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Exclusive right edge (x + width), saturating at `i32::MAX`.
    pub fn right(&self) -> i32 {
        self.x.saturating_add(self.width)
    }

    /// Exclusive bottom edge (y + height), saturating at `i32::MAX`.
    pub fn bottom(&self) -> i32 {
        self.y.saturating_add(self.height)
    }

    /// Start coordinate along the given axis.
    pub fn offset(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Extent along the given axis.
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Check if `other` lies entirely inside this rectangle.
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Shrink by padding. Extents never go below zero.
    pub fn inset(&self, padding: Padding) -> Rect {
        Rect::new(
            self.x.saturating_add(padding.left),
            self.y.saturating_add(padding.top),
            self.width.saturating_sub(padding.horizontal()).max(0),
            self.height.saturating_sub(padding.vertical()).max(0),
        )
    }
}

/// Padding on all sides, in device units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Padding {
    /// Create uniform padding.
    pub fn uniform(value: i32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Create symmetric padding.
    pub fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }

    /// Total horizontal padding.
    pub fn horizontal(&self) -> i32 {
        self.left.saturating_add(self.right)
    }

    /// Total vertical padding.
    pub fn vertical(&self) -> i32 {
        self.top.saturating_add(self.bottom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_are_exclusive() {
        let r = Rect::new(10, 20, 100, 50);
        assert_eq!(r.right(), 110);
        assert_eq!(r.bottom(), 70);
        assert!(r.contains_rect(&Rect::new(10, 20, 100, 50)));
        assert!(r.contains_rect(&Rect::new(60, 40, 50, 30)));
        assert!(!r.contains_rect(&Rect::new(60, 40, 51, 30)));
        assert!(!r.contains_rect(&Rect::new(9, 20, 10, 10)));
    }

    #[test]
    fn test_inset_clamps_to_zero() {
        let r = Rect::new(0, 0, 30, 30);
        assert_eq!(r.inset(Padding::uniform(5)), Rect::new(5, 5, 20, 20));
        assert_eq!(r.inset(Padding::symmetric(20, 2)), Rect::new(20, 2, 0, 26));
    }

    #[test]
    fn test_axis_accessors() {
        let r = Rect::new(3, 4, 30, 40);
        assert_eq!(r.offset(Axis::Horizontal), 3);
        assert_eq!(r.offset(Axis::Vertical), 4);
        assert_eq!(r.extent(Axis::Horizontal), 30);
        assert_eq!(r.extent(Axis::Vertical), 40);
        assert_eq!(r.size().along(Axis::Vertical), 40);
    }

    #[test]
    fn test_edges_and_inset_saturate() {
        let r = Rect::new(10, 10, i32::MAX, i32::MAX);
        assert_eq!(r.right(), i32::MAX);
        assert_eq!(r.bottom(), i32::MAX);

        let huge = Padding::uniform(i32::MAX);
        assert_eq!(huge.horizontal(), i32::MAX);
        assert_eq!(
            Rect::new(5, 5, 100, 100).inset(huge),
            Rect::new(i32::MAX, i32::MAX, 0, 0)
        );
        assert_eq!(
            Rect::new(0, 0, i32::MAX, 40).inset(Padding::uniform(5)),
            Rect::new(5, 5, i32::MAX - 10, 30)
        );
    }

    proptest::proptest! {
        #[test]
        fn test_inset_stays_inside(
            x in -500i32..500, y in -500i32..500, w in 0i32..500, h in 0i32..500,
            pad in 0i32..100,
        ) {
            let outer = Rect::new(x, y, w, h);
            let inner = outer.inset(Padding::uniform(pad));
            proptest::prop_assert!(inner.width >= 0 && inner.height >= 0);
            if w >= 2 * pad && h >= 2 * pad {
                proptest::prop_assert!(outer.contains_rect(&inner));
            }
        }
    }
}
