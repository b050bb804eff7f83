#![forbid(unsafe_code)]

//! Geometric primitives in logical canvas units.
//!
//! The overlay lays out in logical units (origin top-left, y grows downward).
//! The render crate multiplies by the device scale when primitives are flushed.

/// An axis-aligned rectangle in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in logical units.
    pub width: u16,
    /// Height in logical units.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin covering `size`.
    #[inline]
    pub const fn from_size(size: Size) -> Self {
        Self::new(0, 0, size.width, size.height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Size of the rectangle.
    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Shrink the rectangle by a margin on each side, saturating at zero size.
    pub fn inner(&self, margin: Sides) -> Rect {
        Rect {
            x: self.x.saturating_add(margin.left),
            y: self.y.saturating_add(margin.top),
            width: self.width.saturating_sub(margin.horizontal_sum()),
            height: self.height.saturating_sub(margin.vertical_sum()),
        }
    }

    /// The `index`-th horizontal strip of height `row_height`, counted from the top.
    ///
    /// Returns an empty rectangle once the strip would start past the bottom edge;
    /// a strip that crosses the bottom edge is clipped.
    pub fn row(&self, index: u16, row_height: u16) -> Rect {
        let offset = u32::from(index) * u32::from(row_height);
        if offset >= u32::from(self.height) {
            return Rect::new(self.x, self.bottom(), self.width, 0);
        }
        let top = self.y.saturating_add(offset as u16);
        let height = row_height.min(self.bottom().saturating_sub(top));
        Rect::new(self.x, top, self.width, height)
    }
}

/// A width/height pair in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Size {
    /// Width.
    pub width: u16,
    /// Height.
    pub height: u16,
}

impl Size {
    /// The zero size.
    pub const ZERO: Self = Self::new(0, 0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Check if either dimension is zero.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Equal margin on all sides.
    pub const fn all(val: u16) -> Self {
        Self::new(val, val, val, val)
    }

    /// Explicit margins, clockwise from the top.
    pub const fn new(top: u16, right: u16, bottom: u16, left: u16) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Sum of left and right.
    #[inline]
    pub const fn horizontal_sum(&self) -> u16 {
        self.left.saturating_add(self.right)
    }

    /// Sum of top and bottom.
    #[inline]
    pub const fn vertical_sum(&self) -> u16 {
        self.top.saturating_add(self.bottom)
    }
}

impl From<u16> for Sides {
    fn from(val: u16) -> Self {
        Self::all(val)
    }
}

#[cfg(test)]
mod tests {
    use super::{Rect, Sides, Size};

    #[test]
    fn rect_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.size(), Size::new(30, 40));
    }

    #[test]
    fn rect_right_bottom_saturating() {
        let r = Rect::new(u16::MAX - 5, u16::MAX - 3, 100, 100);
        assert_eq!(r.right(), u16::MAX);
        assert_eq!(r.bottom(), u16::MAX);
    }

    #[test]
    fn rect_contains_boundary_conditions() {
        let r = Rect::new(0, 0, 5, 5);
        assert!(r.contains(0, 0));
        assert!(r.contains(4, 4));
        assert!(!r.contains(5, 0));
        assert!(!r.contains(0, 5));
    }

    #[test]
    fn rect_inner_asymmetric_margin() {
        let inner = Rect::new(0, 0, 20, 20).inner(Sides::new(2, 3, 4, 5));
        assert_eq!(inner, Rect::new(5, 2, 12, 14));
    }

    #[test]
    fn rect_inner_large_margin_clamps_to_zero() {
        let inner = Rect::new(0, 0, 10, 10).inner(Sides::all(20));
        assert!(inner.is_empty());
    }

    #[test]
    fn row_strips_stack_downward() {
        let pane = Rect::new(4, 10, 50, 45);
        assert_eq!(pane.row(0, 20), Rect::new(4, 10, 50, 20));
        assert_eq!(pane.row(1, 20), Rect::new(4, 30, 50, 20));
        // Third strip is clipped at the bottom edge.
        assert_eq!(pane.row(2, 20), Rect::new(4, 50, 50, 5));
        assert!(pane.row(3, 20).is_empty());
    }

    #[test]
    fn size_is_empty() {
        assert!(Size::ZERO.is_empty());
        assert!(Size::new(3, 0).is_empty());
        assert!(!Size::new(3, 1).is_empty());
    }
}
