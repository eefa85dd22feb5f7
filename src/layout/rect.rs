//! Rect: A rectangle primitive for layout calculations.

/// A rectangle defined by position and size.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rect {
    /// X coordinate (column) of the top-left corner.
    pub x: u16,
    /// Y coordinate (row) of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub width: u16,
    /// Height in rows.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rectangle from a terminal size (full screen).
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Zero-sized rectangle.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Check if the rectangle is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Get the right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Get the bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Split vertically at a given row offset.
    pub fn split_vertical(&self, at: u16) -> (Self, Self) {
        let at = at.min(self.height);
        (
            Self::new(self.x, self.y, self.width, at),
            Self::new(self.x, self.y + at, self.width, self.height - at),
        )
    }

    /// The `index`-th of `count` equal-as-possible vertical slices.
    ///
    /// Slice edges are spread with integer rounding, so widths differ by at
    /// most one column. When `count` exceeds the width, some slices are
    /// zero columns wide.
    pub fn column(&self, index: usize, count: usize) -> Self {
        if count == 0 || index >= count {
            return Self::new(self.right(), self.y, 0, self.height);
        }
        let width = usize::from(self.width);
        let edge = |i: usize| u16::try_from(i * width / count).unwrap_or(self.width);
        let start = edge(index);
        let end = edge(index + 1);
        Self::new(self.x + start, self.y, end - start, self.height)
    }
}

impl std::fmt::Debug for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rect({}, {} {}x{})", self.x, self.y, self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_vertical() {
        let (top, bottom) = Rect::from_size(80, 24).split_vertical(2);
        assert_eq!(top, Rect::new(0, 0, 80, 2));
        assert_eq!(bottom, Rect::new(0, 2, 80, 22));

        let (top, bottom) = Rect::from_size(80, 1).split_vertical(2);
        assert_eq!(top.height, 1);
        assert!(bottom.is_empty());
    }

    #[test]
    fn test_columns_tile_the_rect() {
        let area = Rect::new(3, 1, 100, 10);
        let mut next_x = area.x;
        for i in 0..80 {
            let col = area.column(i, 80);
            assert_eq!(col.x, next_x);
            assert!(col.width == 1 || col.width == 2);
            next_x = col.right();
        }
        assert_eq!(next_x, area.right());
    }

    #[test]
    fn test_columns_when_narrow() {
        let area = Rect::from_size(10, 5);
        let total: u16 = (0..80).map(|i| area.column(i, 80).width).sum();
        assert_eq!(total, 10);
        assert!(area.column(80, 80).is_empty());
    }
}
