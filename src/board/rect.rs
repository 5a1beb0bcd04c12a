//! Rectangle shapes with rotation and congruence semantics
//!
//! A shape is identified by its `{width, height}` pair; two shapes that
//! differ only by a 90° rotation are congruent and may not both appear in
//! one tiling.

use std::fmt;

/// Axis-aligned rectangle shape measured in board tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Rect {
    /// Horizontal extent
    pub width: usize,
    /// Vertical extent
    pub height: usize,
}

impl Rect {
    /// Create a shape from its width and height
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Number of tiles the shape covers
    pub const fn area(&self) -> usize {
        self.width * self.height
    }

    /// The same shape rotated by 90°
    pub const fn rotated(&self) -> Self {
        Self {
            width: self.height,
            height: self.width,
        }
    }

    /// Whether rotation leaves the shape unchanged
    pub const fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// The orientation with `width >= height`, used as the class
    /// representative for congruence
    pub const fn canonical(&self) -> Self {
        if self.width >= self.height {
            *self
        } else {
            self.rotated()
        }
    }

    /// Whether two shapes match up to rotation
    pub const fn congruent(&self, other: &Self) -> bool {
        (self.width == other.width && self.height == other.height)
            || (self.width == other.height && self.height == other.width)
    }

    /// Whether this orientation fits a `cols`×`rows` board
    pub const fn fits(&self, cols: usize, rows: usize) -> bool {
        self.width <= cols && self.height <= rows
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::Rect;

    #[test]
    fn rotation_swaps_extents_and_preserves_area() {
        let rect = Rect::new(5, 2);
        assert_eq!(rect.rotated(), Rect::new(2, 5));
        assert_eq!(rect.rotated().area(), rect.area());
        assert_eq!(rect.rotated().rotated(), rect);
    }

    #[test]
    fn canonical_form_is_wide() {
        assert_eq!(Rect::new(2, 5).canonical(), Rect::new(5, 2));
        assert_eq!(Rect::new(5, 2).canonical(), Rect::new(5, 2));
        assert_eq!(Rect::new(3, 3).canonical(), Rect::new(3, 3));
    }

    #[test]
    fn congruence_ignores_orientation() {
        assert!(Rect::new(4, 1).congruent(&Rect::new(1, 4)));
        assert!(Rect::new(4, 1).congruent(&Rect::new(4, 1)));
        assert!(!Rect::new(4, 1).congruent(&Rect::new(2, 2)));
    }

    #[test]
    fn fit_is_orientation_sensitive() {
        let tall = Rect::new(1, 6);
        assert!(!tall.fits(5, 5));
        assert!(tall.rotated().fits(6, 1));
    }
}
