//! Axis-aligned rectangle geometry for paddles
//!
//! Coordinates follow the drawing surface: origin at the top-left corner,
//! `y` grows downward.

use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    #[inline]
    pub fn center_y(&self) -> f32 {
        self.y + self.height / 2.0
    }

    /// Strict overlap of the span `top..bottom` with this rectangle's vertical extent
    ///
    /// Touching edges do not count as overlap.
    #[inline]
    pub fn overlaps_vertically(&self, top: f32, bottom: f32) -> bool {
        bottom > self.top() && top < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(20.0, 250.0, 10.0, 100.0);
        assert_eq!(r.left(), 20.0);
        assert_eq!(r.right(), 30.0);
        assert_eq!(r.top(), 250.0);
        assert_eq!(r.bottom(), 350.0);
        assert_eq!(r.center_y(), 300.0);
    }

    #[test]
    fn test_vertical_overlap_excludes_touching() {
        let r = Rect::new(0.0, 100.0, 10.0, 100.0);
        assert!(r.overlaps_vertically(90.0, 110.0));
        assert!(r.overlaps_vertically(190.0, 210.0));
        // Sharing only an edge is not an overlap
        assert!(!r.overlaps_vertically(88.0, 100.0));
        assert!(!r.overlaps_vertically(200.0, 212.0));
    }
}
