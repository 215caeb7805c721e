//! Rectangle value type.
//!
//! Every tile owns two rects: the settled rect (its authoritative,
//! committed position) and the candidate rect (the tentative position
//! while dragging or being auto-fit).

use glam::DVec2;

/// Axis-aligned rectangle in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a rect with position and size.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Create a rect from origin and size vectors.
    pub fn from_vecs(origin: DVec2, size: DVec2) -> Self {
        Self {
            x: origin.x,
            y: origin.y,
            width: size.x,
            height: size.y,
        }
    }

    /// Get the origin as a DVec2.
    pub fn origin(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    /// Get the size as a DVec2.
    pub fn size(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Get the right edge (x + width).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Get the bottom edge (y + height).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Check if a point is inside the rect.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    /// Check if this rect overlaps another (touching edges do not count).
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0);
        assert!(rect.contains(50.0, 40.0));
        assert!(rect.contains(10.0, 20.0));
        assert!(!rect.contains(5.0, 40.0));
        assert!(!rect.contains(50.0, 100.0));
    }

    #[test]
    fn test_intersects() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(50.0, 50.0, 100.0, 100.0);
        let c = Rect::new(100.0, 0.0, 50.0, 50.0);
        assert!(a.intersects(&b));
        // Edge-adjacent rects do not overlap
        assert!(!a.intersects(&c));
    }

    #[test]
    fn test_vec_accessors() {
        let rect = Rect::from_vecs(DVec2::new(10.0, 20.0), DVec2::new(30.0, 40.0));
        assert_eq!(rect.origin(), DVec2::new(10.0, 20.0));
        assert_eq!(rect.size(), DVec2::new(30.0, 40.0));
        assert!((rect.right() - 40.0).abs() < 0.001);
        assert!((rect.bottom() - 60.0).abs() < 0.001);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let rect = Rect::new(1.0, 2.0, 3.0, 4.0);
        let json = serde_json::to_string(&rect).unwrap();
        let back: Rect = serde_json::from_str(&json).unwrap();
        assert_eq!(rect, back);
    }
}
