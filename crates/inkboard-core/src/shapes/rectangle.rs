//! Rectangle shape.

use super::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A rectangle anchored at the gesture-start corner.
///
/// `width` and `height` are signed extents from the anchor: negative values
/// mean the rectangle grows left/up from `(x, y)`. They are intentionally
/// never normalized, since the renderer interprets negative extents as
/// mirrored draw direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub id: ShapeId,
    /// Stroke color as a hex string.
    pub color: String,
    /// Anchor corner, fixed at gesture start.
    pub x: f64,
    pub y: f64,
    /// Signed extent from the anchor towards the pointer.
    pub width: f64,
    pub height: f64,
}

impl Rectangle {
    /// Create a degenerate 1x1 rectangle at the gesture origin.
    pub fn new(color: String, anchor: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            x: anchor.x,
            y: anchor.y,
            width: 1.0,
            height: 1.0,
        }
    }

    /// Stretch the rectangle so the far corner follows the pointer.
    pub fn track(&mut self, pointer: Point) {
        self.width = pointer.x - self.x;
        self.height = pointer.y - self.y;
    }

    /// The fixed anchor corner.
    pub fn anchor(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_is_degenerate() {
        let rect = Rectangle::new("#000000".into(), Point::new(10.0, 20.0));
        assert_eq!(rect.anchor(), Point::new(10.0, 20.0));
        assert!((rect.width - 1.0).abs() < f64::EPSILON);
        assert!((rect.height - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_track_keeps_anchor() {
        let mut rect = Rectangle::new("#000000".into(), Point::new(10.0, 10.0));
        rect.track(Point::new(60.0, 40.0));

        assert_eq!(rect.anchor(), Point::new(10.0, 10.0));
        assert!((rect.width - 50.0).abs() < f64::EPSILON);
        assert!((rect.height - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_negative_extents_preserved() {
        let mut rect = Rectangle::new("#000000".into(), Point::new(10.0, 10.0));
        rect.track(Point::new(5.0, 2.0));

        assert!((rect.width - -5.0).abs() < f64::EPSILON);
        assert!((rect.height - -8.0).abs() < f64::EPSILON);
    }
}
