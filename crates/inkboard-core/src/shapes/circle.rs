//! Circle shape.

use super::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A circle centered at the gesture-start position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub id: ShapeId,
    /// Stroke color as a hex string.
    pub color: String,
    /// Center, fixed at gesture start.
    pub x: f64,
    pub y: f64,
    /// Distance from the center to the pointer, always >= 0.
    pub radius: f64,
}

impl Circle {
    /// Create a degenerate circle (radius 1) at the gesture origin.
    pub fn new(color: String, center: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            x: center.x,
            y: center.y,
            radius: 1.0,
        }
    }

    /// Recompute the radius as the Euclidean distance to the pointer.
    pub fn track(&mut self, pointer: Point) {
        self.radius = (pointer - self.center()).hypot();
    }

    /// The fixed center point.
    pub fn center(&self) -> Point {
        Point::new(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation_is_degenerate() {
        let circle = Circle::new("#000000".into(), Point::new(3.0, 4.0));
        assert_eq!(circle.center(), Point::new(3.0, 4.0));
        assert!((circle.radius - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_track_euclidean_radius() {
        let mut circle = Circle::new("#000000".into(), Point::new(0.0, 0.0));
        circle.track(Point::new(3.0, 4.0));
        assert!((circle.radius - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_track_keeps_center() {
        let mut circle = Circle::new("#000000".into(), Point::new(10.0, 10.0));
        circle.track(Point::new(50.0, 50.0));
        assert_eq!(circle.center(), Point::new(10.0, 10.0));
    }
}
