//! Arrow shape.

use super::ShapeId;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A straight arrow from a fixed tail to a head that tracks the pointer.
///
/// Points are stored exactly as they go over the wire: `[x1, y1, x2, y2]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Arrow {
    pub id: ShapeId,
    /// Stroke and fill color as a hex string.
    pub color: String,
    /// `[tail_x, tail_y, head_x, head_y]`.
    pub points: [f64; 4],
}

impl Arrow {
    /// Create a zero-length arrow with both endpoints at the gesture origin.
    pub fn new(color: String, origin: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            points: [origin.x, origin.y, origin.x, origin.y],
        }
    }

    /// Move the head to the live pointer position. The tail never moves.
    pub fn track(&mut self, pointer: Point) {
        self.points[2] = pointer.x;
        self.points[3] = pointer.y;
    }

    /// The fixed tail point.
    pub fn tail(&self) -> Point {
        Point::new(self.points[0], self.points[1])
    }

    /// The head point (where the arrowhead is drawn).
    pub fn head(&self) -> Point {
        Point::new(self.points[2], self.points[3])
    }
}
