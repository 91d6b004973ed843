//! Freehand scribble shape.

use super::{flat_points, ShapeId};
use kurbo::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A freehand scribble: an ordered polyline of pointer positions.
///
/// Points are append-only while a draw gesture is active and a scribble
/// always holds at least one point once created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scribble {
    pub id: ShapeId,
    /// Stroke color as a hex string.
    pub color: String,
    /// Points along the path, serialized as a flat `[x0, y0, x1, y1, ...]` list.
    #[serde(with = "flat_points")]
    pub points: Vec<Point>,
}

impl Scribble {
    /// Create a new scribble starting at the gesture origin.
    pub fn new(color: String, origin: Point) -> Self {
        Self {
            id: Uuid::new_v4(),
            color,
            points: vec![origin],
        }
    }

    /// Append the live pointer position to the path.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Number of points in the path.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}
