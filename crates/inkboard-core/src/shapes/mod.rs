//! Shape definitions for the canvas.

mod arrow;
mod circle;
mod image;
mod rectangle;
mod scribble;

pub use arrow::Arrow;
pub use circle::Circle;
pub use image::{BackgroundImage, ImageFormat};
pub use rectangle::Rectangle;
pub use scribble::Scribble;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for shapes.
pub type ShapeId = Uuid;

/// Default stroke color applied to new shapes until the user picks one.
pub const DEFAULT_STROKE_COLOR: &str = "#000000";

/// Default canvas backdrop color.
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// The four drawable shape kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ShapeKind {
    Scribble,
    Rectangle,
    Circle,
    Arrow,
}

/// Enum wrapper for all shape types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    Scribble(Scribble),
    Rectangle(Rectangle),
    Circle(Circle),
    Arrow(Arrow),
}

impl Shape {
    pub fn id(&self) -> ShapeId {
        match self {
            Shape::Scribble(s) => s.id,
            Shape::Rectangle(s) => s.id,
            Shape::Circle(s) => s.id,
            Shape::Arrow(s) => s.id,
        }
    }

    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Scribble(_) => ShapeKind::Scribble,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
            Shape::Circle(_) => ShapeKind::Circle,
            Shape::Arrow(_) => ShapeKind::Arrow,
        }
    }

    pub fn color(&self) -> &str {
        match self {
            Shape::Scribble(s) => &s.color,
            Shape::Rectangle(s) => &s.color,
            Shape::Circle(s) => &s.color,
            Shape::Arrow(s) => &s.color,
        }
    }
}

/// Serde helper for point sequences stored on the wire as a flat
/// `[x0, y0, x1, y1, ...]` number list.
pub(crate) mod flat_points {
    use kurbo::Point;
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(points: &[Point], serializer: S) -> Result<S::Ok, S::Error> {
        let flat: Vec<f64> = points.iter().flat_map(|p| [p.x, p.y]).collect();
        serializer.collect_seq(flat)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Point>, D::Error> {
        let flat = Vec::<f64>::deserialize(deserializer)?;
        if flat.len() % 2 != 0 {
            return Err(D::Error::custom(format!(
                "point list has odd length {}",
                flat.len()
            )));
        }
        Ok(flat.chunks_exact(2).map(|c| Point::new(c[0], c[1])).collect())
    }
}
