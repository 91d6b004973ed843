//! Transform-target bridge to the external renderer.

use crate::shapes::ShapeId;

/// Tracks the single shape currently handed to the externally-owned
/// transform handles (single-selection model, no multi-select).
///
/// The core never mutates geometry during an external transform; the
/// renderer reports the final geometry back through
/// [`Canvas::commit_geometry`](crate::controller::Canvas::commit_geometry).
#[derive(Debug, Clone, Copy, Default)]
pub struct TransformTarget {
    target: Option<ShapeId>,
}

impl TransformTarget {
    pub fn new() -> Self {
        Self::default()
    }

    /// Designate a shape as the transform target.
    pub fn set(&mut self, id: ShapeId) {
        self.target = Some(id);
    }

    /// Clear the target, e.g. on a background click.
    pub fn clear(&mut self) {
        self.target = None;
    }

    pub fn get(&self) -> Option<ShapeId> {
        self.target
    }
}
