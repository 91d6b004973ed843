//! Draw-session tracking for pointer gestures.

use crate::shapes::ShapeId;

/// Tracks whether a pointer-down-to-pointer-up gesture is in progress and
/// which shape it is extending.
///
/// The `active` flag is the sole guard against move events mutating a shape
/// when no gesture is open. After pointer-up the shape id is retained but
/// inert until the next pointer-down overwrites it.
#[derive(Debug, Clone, Default)]
pub struct DrawSession {
    active: bool,
    current_shape: Option<ShapeId>,
}

impl DrawSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a gesture extending the given shape. An already-active session
    /// is implicitly abandoned.
    pub fn begin(&mut self, shape: ShapeId) {
        self.active = true;
        self.current_shape = Some(shape);
    }

    /// Close the gesture. The current shape id stays behind, inert.
    pub fn end(&mut self) {
        self.active = false;
    }

    /// Abandon the gesture and forget the tracked shape.
    pub fn cancel(&mut self) {
        self.active = false;
        self.current_shape = None;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// The shape the active gesture is extending, if any.
    pub fn active_shape(&self) -> Option<ShapeId> {
        if self.active { self.current_shape } else { None }
    }
}
