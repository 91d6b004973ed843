//! Tool selection for the canvas.

use serde::{Deserialize, Serialize};

/// Available tools.
///
/// The active tool governs how pointer events are interpreted. It is mutated
/// only by an explicit user choice, never inferred from events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Tool {
    Select,
    #[default]
    Scribble,
    Rectangle,
    Circle,
    Arrow,
}

impl Tool {
    /// Whether this tool creates shapes on pointer-down.
    pub fn draws(&self) -> bool {
        !matches!(self, Tool::Select)
    }
}
