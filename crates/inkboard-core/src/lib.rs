//! Inkboard Core Library
//!
//! Renderer-agnostic editing model for a whiteboard canvas: shape data,
//! the pointer-driven interaction state machine, undo/redo history, and
//! the save/load/export serialization contract. Rendering, pointer capture
//! and file I/O mechanics live in external collaborators.

pub mod controller;
pub mod export;
pub mod history;
pub mod render;
pub mod selection;
pub mod session;
pub mod shapes;
pub mod state;
pub mod storage;
pub mod store;
pub mod tools;

pub use controller::{Canvas, Geometry, ImportError};
pub use export::{ExportFormat, ExportRequest, SAVE_FILE_NAME, SAVE_MIME_TYPE};
pub use history::{History, HistoryEntry};
pub use render::{RenderImage, RenderList, RenderShape, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use selection::TransformTarget;
pub use session::DrawSession;
pub use shapes::{
    Arrow, BackgroundImage, Circle, ImageFormat, Rectangle, Scribble, Shape, ShapeId, ShapeKind,
};
pub use state::{CanvasState, DecodeError};
pub use storage::{FileStorage, MemoryStorage, Storage, StorageError, StorageResult};
pub use store::{CanvasStore, ShapeSnapshot};
pub use tools::Tool;
