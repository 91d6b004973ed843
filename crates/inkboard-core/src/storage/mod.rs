//! Storage abstraction for persisted canvas state.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::state::CanvasState;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("canvas not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("IO error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// A backend holding persisted canvas states keyed by id.
///
/// Operations are synchronous, like everything else in this crate: all
/// mutations happen inside a single event handler and nothing suspends.
pub trait Storage: Send + Sync {
    /// Save a canvas state under an id, overwriting any previous state.
    fn save(&self, id: &str, state: &CanvasState) -> StorageResult<()>;

    /// Load the canvas state saved under an id.
    fn load(&self, id: &str) -> StorageResult<CanvasState>;

    /// Delete a saved state. Deleting an absent id is not an error.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// List all saved ids.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Check whether an id has a saved state.
    fn exists(&self, id: &str) -> StorageResult<bool>;
}
