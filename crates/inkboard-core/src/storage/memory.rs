//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::state::CanvasState;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    states: RwLock<HashMap<String, CanvasState>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, state: &CanvasState) -> StorageResult<()> {
        let mut states = self
            .states
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
        states.insert(id.to_string(), state.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<CanvasState> {
        let states = self
            .states
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
        states
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut states = self
            .states
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
        states.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let states = self
            .states
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
        Ok(states.keys().cloned().collect())
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        let states = self
            .states
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
        Ok(states.contains_key(id))
    }
}
