//! In-memory storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::export::SavedDrawing;
use std::collections::HashMap;
use std::sync::RwLock;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    drawings: RwLock<HashMap<String, SavedDrawing>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, drawing: &SavedDrawing) -> StorageResult<()> {
        let mut drawings = self
            .drawings
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        drawings.insert(id.to_string(), drawing.clone());
        Ok(())
    }

    fn load(&self, id: &str) -> StorageResult<SavedDrawing> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        drawings
            .get(id)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(id.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let mut drawings = self
            .drawings
            .write()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        drawings.remove(id);
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        Ok(drawings.keys().cloned().collect())
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        let drawings = self
            .drawings
            .read()
            .map_err(|e| StorageError::Other(format!("lock error: {e}")))?;
        Ok(drawings.contains_key(id))
    }
}
