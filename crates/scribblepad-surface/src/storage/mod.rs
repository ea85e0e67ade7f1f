//! Storage abstraction for saved drawings.

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::export::SavedDrawing;
use thiserror::Error;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("drawing not found: {0}")]
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

/// Trait for drawing storage backends.
///
/// Synchronous by design: the drawing surface is single-threaded and
/// event-driven, and both backends complete locally.
pub trait Storage {
    /// Save a drawing under the given id, replacing any existing one.
    fn save(&self, id: &str, drawing: &SavedDrawing) -> StorageResult<()>;

    /// Load the drawing saved under the given id.
    fn load(&self, id: &str) -> StorageResult<SavedDrawing>;

    /// Delete the drawing saved under the given id, if present.
    fn delete(&self, id: &str) -> StorageResult<()>;

    /// List all saved drawing ids.
    fn list(&self) -> StorageResult<Vec<String>>;

    /// Whether a drawing exists under the given id.
    fn exists(&self, id: &str) -> StorageResult<bool>;
}
