//! File-based storage implementation.

use super::{Storage, StorageError, StorageResult};
use crate::export::SavedDrawing;
use std::fs;
use std::path::PathBuf;

/// File-based storage keeping one JSON document per drawing.
pub struct FileStorage {
    /// Base directory for drawing storage.
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a file storage rooted at the given directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {e}"))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the default location.
    ///
    /// On Unix: `~/.local/share/scribblepad/drawings/`
    /// On Windows: `%LOCALAPPDATA%\scribblepad\drawings\`
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine home directory".to_string()))?;

        let path = base.join("scribblepad").join("drawings");
        Self::new(path)
    }

    /// Get the file path for a drawing id.
    fn drawing_path(&self, id: &str) -> PathBuf {
        // Sanitize the id to be safe for filenames.
        let safe_id: String = id
            .chars()
            .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' { c } else { '_' })
            .collect();
        self.base_path.join(format!("{safe_id}.json"))
    }

    /// Get the base path.
    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, drawing: &SavedDrawing) -> StorageResult<()> {
        let path = self.drawing_path(id);
        let json = drawing
            .to_json()
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        fs::write(&path, json)
            .map_err(|e| StorageError::Io(format!("failed to write {}: {e}", path.display())))
    }

    fn load(&self, id: &str) -> StorageResult<SavedDrawing> {
        let path = self.drawing_path(id);
        if !path.exists() {
            return Err(StorageError::NotFound(id.to_string()));
        }
        let json = fs::read_to_string(&path)
            .map_err(|e| StorageError::Io(format!("failed to read {}: {e}", path.display())))?;
        SavedDrawing::from_json(&json).map_err(|e| StorageError::Serialization(e.to_string()))
    }

    fn delete(&self, id: &str) -> StorageResult<()> {
        let path = self.drawing_path(id);
        if path.exists() {
            fs::remove_file(&path).map_err(|e| {
                StorageError::Io(format!("failed to delete {}: {e}", path.display()))
            })?;
        }
        Ok(())
    }

    fn list(&self) -> StorageResult<Vec<String>> {
        let entries = fs::read_dir(&self.base_path)
            .map_err(|e| StorageError::Io(format!("failed to read storage directory: {e}")))?;

        let mut ids = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|e| StorageError::Io(format!("failed to read entry: {e}")))?;
            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    ids.push(stem.to_string());
                }
            }
        }
        Ok(ids)
    }

    fn exists(&self, id: &str) -> StorageResult<bool> {
        Ok(self.drawing_path(id).exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixmap::Pixmap;
    use scribblepad_core::Rgba;

    fn sample_drawing(name: &str) -> SavedDrawing {
        let mut pixmap = Pixmap::new(8, 8, Rgba::white());
        pixmap.set_pixel(2, 2, Rgba::black());
        SavedDrawing::from_pixmap(name, &pixmap).unwrap()
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let drawing = sample_drawing("dog");

        storage.save("slot-1", &drawing).unwrap();
        let loaded = storage.load("slot-1").unwrap();
        assert_eq!(loaded.name, "dog");
        assert_eq!(loaded.to_pixmap().unwrap(), drawing.to_pixmap().unwrap());
    }

    #[test]
    fn test_load_missing_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        assert!(matches!(storage.load("nope"), Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_delete_and_list() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("a", &sample_drawing("one")).unwrap();
        storage.save("b", &sample_drawing("two")).unwrap();

        let mut ids = storage.list().unwrap();
        ids.sort();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);

        storage.delete("a").unwrap();
        assert!(!storage.exists("a").unwrap());
        assert_eq!(storage.list().unwrap(), vec!["b".to_string()]);
    }

    #[test]
    fn test_ids_are_sanitized_for_filenames() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        storage.save("my drawing / v2", &sample_drawing("messy")).unwrap();
        let loaded = storage.load("my drawing / v2").unwrap();
        assert_eq!(loaded.name, "messy");
        // The file lives under the sanitized name inside the base dir.
        assert!(storage.base_path().join("my_drawing___v2.json").exists());
    }
}
