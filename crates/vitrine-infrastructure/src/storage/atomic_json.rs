//! Atomic single-file JSON persistence.
//!
//! Writes go to a temporary file in the same directory, are fsynced, and
//! replace the target via atomic rename, so a crash mid-write never leaves
//! a torn file behind.

use std::fs::{self, File};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;
use vitrine_core::error::{Result, VitrineError};

/// A handle to one JSON-serialized value on disk.
pub struct AtomicJsonFile<T> {
    path: PathBuf,
    _phantom: PhantomData<T>,
}

impl<T> AtomicJsonFile<T>
where
    T: Serialize + DeserializeOwned,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }

    /// Loads and deserializes the file.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(T))`: Successfully loaded and deserialized
    /// - `Ok(None)`: File doesn't exist or is empty
    /// - `Err`: Failed to read or parse the file
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        let data: T = serde_json::from_str(&content)?;
        Ok(Some(data))
    }

    /// Saves the value atomically (temp file + fsync + rename).
    pub fn save(&self, data: &T) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let json = serde_json::to_string_pretty(data)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(json.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }

    /// Removes the file. A missing file is not an error.
    pub fn delete(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| VitrineError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| VitrineError::io("Path has no file name"))?;
        let tmp_name = format!(".{}.tmp", file_name.to_string_lossy());
        Ok(parent.join(tmp_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct TestPayload {
        name: String,
        count: u32,
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<TestPayload>::new(temp_dir.path().join("payload.json"));

        let payload = TestPayload {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&payload).unwrap();

        let loaded = file.load().unwrap().unwrap();
        assert_eq!(loaded, payload);
    }

    #[test]
    fn test_load_nonexistent_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<TestPayload>::new(temp_dir.path().join("missing.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_delete_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicJsonFile::<TestPayload>::new(temp_dir.path().join("payload.json"));
        file.save(&TestPayload {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();

        file.delete().unwrap();
        assert!(file.load().unwrap().is_none());
        // Deleting again is fine.
        file.delete().unwrap();
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payload.json");
        let file = AtomicJsonFile::<TestPayload>::new(path.clone());
        file.save(&TestPayload {
            name: "x".to_string(),
            count: 1,
        })
        .unwrap();

        assert!(path.exists());
        assert!(!temp_dir.path().join(".payload.json.tmp").exists());
    }

    #[test]
    fn test_corrupt_file_is_a_serialization_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("payload.json");
        fs::write(&path, "{ not json").unwrap();

        let file = AtomicJsonFile::<TestPayload>::new(path);
        let err = file.load().unwrap_err();
        assert!(matches!(err, VitrineError::Serialization { .. }));
    }
}
