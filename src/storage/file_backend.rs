// src/storage/file_backend.rs
//
// File-based storage backend
//
// PRINCIPLES:
// - One key = one file under a single root directory
// - Whole-payload replacement, never partial writes
// - No payload interpretation

use std::fs;
use std::io;
use std::path::PathBuf;

use super::backend::StorageBackend;
use crate::error::{StorageError, StorageResult};

/// Directory under the platform data dir holding all payload files.
/// Path structure: {APP_DATA}/recipebox/{key}.json
const DATA_DIR_NAME: &str = "recipebox";

/// Backend persisting each key as a UTF-8 text file.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    /// Backend rooted at the platform application data directory.
    pub fn new() -> StorageResult<Self> {
        let data_dir = dirs::data_dir().ok_or_else(|| {
            StorageError::Unavailable("could not determine app data directory".to_string())
        })?;

        Self::at(data_dir.join(DATA_DIR_NAME))
    }

    /// Backend rooted at an explicit directory. Creates it if missing.
    pub fn at(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Keys map to file names, so anything that could escape the root
    /// directory is rejected.
    fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.contains('/') || key.contains('\\') || key.contains("..") {
            return Err(StorageError::InvalidKey(key.to_string()));
        }

        Ok(self.root.join(format!("{key}.json")))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;

        match fs::read_to_string(&path) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::Io(e)),
        }
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;

        // Rename makes the replacement atomic: readers see the old
        // payload or the new one, never a truncated file.
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, value)?;
        fs::rename(&staging, &path)?;

        Ok(())
    }
}
