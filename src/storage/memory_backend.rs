// src/storage/memory_backend.rs

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::backend::StorageBackend;
use crate::error::StorageResult;

/// In-memory backend for tests and ephemeral sessions.
///
/// Clones share the same underlying map, so a store under test and the
/// test itself can observe the same payloads.
#[derive(Clone, Default)]
pub struct MemoryBackend {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored key and payload.
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.entries.read().unwrap().clone()
    }
}

impl StorageBackend for MemoryBackend {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        self.entries
            .write()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unwritten_keys_read_as_none() {
        let backend = MemoryBackend::new();
        assert_eq!(backend.read("missing").unwrap(), None);
    }

    #[test]
    fn test_writes_overwrite_and_read_back() {
        let backend = MemoryBackend::new();
        backend.write("k", "first").unwrap();
        backend.write("k", "second").unwrap();
        assert_eq!(backend.read("k").unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_clones_share_the_same_entries() {
        let backend = MemoryBackend::new();
        let observer = backend.clone();

        backend.write("shared", "payload").unwrap();

        assert_eq!(observer.read("shared").unwrap().as_deref(), Some("payload"));
        assert_eq!(observer.snapshot().len(), 1);
    }
}
