// src/storage/backend.rs
//
// Durable storage boundary - string keys, text payloads

use crate::error::StorageResult;

/// Key-value text storage the store persists through.
///
/// Implementations own durability only. They never interpret payloads:
/// serialization, corruption handling and recovery all live above this
/// boundary.
///
/// CRITICAL RULES:
/// - `read` distinguishes "no payload under this key" (`Ok(None)`) from
///   a storage failure (`Err`)
/// - `write` replaces the whole payload under the key; readers must
///   never observe a partial write
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send + Sync {
    /// Returns the payload stored under `key`, or `None` if the key has
    /// never been written.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, overwriting any previous payload.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}
