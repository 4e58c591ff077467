// src/storage/mod.rs
//
// Storage layer
//
// CRITICAL RULES:
// - Backends are DUMB key-value text stores
// - NO payload interpretation
// - NO recovery logic (that lives in the store)
// - NO business logic

pub mod backend;
pub mod file_backend;
pub mod memory_backend;

pub use backend::StorageBackend;
pub use file_backend::FileBackend;
pub use memory_backend::MemoryBackend;

#[cfg(test)]
pub use backend::MockStorageBackend;
