pub mod types;

pub use types::{StorageError, StorageResult, StoreError, StoreResult};
