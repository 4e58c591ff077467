// src/error/types.rs
use crate::domain::Violation;
use serde::Serialize;
use thiserror::Error;

/// Errors the storage backend can surface.
/// `read` and `write` are the only operations, so this stays small.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),
}

/// Errors a store operation can fail with.
/// Corrupted payloads never appear here: `load` recovers from them
/// internally and always returns a collection.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Validation failed: {}", join_violations(.0))]
    Validation(Vec<Violation>),

    #[error("Recipe not found: {0}")]
    NotFound(String),

    #[error("Persistence error: {0}")]
    Persistence(#[from] StorageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Serialize for StoreError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(|violation| violation.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type StorageResult<T> = Result<T, StorageError>;
pub type StoreResult<T> = Result<T, StoreError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_lists_every_violation() {
        let error = StoreError::Validation(vec![
            Violation::TitleTooShort,
            Violation::NoIngredients,
        ]);

        assert_eq!(
            error.to_string(),
            "Validation failed: title is required (min 2 characters); \
             at least one ingredient is required"
        );
    }

    #[test]
    fn test_storage_errors_convert_into_persistence_errors() {
        let storage = StorageError::Unavailable("quota exceeded".to_string());
        let error = StoreError::from(storage);
        assert!(matches!(error, StoreError::Persistence(_)));
    }

    #[test]
    fn test_errors_serialize_as_their_display_string() {
        let error = StoreError::NotFound("recipe-7".to_string());
        let json = serde_json::to_string(&error).unwrap();
        assert_eq!(json, "\"Recipe not found: recipe-7\"");
    }
}
