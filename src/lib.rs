// src/lib.rs
// RecipeBox - Local-first recipe catalog
//
// Architecture:
// - Domain-centric: records and their invariants live in domain
// - Explicit: every mutation persists before it commits to memory
// - Local-first: the whole catalog lives under one durable storage key
// - Storage-agnostic: the store talks to an injected backend, never to
//   the filesystem directly

// ============================================================================
// MODULES
// ============================================================================

pub mod domain;
pub mod error;
pub mod query;
pub mod storage;
pub mod store;

// ============================================================================
// PUBLIC API - Domain Entities
// ============================================================================

pub use domain::{
    split_entries,
    validate_draft,
    validate_recipe,
    Difficulty,
    Recipe,
    RecipeDraft,
    RecipePatch,
    Violation,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{StorageError, StorageResult, StoreError, StoreResult};

// ============================================================================
// PUBLIC API - Query
// ============================================================================

pub use query::{filter_recipes, DifficultyFilter};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use storage::{FileBackend, MemoryBackend, StorageBackend};

// ============================================================================
// PUBLIC API - Store
// ============================================================================

pub use store::{starter_recipes, RecipeStore, StoreOptions};
