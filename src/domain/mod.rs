// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// This file MUST declare all domain modules and re-export their public API.
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod recipe;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Recipe Domain
pub use recipe::{
    split_entries, validate_draft, validate_recipe, Difficulty, Recipe, RecipeDraft, RecipePatch,
    Violation,
};
