pub mod entity;
pub mod invariants;

pub use entity::{split_entries, Difficulty, Recipe, RecipeDraft, RecipePatch};
pub use invariants::{validate_draft, validate_recipe, Violation};
