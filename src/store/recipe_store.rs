// src/store/recipe_store.rs
//
// Recipe store - single source of truth for the catalog
//
// PRINCIPLES:
// - Exclusive ownership of the in-memory collection
// - Every mutation persists before it returns
// - Validation runs before any mutation is attempted
// - Corrupted payloads recover to the seed, never crash

use chrono::Utc;
use log::{debug, warn};

use crate::domain::{validate_draft, validate_recipe, Recipe, RecipeDraft, RecipePatch};
use crate::error::{StoreError, StoreResult};
use crate::storage::StorageBackend;

use super::seed::starter_recipes;

/// Storage key and seed collection for a store.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Durable key the whole collection lives under
    pub storage_key: String,

    /// Collection adopted when no payload exists or recovery resets
    pub seed: Vec<Recipe>,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            storage_key: "recipes_v1".to_string(),
            seed: starter_recipes(),
        }
    }
}

/// Owner of the recipe collection and its durable mirror.
///
/// The collection is ordered newest first: `create` prepends. Every
/// mutating operation writes the full collection back to the backend
/// before returning, and the in-memory state only advances once that
/// write has succeeded.
pub struct RecipeStore {
    backend: Box<dyn StorageBackend>,
    options: StoreOptions,
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    /// Store over `backend` with default options. Performs no IO;
    /// call `load` to populate the collection.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self::with_options(backend, StoreOptions::default())
    }

    pub fn with_options(backend: Box<dyn StorageBackend>, options: StoreOptions) -> Self {
        Self {
            backend,
            options,
            recipes: Vec::new(),
        }
    }

    /// Read the durable payload and adopt it as the in-memory collection.
    ///
    /// Never fails the caller:
    /// - no payload yet: the seed collection is adopted and persisted
    /// - unparseable payload: the raw text is archived under a
    ///   timestamped backup key (best effort), then the seed is adopted
    ///   and persisted
    /// - unreadable storage: the seed is adopted, and persisting it is
    ///   attempted; failures are logged
    pub fn load(&mut self) -> &[Recipe] {
        match self.backend.read(&self.options.storage_key) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<Recipe>>(&raw) {
                Ok(parsed) => self.recipes = parsed,
                Err(e) => {
                    warn!("Stored collection is corrupted, resetting to seed: {}", e);
                    self.archive_corrupted(&raw);
                    self.reset_to_seed();
                }
            },
            Ok(None) => self.reset_to_seed(),
            Err(e) => {
                warn!("Could not read stored collection, starting from seed: {}", e);
                self.reset_to_seed();
            }
        }

        &self.recipes
    }

    /// Current in-memory collection, newest first.
    pub fn list(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Record with the given id, if present.
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Validate the draft, stamp identity, prepend, persist.
    /// On any failure the collection is unchanged.
    pub fn create(&mut self, draft: RecipeDraft) -> StoreResult<Recipe> {
        let violations = validate_draft(&draft);
        if !violations.is_empty() {
            return Err(StoreError::Validation(violations));
        }

        let recipe = Recipe::from_draft(draft);

        let mut next = self.recipes.clone();
        next.insert(0, recipe.clone());
        self.save(next)?;

        Ok(recipe)
    }

    /// Merge the patch over the stored record, validate the merged
    /// result, persist. Fails with `NotFound` for unknown ids; on any
    /// failure the collection is unchanged.
    pub fn update(&mut self, id: &str, patch: RecipePatch) -> StoreResult<Recipe> {
        let index = self
            .recipes
            .iter()
            .position(|recipe| recipe.id == id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        let mut merged = self.recipes[index].clone();
        merged.apply(patch);

        let violations = validate_recipe(&merged);
        if !violations.is_empty() {
            return Err(StoreError::Validation(violations));
        }

        let mut next = self.recipes.clone();
        next[index] = merged.clone();
        self.save(next)?;

        Ok(merged)
    }

    /// Remove the record with the given id and persist. Unknown ids are
    /// a no-op; the collection is persisted either way.
    pub fn delete(&mut self, id: &str) -> StoreResult<()> {
        let next: Vec<Recipe> = self
            .recipes
            .iter()
            .filter(|recipe| recipe.id != id)
            .cloned()
            .collect();

        self.save(next)
    }

    /// Serialize `next` and write it under the storage key. The
    /// in-memory collection only advances after the write succeeds, so
    /// memory and durable state cannot drift apart.
    fn save(&mut self, next: Vec<Recipe>) -> StoreResult<()> {
        let payload = serde_json::to_string(&next)?;
        self.backend.write(&self.options.storage_key, &payload)?;

        debug!(
            "Persisted {} recipes under key {}",
            next.len(),
            self.options.storage_key
        );

        self.recipes = next;
        Ok(())
    }

    fn reset_to_seed(&mut self) {
        if let Err(e) = self.save(self.options.seed.clone()) {
            warn!("Could not persist seed collection: {}", e);
            self.recipes = self.options.seed.clone();
        }
    }

    /// Keep the corrupted payload under a timestamped sibling key for
    /// diagnosis. Best effort: failures are logged and swallowed, and
    /// the archive is never read back.
    fn archive_corrupted(&self, raw: &str) {
        let backup_key = format!(
            "{}_backup_{}",
            self.options.storage_key,
            Utc::now().timestamp_millis()
        );

        if let Err(e) = self.backend.write(&backup_key, raw) {
            warn!("Could not archive corrupted payload: {}", e);
        }
    }
}
