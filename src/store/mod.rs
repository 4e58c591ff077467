// src/store/mod.rs
//
// Store layer
//
// CRITICAL RULES:
// - The store owns the collection; no other module holds a mutable
//   reference to it
// - Validation runs before any write is attempted
// - The in-memory collection advances only after the durable write
//   succeeds
// - load never fails the caller

pub mod recipe_store;
pub mod seed;


pub use recipe_store::{RecipeStore, StoreOptions};
pub use seed::starter_recipes;
