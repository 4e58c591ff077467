// src/query/mod.rs
//
// Query layer
//
// CRITICAL RULES:
// - Pure functions only
// - NO mutation of the input collection
// - NO storage access

pub mod filter;

pub use filter::{filter_recipes, DifficultyFilter};
