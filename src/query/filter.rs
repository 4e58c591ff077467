// src/query/filter.rs
//
// Catalog filtering - pure functions over a borrowed collection

use std::str::FromStr;

use crate::domain::{Difficulty, Recipe, Violation};

/// Difficulty facet of the catalog filter.
/// `All` is the sentinel that disables the facet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DifficultyFilter {
    #[default]
    All,
    Level(Difficulty),
}

impl DifficultyFilter {
    pub fn matches(&self, difficulty: Difficulty) -> bool {
        match self {
            DifficultyFilter::All => true,
            DifficultyFilter::Level(level) => *level == difficulty,
        }
    }
}

impl FromStr for DifficultyFilter {
    type Err = Violation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "All" => Ok(DifficultyFilter::All),
            other => other.parse().map(DifficultyFilter::Level),
        }
    }
}

impl std::fmt::Display for DifficultyFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DifficultyFilter::All => f.write_str("All"),
            DifficultyFilter::Level(level) => f.write_str(level.as_str()),
        }
    }
}

/// Narrow a collection by title text and difficulty facet.
///
/// - Difficulty must match exactly unless the facet is `All`
/// - Search text is trimmed and case-folded; when non-empty, it must
///   occur as a substring of the case-folded title
/// - Input order is preserved; the input is never mutated
pub fn filter_recipes<'a>(
    recipes: &'a [Recipe],
    search_text: &str,
    difficulty: DifficultyFilter,
) -> Vec<&'a Recipe> {
    let needle = search_text.trim().to_lowercase();

    recipes
        .iter()
        .filter(|recipe| difficulty.matches(recipe.difficulty))
        .filter(|recipe| needle.is_empty() || recipe.title.to_lowercase().contains(&needle))
        .collect()
}
