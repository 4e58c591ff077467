// src/store/seed.rs

use crate::domain::{Difficulty, Recipe, RecipeDraft};

/// Default seed collection: one starter recipe, written whenever no
/// durable payload exists or recovery resets the catalog. Identity and
/// timestamps are stamped at build time, so every reset yields a fresh
/// record.
pub fn starter_recipes() -> Vec<Recipe> {
    vec![Recipe::from_draft(RecipeDraft {
        title: "Vinayak's Masala Omelette".to_string(),
        description: "A quick spicy omelette with onions, chillies and masala.".to_string(),
        image: String::new(),
        ingredients: vec![
            "2 eggs".to_string(),
            "1 small onion, chopped".to_string(),
            "1 green chilli, chopped".to_string(),
            "Pinch turmeric".to_string(),
            "Salt to taste".to_string(),
            "1 tbsp oil".to_string(),
        ],
        steps: vec![
            "Beat eggs with turmeric and salt".to_string(),
            "Heat oil in a pan".to_string(),
            "Sauté onion and chilli 1-2 min".to_string(),
            "Pour egg mix, cook both sides".to_string(),
            "Serve hot".to_string(),
        ],
        prep_time: 10.0,
        difficulty: Difficulty::Easy,
    })]
}
