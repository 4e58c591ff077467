use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single user-authored recipe.
/// This is the unit of the catalog; the whole collection is persisted as
/// one JSON array of these records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Immutable identifier, assigned at creation
    pub id: String,

    /// Display title
    pub title: String,

    /// Free-form description (may be empty)
    #[serde(default)]
    pub description: String,

    /// Image URL or path reference, never binary data (may be empty)
    #[serde(default)]
    pub image: String,

    /// Ordered ingredient lines
    pub ingredients: Vec<String>,

    /// Ordered preparation steps
    pub steps: Vec<String>,

    /// Preparation time in minutes
    pub prep_time: f64,

    /// Difficulty rating
    pub difficulty: Difficulty,

    /// Creation timestamp, never changes after creation
    pub created_at: DateTime<Utc>,

    /// Last update timestamp; absent until the record is first updated
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

/// How demanding a recipe is to cook
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Candidate fields for a new recipe, before the store assigns identity.
/// Glue builds this from pre-processed form input (see `split_entries`).
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeDraft {
    pub title: String,
    pub description: String,
    pub image: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
    pub prep_time: f64,
    pub difficulty: Difficulty,
}

/// Partial update for an existing recipe.
/// `Some` replaces the stored field, `None` keeps it; `id` and
/// `created_at` are not patchable.
#[derive(Debug, Clone, Default)]
pub struct RecipePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
    pub prep_time: Option<f64>,
    pub difficulty: Option<Difficulty>,
}

impl Recipe {
    /// Build a stored record from a draft.
    /// Stamps a fresh UUID id and the creation timestamp; `updated_at`
    /// stays unset until the first update.
    pub fn from_draft(draft: RecipeDraft) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            description: draft.description,
            image: draft.image,
            ingredients: draft.ingredients,
            steps: draft.steps,
            prep_time: draft.prep_time,
            difficulty: draft.difficulty,
            created_at: Utc::now(),
            updated_at: None,
        }
    }

    /// Shallow-merge a patch: provided fields replace, omitted fields are
    /// retained. Restamps `updated_at`; `id` and `created_at` never change.
    pub fn apply(&mut self, patch: RecipePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(image) = patch.image {
            self.image = image;
        }
        if let Some(ingredients) = patch.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(steps) = patch.steps {
            self.steps = steps;
        }
        if let Some(prep_time) = patch.prep_time {
            self.prep_time = prep_time;
        }
        if let Some(difficulty) = patch.difficulty {
            self.difficulty = difficulty;
        }

        self.updated_at = Some(Utc::now());
    }

    /// Description truncated to at most `max_chars` characters, for list
    /// cards. Cuts on a character boundary, so multi-byte text is safe.
    pub fn short_description(&self, max_chars: usize) -> &str {
        match self.description.char_indices().nth(max_chars) {
            Some((cut, _)) => &self.description[..cut],
            None => &self.description,
        }
    }
}

impl Difficulty {
    /// All difficulties, in menu order
    pub const ALL: &'static [Difficulty] =
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Split raw textarea content into trimmed, non-empty entries, one per
/// line. Glue runs ingredient and step input through this before building
/// a draft or a patch.
pub fn split_entries(raw: &str) -> Vec<String> {
    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}
