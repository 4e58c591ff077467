use std::str::FromStr;

use thiserror::Error;

use super::entity::{Difficulty, Recipe, RecipeDraft};

/// Field constraints that must hold before a recipe enters the store:
///
/// 1. Title at least 2 characters after trimming
/// 2. At least one ingredient, none blank after trimming
/// 3. At least one step, none blank after trimming
/// 4. Prep time a finite number of minutes, greater than zero
/// 5. Difficulty exactly one of Easy, Medium, Hard (enforced by the
///    type; raw input parses through `Difficulty::from_str`)
///
/// Validation never short-circuits: every check runs and every failure
/// is reported, so a form can surface all problems at once.

/// One reason a candidate recipe is rejected.
/// `Display` is the message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    #[error("title is required (min 2 characters)")]
    TitleTooShort,

    #[error("at least one ingredient is required")]
    NoIngredients,

    #[error("ingredient {0} is empty")]
    BlankIngredient(usize),

    #[error("at least one step is required")]
    NoSteps,

    #[error("step {0} is empty")]
    BlankStep(usize),

    #[error("prep time must be a positive number of minutes")]
    NonPositivePrepTime,

    #[error("\"{0}\" is not a difficulty (expected Easy, Medium or Hard)")]
    UnknownDifficulty(String),
}

/// Validate a create candidate. An empty result means the draft is valid.
pub fn validate_draft(draft: &RecipeDraft) -> Vec<Violation> {
    collect_violations(&draft.title, &draft.ingredients, &draft.steps, draft.prep_time)
}

/// Validate a stored or merged record. Same checks as `validate_draft`;
/// the store runs this on the merged result of an update before
/// accepting it.
pub fn validate_recipe(recipe: &Recipe) -> Vec<Violation> {
    collect_violations(
        &recipe.title,
        &recipe.ingredients,
        &recipe.steps,
        recipe.prep_time,
    )
}

fn collect_violations(
    title: &str,
    ingredients: &[String],
    steps: &[String],
    prep_time: f64,
) -> Vec<Violation> {
    let mut violations = Vec::new();

    check_title(title, &mut violations);
    check_ingredients(ingredients, &mut violations);
    check_steps(steps, &mut violations);
    check_prep_time(prep_time, &mut violations);

    violations
}

fn check_title(title: &str, out: &mut Vec<Violation>) {
    if title.trim().chars().count() < 2 {
        out.push(Violation::TitleTooShort);
    }
}

fn check_ingredients(ingredients: &[String], out: &mut Vec<Violation>) {
    if ingredients.is_empty() {
        out.push(Violation::NoIngredients);
        return;
    }

    for (index, entry) in ingredients.iter().enumerate() {
        if entry.trim().is_empty() {
            out.push(Violation::BlankIngredient(index + 1));
        }
    }
}

fn check_steps(steps: &[String], out: &mut Vec<Violation>) {
    if steps.is_empty() {
        out.push(Violation::NoSteps);
        return;
    }

    for (index, entry) in steps.iter().enumerate() {
        if entry.trim().is_empty() {
            out.push(Violation::BlankStep(index + 1));
        }
    }
}

fn check_prep_time(prep_time: f64, out: &mut Vec<Violation>) {
    if !prep_time.is_finite() || prep_time <= 0.0 {
        out.push(Violation::NonPositivePrepTime);
    }
}

impl FromStr for Difficulty {
    type Err = Violation;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim() {
            "Easy" => Ok(Difficulty::Easy),
            "Medium" => Ok(Difficulty::Medium),
            "Hard" => Ok(Difficulty::Hard),
            other => Err(Violation::UnknownDifficulty(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_draft() -> RecipeDraft {
        RecipeDraft {
            title: "Masala Chai".to_string(),
            description: String::new(),
            image: String::new(),
            ingredients: vec!["2 cups water".to_string(), "1 tsp tea leaves".to_string()],
            steps: vec!["Boil water with spices".to_string(), "Add milk and strain".to_string()],
            prep_time: 10.0,
            difficulty: Difficulty::Easy,
        }
    }

    #[test]
    fn test_valid_draft_has_no_violations() {
        assert!(validate_draft(&valid_draft()).is_empty());
    }

    #[test]
    fn test_whitespace_title_is_too_short() {
        let mut draft = valid_draft();
        draft.title = "  a  ".to_string();
        assert_eq!(validate_draft(&draft), vec![Violation::TitleTooShort]);
    }

    #[test]
    fn test_missing_ingredients_is_the_only_violation() {
        let mut draft = valid_draft();
        draft.ingredients.clear();
        assert_eq!(validate_draft(&draft), vec![Violation::NoIngredients]);
    }

    #[test]
    fn test_blank_entries_are_reported_with_their_position() {
        let mut draft = valid_draft();
        draft.ingredients = vec!["flour".to_string(), "   ".to_string()];
        draft.steps = vec![String::new(), "bake".to_string()];

        let violations = validate_draft(&draft);
        assert!(violations.contains(&Violation::BlankIngredient(2)));
        assert!(violations.contains(&Violation::BlankStep(1)));
    }

    #[test]
    fn test_prep_time_must_be_positive_and_finite() {
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let mut draft = valid_draft();
            draft.prep_time = bad;
            assert_eq!(
                validate_draft(&draft),
                vec![Violation::NonPositivePrepTime],
                "prep_time = {bad}"
            );
        }
    }

    #[test]
    fn test_all_failures_are_collected_in_field_order() {
        let draft = RecipeDraft {
            title: "x".to_string(),
            description: String::new(),
            image: String::new(),
            ingredients: vec![],
            steps: vec![],
            prep_time: 0.0,
            difficulty: Difficulty::Easy,
        };

        assert_eq!(
            validate_draft(&draft),
            vec![
                Violation::TitleTooShort,
                Violation::NoIngredients,
                Violation::NoSteps,
                Violation::NonPositivePrepTime,
            ]
        );
    }

    #[test]
    fn test_merged_records_are_checked_like_drafts() {
        let mut recipe = Recipe::from_draft(valid_draft());
        recipe.title = " ".to_string();
        assert_eq!(validate_recipe(&recipe), vec![Violation::TitleTooShort]);
    }

    #[test]
    fn test_difficulty_parses_exact_names_only() {
        assert_eq!("Easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!(" Hard ".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "expert".parse::<Difficulty>(),
            Err(Violation::UnknownDifficulty("expert".to_string()))
        );
    }

    #[test]
    fn test_every_difficulty_round_trips_through_its_name() {
        for difficulty in Difficulty::ALL {
            assert_eq!(difficulty.as_str().parse::<Difficulty>(), Ok(*difficulty));
        }
    }
}
