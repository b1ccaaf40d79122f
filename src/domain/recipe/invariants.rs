use super::entity::{NewRecipe, Recipe, RecipeUpdate};
use crate::domain::{DomainError, DomainResult};

/// Validates all Recipe invariants
/// These are the absolute rules that must hold for a Recipe to be valid
pub fn validate_recipe(recipe: &Recipe) -> DomainResult<()> {
    validate_title(&recipe.title)?;
    validate_image_url(&recipe.image_url)?;
    validate_entries("ingredients", &recipe.ingredients)?;
    validate_entries("steps", &recipe.steps)?;
    Ok(())
}

/// Same rules as `validate_recipe`, checked before an id exists
pub fn validate_new_recipe(data: &NewRecipe) -> DomainResult<()> {
    validate_title(&data.title)?;
    validate_image_url(&data.image_url)?;
    validate_entries("ingredients", &data.ingredients)?;
    validate_entries("steps", &data.steps)?;
    Ok(())
}

/// Only the fields being replaced are checked
pub fn validate_update(update: &RecipeUpdate) -> DomainResult<()> {
    if let Some(title) = &update.title {
        validate_title(title)?;
    }
    if let Some(url) = &update.image_url {
        validate_image_url(url)?;
    }
    if let Some(ingredients) = &update.ingredients {
        validate_entries("ingredients", ingredients)?;
    }
    if let Some(steps) = &update.steps {
        validate_entries("steps", steps)?;
    }
    Ok(())
}

/// Title cannot be empty
fn validate_title(title: &str) -> DomainResult<()> {
    if title.trim().is_empty() {
        return Err(DomainError::InvariantViolation(
            "Recipe title cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Empty, or something that parses as an absolute URL
fn validate_image_url(raw: &str) -> DomainResult<()> {
    if raw.is_empty() {
        return Ok(());
    }
    url::Url::parse(raw).map_err(|e| {
        DomainError::InvariantViolation(format!("Image URL '{}' is not valid: {}", raw, e))
    })?;
    Ok(())
}

/// At least one entry, and no blank entries
fn validate_entries(field: &str, entries: &[String]) -> DomainResult<()> {
    if entries.is_empty() {
        return Err(DomainError::InvariantViolation(format!(
            "Recipe needs at least one entry in {}",
            field
        )));
    }
    if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(DomainError::InvariantViolation(format!(
            "Entry {} in {} is empty",
            pos + 1,
            field
        )));
    }
    Ok(())
}

/// Invariants that must hold true for the Recipe domain:
///
/// 1. Identity is immutable once assigned
/// 2. Title cannot be empty
/// 3. Ingredients and steps each hold at least one non-blank entry
/// 4. Step order is execution order and is never re-sorted
/// 5. Image URL is empty or a syntactically valid URL
/// 6. Difficulty and type are closed enumerations (enforced by the type system)
/// 7. Total time is derived, never stored

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::recipe::{Difficulty, RecipeType};

    fn draft() -> NewRecipe {
        NewRecipe {
            title: "Pancakes".to_string(),
            description: "Fluffy".to_string(),
            prep_time: 10,
            cook_time: 15,
            difficulty: Difficulty::Easy,
            recipe_type: RecipeType::Veg,
            image_url: "https://example.com/pancakes.jpg".to_string(),
            ingredients: vec!["flour".to_string(), "milk".to_string()],
            steps: vec!["mix".to_string(), "fry".to_string()],
        }
    }

    #[test]
    fn test_valid_recipe() {
        assert!(validate_new_recipe(&draft()).is_ok());
        assert!(validate_recipe(&Recipe::new(1, draft())).is_ok());
    }

    #[test]
    fn test_empty_title_fails() {
        let mut data = draft();
        data.title = "   ".to_string();
        assert!(validate_new_recipe(&data).is_err());
    }

    #[test]
    fn test_empty_lists_fail() {
        let mut data = draft();
        data.ingredients.clear();
        assert!(validate_new_recipe(&data).is_err());

        let mut data = draft();
        data.steps = vec!["mix".to_string(), " ".to_string()];
        assert!(validate_new_recipe(&data).is_err());
    }

    #[test]
    fn test_image_url_rules() {
        let mut data = draft();
        data.image_url = String::new();
        assert!(validate_new_recipe(&data).is_ok());

        data.image_url = "not a url".to_string();
        assert!(validate_new_recipe(&data).is_err());
    }

    #[test]
    fn test_update_checks_only_present_fields() {
        assert!(validate_update(&RecipeUpdate::default()).is_ok());

        let update = RecipeUpdate {
            steps: Some(vec![]),
            ..Default::default()
        };
        assert!(validate_update(&update).is_err());
    }
}
