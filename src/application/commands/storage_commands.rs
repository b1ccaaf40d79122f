// src/application/commands/storage_commands.rs
//
// Whole-collection commands: export, import, reset, status

use log::{info, warn};
use serde_json::Value;
use std::collections::HashSet;

use crate::application::dto::StorageStatusDto;
use crate::application::state::AppState;
use crate::db::{get_connection, get_database_stats};
use crate::domain::{validate_recipe, DomainError, Recipe};
use crate::error::AppResult;

/// Pretty-printed JSON array of the whole collection
pub fn export_recipes(state: &AppState) -> AppResult<String> {
    let recipes = state.recipes.get_all();
    Ok(serde_json::to_string_pretty(&recipes)?)
}

/// Replace the collection with the JSON in `raw`.
///
/// Recipe arrays are checked for the domain invariants and duplicate ids
/// first; anything else is handed to storage, which refuses it.
pub fn import_recipes(state: &AppState, raw: &str) -> AppResult<usize> {
    let value: Value = serde_json::from_str(raw)?;

    if let Ok(recipes) = serde_json::from_value::<Vec<Recipe>>(value.clone()) {
        check_import(&recipes)?;
    }

    let count = state.recipes.replace_all(&value)?;
    info!("Imported {} recipes", count);
    Ok(count)
}

/// Drop the stored collection
pub fn reset_recipes(state: &AppState) {
    state.recipes.clear();
}

pub fn storage_status(state: &AppState) -> StorageStatusDto {
    let stats = state.pool.as_ref().and_then(|pool| {
        get_connection(pool)
            .and_then(|conn| get_database_stats(&conn))
            .map_err(|e| warn!("Could not read database stats: {}", e))
            .ok()
    });

    StorageStatusDto {
        available: state.recipes.is_available(),
        storage_key: state.recipes.storage().key().to_string(),
        recipe_count: state.recipes.get_all().len(),
        database_bytes: None,
        database_entries: None,
    }
    .with_database(stats)
}

fn check_import(recipes: &[Recipe]) -> Result<(), DomainError> {
    let mut seen = HashSet::new();
    for recipe in recipes {
        validate_recipe(recipe)?;
        if !seen.insert(recipe.id) {
            return Err(DomainError::InvariantViolation(format!(
                "Duplicate recipe id {} in import",
                recipe.id
            )));
        }
    }
    Ok(())
}
