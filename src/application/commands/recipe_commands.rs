// src/application/commands/recipe_commands.rs
//
// Recipe Command Handlers
//
// RULES:
// - Accept forms
// - Call the repository
// - Return DTOs
// - Absent recipes become NotFound here, not in the repository

use log::info;

use crate::application::dto::{RecipeDetailDto, RecipeSummaryDto};
use crate::application::forms::{ListQuery, RecipeEditForm, RecipeForm};
use crate::application::state::AppState;
use crate::domain::RecipeId;
use crate::error::{AppError, AppResult};

/// List recipes matching the browse criteria, in stored order
pub fn list_recipes(state: &AppState, query: ListQuery) -> AppResult<Vec<RecipeSummaryDto>> {
    let filter = query.into_filter()?;
    let recipes = state.recipes.query(&filter);
    Ok(recipes.into_iter().map(RecipeSummaryDto::from).collect())
}

/// Get a single recipe by ID
pub fn get_recipe(state: &AppState, id: RecipeId) -> AppResult<RecipeDetailDto> {
    state
        .recipes
        .get_by_id(id)
        .map(RecipeDetailDto::from)
        .ok_or(AppError::NotFound)
}

/// Create a new recipe
pub fn create_recipe(state: &AppState, form: RecipeForm) -> AppResult<RecipeDetailDto> {
    let data = form.into_new_recipe()?;
    let recipe = state.recipes.add(data)?;
    info!("Created recipe {} '{}'", recipe.id, recipe.title);
    Ok(RecipeDetailDto::from(recipe))
}

/// Edit an existing recipe
pub fn edit_recipe(
    state: &AppState,
    id: RecipeId,
    form: RecipeEditForm,
) -> AppResult<RecipeDetailDto> {
    let update = form.into_update()?;
    let recipe = state.recipes.update(id, update)?.ok_or(AppError::NotFound)?;
    info!("Updated recipe {}", recipe.id);
    Ok(RecipeDetailDto::from(recipe))
}

/// Delete a recipe. Unknown ids are reported, not silently accepted.
pub fn delete_recipe(state: &AppState, id: RecipeId) -> AppResult<()> {
    if state.recipes.get_by_id(id).is_none() {
        return Err(AppError::NotFound);
    }
    state.recipes.delete(id)?;
    info!("Deleted recipe {}", id);
    Ok(())
}
