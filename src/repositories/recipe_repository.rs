// src/repositories/recipe_repository.rs
//
// Recipe CRUD and queries.
//
// Every call re-reads the collection through the persistence adapter and,
// for mutations, writes the whole collection back. Nothing is cached
// between calls. Input is trusted: validation happens before data gets here.

use log::info;

use super::seed::default_recipes;
use crate::domain::{
    search_by_title, IdGenerator, NewRecipe, Recipe, RecipeFilter, RecipeId, RecipeUpdate,
};
use crate::error::{AppError, AppResult};
use crate::persistence::RecipeStorage;

pub struct RecipeRepository {
    storage: RecipeStorage,
    ids: IdGenerator,
}

impl RecipeRepository {
    pub fn new(storage: RecipeStorage) -> Self {
        Self {
            storage,
            ids: IdGenerator::new(),
        }
    }

    pub fn storage(&self) -> &RecipeStorage {
        &self.storage
    }

    pub fn get_all(&self) -> Vec<Recipe> {
        self.storage.load()
    }

    /// First match in load order
    pub fn get_by_id(&self, id: RecipeId) -> Option<Recipe> {
        self.storage.load().into_iter().find(|r| r.id == id)
    }

    pub fn add(&self, data: NewRecipe) -> AppResult<Recipe> {
        let mut recipes = self.storage.load();
        let recipe = Recipe::new(self.ids.next_id(&recipes)?, data);
        recipes.push(recipe.clone());

        self.persist(&recipes)?;
        Ok(recipe)
    }

    /// `Ok(None)` when no recipe has this id; nothing is written then.
    pub fn update(&self, id: RecipeId, update: RecipeUpdate) -> AppResult<Option<Recipe>> {
        let mut recipes = self.storage.load();
        let Some(recipe) = recipes.iter_mut().find(|r| r.id == id) else {
            return Ok(None);
        };

        recipe.apply_update(update);
        let merged = recipe.clone();

        self.persist(&recipes)?;
        Ok(Some(merged))
    }

    /// Removes every record with this id. Deleting an unknown id still
    /// rewrites the (unchanged) collection and succeeds.
    pub fn delete(&self, id: RecipeId) -> AppResult<()> {
        let mut recipes = self.storage.load();
        recipes.retain(|r| r.id != id);
        self.persist(&recipes)
    }

    /// Case-insensitive title search over the stored collection
    pub fn search(&self, query: Option<&str>) -> Vec<Recipe> {
        search_by_title(self.storage.load(), query)
    }

    /// Full browse pipeline: search, then difficulty, time and type
    pub fn query(&self, filter: &RecipeFilter) -> Vec<Recipe> {
        filter.apply(self.storage.load())
    }

    /// Replace the whole collection with an imported JSON value
    pub fn replace_all(&self, value: &serde_json::Value) -> AppResult<usize> {
        if !self.storage.save_value(value) {
            return Err(AppError::PersistenceFailed(
                "imported data was rejected".to_string(),
            ));
        }
        Ok(value.as_array().map_or(0, Vec::len))
    }

    /// Persist the default recipes the first time the collection is found
    /// empty. A marker records the bootstrap, so emptying the collection
    /// later does not bring the defaults back. Returns whether seeding
    /// happened.
    pub fn ensure_seeded(&self) -> AppResult<bool> {
        if self.storage.is_seeded() {
            return Ok(false);
        }
        if !self.storage.load().is_empty() {
            self.storage.mark_seeded();
            return Ok(false);
        }

        let mut recipes: Vec<Recipe> = Vec::new();
        for data in default_recipes() {
            let id = self.ids.next_id(&recipes)?;
            recipes.push(Recipe::new(id, data));
        }

        self.persist(&recipes)?;
        self.storage.mark_seeded();
        info!("Seeded {} default recipes", recipes.len());
        Ok(true)
    }

    pub fn clear(&self) {
        self.storage.clear();
    }

    pub fn is_available(&self) -> bool {
        self.storage.is_available()
    }

    fn persist(&self, recipes: &[Recipe]) -> AppResult<()> {
        if self.storage.save(recipes) {
            Ok(())
        } else {
            Err(AppError::PersistenceFailed(format!(
                "writing {} recipes to '{}' failed",
                recipes.len(),
                self.storage.key()
            )))
        }
    }
}
