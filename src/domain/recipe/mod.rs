pub mod entity;
pub mod filters;
pub mod id;
pub mod invariants;

pub use entity::{Difficulty, NewRecipe, Recipe, RecipeId, RecipeType, RecipeUpdate};
pub use filters::{filter_by_difficulty, filter_by_time, filter_by_type, search_by_title, RecipeFilter};
pub use id::IdGenerator;
pub use invariants::{validate_new_recipe, validate_recipe, validate_update};
