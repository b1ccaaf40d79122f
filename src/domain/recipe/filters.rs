// Query predicates over an already-fetched sequence of recipes.
//
// None of these touch storage. `None` is the "all" sentinel everywhere;
// a zero time limit also means "no limit".

use super::entity::{Difficulty, Recipe, RecipeType};

/// Case-insensitive substring match on the title only.
/// A blank or missing query keeps everything.
pub fn search_by_title(recipes: Vec<Recipe>, query: Option<&str>) -> Vec<Recipe> {
    let needle = match query.map(str::trim) {
        Some(q) if !q.is_empty() => q.to_lowercase(),
        _ => return recipes,
    };
    recipes
        .into_iter()
        .filter(|r| r.title.to_lowercase().contains(&needle))
        .collect()
}

pub fn filter_by_difficulty(recipes: Vec<Recipe>, difficulty: Option<Difficulty>) -> Vec<Recipe> {
    match difficulty {
        Some(d) => recipes.into_iter().filter(|r| r.difficulty == d).collect(),
        None => recipes,
    }
}

/// Keeps recipes whose prep + cook time is at most `max_minutes` (inclusive).
pub fn filter_by_time(recipes: Vec<Recipe>, max_minutes: Option<u32>) -> Vec<Recipe> {
    match max_minutes {
        Some(max) if max > 0 => recipes
            .into_iter()
            .filter(|r| r.total_time() <= max)
            .collect(),
        _ => recipes,
    }
}

pub fn filter_by_type(recipes: Vec<Recipe>, recipe_type: Option<RecipeType>) -> Vec<Recipe> {
    match recipe_type {
        Some(t) => recipes.into_iter().filter(|r| r.recipe_type == t).collect(),
        None => recipes,
    }
}

/// Combined browse criteria, applied as search → difficulty → time → type.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeFilter {
    pub query: Option<String>,
    pub difficulty: Option<Difficulty>,
    pub max_total_time: Option<u32>,
    pub recipe_type: Option<RecipeType>,
}

impl RecipeFilter {
    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        let recipes = search_by_title(recipes, self.query.as_deref());
        let recipes = filter_by_difficulty(recipes, self.difficulty);
        let recipes = filter_by_time(recipes, self.max_total_time);
        filter_by_type(recipes, self.recipe_type)
    }

    pub fn is_unfiltered(&self) -> bool {
        self.query.as_deref().map_or(true, |q| q.trim().is_empty())
            && self.difficulty.is_none()
            && self.max_total_time.map_or(true, |t| t == 0)
            && self.recipe_type.is_none()
    }
}
