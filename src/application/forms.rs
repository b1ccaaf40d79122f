// src/application/forms.rs
//
// Form handling: raw user input in, validated domain requests out.
//
// This is the only place recipe input is validated. The repository
// trusts whatever it is given.

use serde::Deserialize;

use crate::domain::{
    validate_new_recipe, validate_update, Difficulty, DomainError, DomainResult, NewRecipe,
    RecipeFilter, RecipeType, RecipeUpdate,
};

/// Sentinel accepted by every enumeration filter
const ALL: &str = "all";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeForm {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: String,
    pub recipe_type: String,
    #[serde(default)]
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecipeEditForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub difficulty: Option<String>,
    pub recipe_type: Option<String>,
    pub image_url: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
}

/// Browse criteria as typed by the user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub search: Option<String>,
    pub difficulty: Option<String>,
    pub max_time: Option<u32>,
    pub recipe_type: Option<String>,
}

impl RecipeForm {
    pub fn into_new_recipe(self) -> DomainResult<NewRecipe> {
        let data = NewRecipe {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty.parse()?,
            recipe_type: self.recipe_type.parse()?,
            image_url: self.image_url.trim().to_string(),
            ingredients: clean_lines(self.ingredients),
            steps: clean_lines(self.steps),
        };
        validate_new_recipe(&data)?;
        Ok(data)
    }
}

impl RecipeEditForm {
    pub fn into_update(self) -> DomainResult<RecipeUpdate> {
        let update = RecipeUpdate {
            title: self.title.map(|t| t.trim().to_string()),
            description: self.description.map(|d| d.trim().to_string()),
            prep_time: self.prep_time,
            cook_time: self.cook_time,
            difficulty: self.difficulty.as_deref().map(str::parse).transpose()?,
            recipe_type: self.recipe_type.as_deref().map(str::parse).transpose()?,
            image_url: self.image_url.map(|u| u.trim().to_string()),
            ingredients: self.ingredients.map(clean_lines),
            steps: self.steps.map(clean_lines),
        };

        if update.is_empty() {
            return Err(DomainError::InvariantViolation(
                "Nothing to update".to_string(),
            ));
        }
        validate_update(&update)?;
        Ok(update)
    }
}

impl ListQuery {
    pub fn into_filter(self) -> DomainResult<RecipeFilter> {
        Ok(RecipeFilter {
            query: self.search,
            difficulty: parse_difficulty_filter(self.difficulty.as_deref())?,
            max_total_time: self.max_time,
            recipe_type: parse_type_filter(self.recipe_type.as_deref())?,
        })
    }
}

/// `None` and "all" both mean no difficulty filter
pub fn parse_difficulty_filter(raw: Option<&str>) -> DomainResult<Option<Difficulty>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// `None` and "all" both mean no type filter
pub fn parse_type_filter(raw: Option<&str>) -> DomainResult<Option<RecipeType>> {
    match raw.map(str::trim) {
        None => Ok(None),
        Some(s) if s.is_empty() || s.eq_ignore_ascii_case(ALL) => Ok(None),
        Some(s) => s.parse().map(Some),
    }
}

/// Trim every entry and drop the blank ones, keeping order
fn clean_lines(lines: Vec<String>) -> Vec<String> {
    lines
        .into_iter()
        .map(|l| l.trim().to_string())
        .filter(|l| !l.is_empty())
        .collect()
}
