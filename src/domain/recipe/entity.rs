use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::domain::DomainError;

/// Recipe identifier. Assigned once at creation, never reassigned.
pub type RecipeId = u64;

/// A single recipe as persisted in the collection.
///
/// Field names on the wire are camelCase (`prepTime`, `imageUrl`, `type`)
/// so stored collections stay readable by other tools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Internal immutable identifier
    pub id: RecipeId,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Preparation time in minutes
    pub prep_time: u32,

    /// Cooking time in minutes
    pub cook_time: u32,

    pub difficulty: Difficulty,

    #[serde(rename = "type")]
    pub recipe_type: RecipeType,

    /// Empty when the recipe has no picture
    #[serde(default)]
    pub image_url: String,

    pub ingredients: Vec<String>,

    /// Execution order matters
    pub steps: Vec<String>,
}

/// How hard a recipe is to make
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Dietary classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecipeType {
    Veg,
    NonVeg,
}

/// Everything needed to create a recipe except its id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecipe {
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub difficulty: Difficulty,
    pub recipe_type: RecipeType,
    pub image_url: String,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

/// Whole-record edit. `None` leaves the field untouched.
/// There is deliberately no `id` field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecipeUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<u32>,
    pub cook_time: Option<u32>,
    pub difficulty: Option<Difficulty>,
    pub recipe_type: Option<RecipeType>,
    pub image_url: Option<String>,
    pub ingredients: Option<Vec<String>>,
    pub steps: Option<Vec<String>>,
}

impl Recipe {
    /// Build a recipe from creation data and a freshly issued id
    pub fn new(id: RecipeId, data: NewRecipe) -> Self {
        Self {
            id,
            title: data.title,
            description: data.description,
            prep_time: data.prep_time,
            cook_time: data.cook_time,
            difficulty: data.difficulty,
            recipe_type: data.recipe_type,
            image_url: data.image_url,
            ingredients: data.ingredients,
            steps: data.steps,
        }
    }

    /// Preparation plus cooking time, in minutes. Never stored.
    pub fn total_time(&self) -> u32 {
        self.prep_time.saturating_add(self.cook_time)
    }

    pub fn image_url(&self) -> Option<&str> {
        if self.image_url.is_empty() {
            None
        } else {
            Some(&self.image_url)
        }
    }

    /// Merge an update over this record. The id is preserved.
    pub fn apply_update(&mut self, update: RecipeUpdate) {
        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(prep) = update.prep_time {
            self.prep_time = prep;
        }
        if let Some(cook) = update.cook_time {
            self.cook_time = cook;
        }
        if let Some(d) = update.difficulty {
            self.difficulty = d;
        }
        if let Some(t) = update.recipe_type {
            self.recipe_type = t;
        }
        if let Some(url) = update.image_url {
            self.image_url = url;
        }
        if let Some(ingredients) = update.ingredients {
            self.ingredients = ingredients;
        }
        if let Some(steps) = update.steps {
            self.steps = steps;
        }
    }
}

impl RecipeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }
}

impl RecipeType {
    pub const ALL: [RecipeType; 2] = [RecipeType::Veg, RecipeType::NonVeg];

    pub fn as_str(self) -> &'static str {
        match self {
            RecipeType::Veg => "veg",
            RecipeType::NonVeg => "non-veg",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Display for RecipeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Difficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(DomainError::InvalidValue {
                field: "difficulty",
                value: s.to_string(),
            }),
        }
    }
}

impl FromStr for RecipeType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "veg" => Ok(RecipeType::Veg),
            "non-veg" => Ok(RecipeType::NonVeg),
            _ => Err(DomainError::InvalidValue {
                field: "type",
                value: s.to_string(),
            }),
        }
    }
}
