// src/application/dto/mod.rs
//
// Data Transfer Objects
//
// CRITICAL PRINCIPLES:
// - DTOs are output-friendly representations
// - Free text is sanitized before it is rendered
// - Conversion FROM domain entities only (never TO)

use serde::Serialize;
use std::fmt::Write;

use crate::db::DatabaseStats;
use crate::domain::Recipe;

// ============================================================================
// RECIPE DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeSummaryDto {
    pub id: u64,
    pub title: String,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub total_time: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecipeDetailDto {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub prep_time: u32,
    pub cook_time: u32,
    pub total_time: u32,
    pub difficulty: String,
    #[serde(rename = "type")]
    pub recipe_type: String,
    pub image_url: Option<String>,
    pub ingredients: Vec<String>,
    pub steps: Vec<String>,
}

// ============================================================================
// STATUS DTOs
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageStatusDto {
    pub available: bool,
    pub storage_key: String,
    pub recipe_count: usize,
    pub database_bytes: Option<i64>,
    pub database_entries: Option<i64>,
}

impl StorageStatusDto {
    pub fn with_database(mut self, stats: Option<DatabaseStats>) -> Self {
        if let Some(stats) = stats {
            self.database_bytes = Some(stats.size_bytes);
            self.database_entries = Some(stats.entry_count);
        }
        self
    }
}

// ============================================================================
// CONVERSION HELPERS (Domain → DTO)
// ============================================================================

impl From<Recipe> for RecipeSummaryDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            total_time: recipe.total_time(),
            title: sanitize_text(&recipe.title),
            difficulty: recipe.difficulty.to_string(),
            recipe_type: recipe.recipe_type.to_string(),
        }
    }
}

impl From<Recipe> for RecipeDetailDto {
    fn from(recipe: Recipe) -> Self {
        Self {
            id: recipe.id,
            total_time: recipe.total_time(),
            image_url: recipe.image_url().map(sanitize_text),
            title: sanitize_text(&recipe.title),
            description: sanitize_text(&recipe.description),
            prep_time: recipe.prep_time,
            cook_time: recipe.cook_time,
            difficulty: recipe.difficulty.to_string(),
            recipe_type: recipe.recipe_type.to_string(),
            ingredients: recipe.ingredients.iter().map(|s| sanitize_text(s)).collect(),
            steps: recipe.steps.iter().map(|s| sanitize_text(s)).collect(),
        }
    }
}

// ============================================================================
// TEXT RENDERING
// ============================================================================

/// Strip control characters so stored text cannot inject terminal
/// escape sequences or break the layout
pub fn sanitize_text(raw: &str) -> String {
    raw.chars()
        .map(|c| if c == '\n' || c == '\t' { ' ' } else { c })
        .filter(|c| !c.is_control())
        .collect()
}

pub fn render_summaries(recipes: &[RecipeSummaryDto]) -> String {
    if recipes.is_empty() {
        return "No recipes found.\n".to_string();
    }

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<15} {:<32} {:<8} {:<8} {:>6}",
        "ID", "TITLE", "LEVEL", "TYPE", "MIN"
    );
    for r in recipes {
        let _ = writeln!(
            out,
            "{:<15} {:<32} {:<8} {:<8} {:>6}",
            r.id,
            truncate(&r.title, 32),
            r.difficulty,
            r.recipe_type,
            r.total_time
        );
    }
    out
}

pub fn render_detail(recipe: &RecipeDetailDto) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{} (#{})", recipe.title, recipe.id);
    if !recipe.description.is_empty() {
        let _ = writeln!(out, "{}", recipe.description);
    }
    let _ = writeln!(
        out,
        "\nDifficulty: {}  Type: {}  Prep: {} min  Cook: {} min  Total: {} min",
        recipe.difficulty, recipe.recipe_type, recipe.prep_time, recipe.cook_time, recipe.total_time
    );
    if let Some(url) = &recipe.image_url {
        let _ = writeln!(out, "Image: {}", url);
    }

    let _ = writeln!(out, "\nIngredients:");
    for item in &recipe.ingredients {
        let _ = writeln!(out, "  - {}", item);
    }

    let _ = writeln!(out, "\nSteps:");
    for (i, step) in recipe.steps.iter().enumerate() {
        let _ = writeln!(out, "  {}. {}", i + 1, step);
    }
    out
}

pub fn render_status(status: &StorageStatusDto) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "Storage: {}",
        if status.available { "available" } else { "UNAVAILABLE" }
    );
    let _ = writeln!(out, "Key: {}", status.storage_key);
    let _ = writeln!(out, "Recipes: {}", status.recipe_count);
    if let Some(bytes) = status.database_bytes {
        let _ = writeln!(out, "Database size: {} bytes", bytes);
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
        t.push('…');
        t
    }
}
