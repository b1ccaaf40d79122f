// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod recipe;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

pub use recipe::{
    filter_by_difficulty, filter_by_time, filter_by_type, search_by_title, validate_new_recipe,
    validate_recipe, validate_update, Difficulty, IdGenerator, NewRecipe, Recipe, RecipeFilter,
    RecipeId, RecipeType, RecipeUpdate,
};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid {field}: '{value}'")]
    InvalidValue { field: &'static str, value: String },
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
