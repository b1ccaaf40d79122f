// src/lib.rs
// RecipeBook - Local-first recipe catalog
//
// Architecture:
// - Domain-centric: Recipe rules and filters live in the domain
// - Persistence never raises: storage failures degrade to defaults
// - Explicit: State is built once and passed in, no globals
// - Local-first: Recipes live in a key-value store on the user's machine

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod repositories;
pub mod storage;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    filter_by_difficulty,
    filter_by_time,
    filter_by_type,
    search_by_title,
    validate_recipe,
    Difficulty,
    IdGenerator,
    NewRecipe,
    // Recipe
    Recipe,
    RecipeFilter,
    RecipeId,
    RecipeType,
    RecipeUpdate,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Storage
// ============================================================================

pub use db::{create_connection_pool, initialize_database, ConnectionPool};
pub use persistence::{LogNotifier, RecipeStorage, UserNotifier};
pub use storage::{KeyValueStore, MemoryStore, SqliteStore, StorageError};

// ============================================================================
// PUBLIC API - Repositories
// ============================================================================

pub use repositories::{default_recipes, RecipeRepository};

// ============================================================================
// PUBLIC API - Application Layer
// ============================================================================

pub use application::{AppState, ErrorResponse, ErrorType};
pub use config::AppConfig;
