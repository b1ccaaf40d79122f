// src/persistence/mod.rs
//
// Persistence adapter between the repository and the substrate

pub mod notifier;
pub mod recipe_storage;

pub use notifier::{LogNotifier, UserNotifier};
pub use recipe_storage::{RecipeStorage, DEFAULT_STORAGE_KEY, QUOTA_WARNING};
