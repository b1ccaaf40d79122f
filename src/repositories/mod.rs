// src/repositories/mod.rs
//
// Repository layer
//
// RULES:
// - Repositories own CRUD and query semantics
// - NO caching: storage is the only source of truth
// - NO re-validation of input

pub mod recipe_repository;
pub mod seed;

#[cfg(test)]
mod recipe_repository_tests;

pub use recipe_repository::RecipeRepository;
pub use seed::default_recipes;
