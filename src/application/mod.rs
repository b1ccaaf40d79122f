// src/application/mod.rs
//
// Application Layer
//
// ARCHITECTURE:
// - This layer sits ABOVE the repository
// - It is the boundary between the user and the recipe core
// - It validates input (forms) and shapes output (DTOs)

pub mod commands;
pub mod dto;
pub mod error_handling;
pub mod forms;
pub mod state;

pub use error_handling::{ErrorResponse, ErrorType};
pub use forms::{ListQuery, RecipeEditForm, RecipeForm};
pub use state::AppState;
