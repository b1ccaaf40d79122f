// src/application/commands/mod.rs
//
// Command Handlers
//
// ARCHITECTURE:
// - Commands are thin adapters between the CLI and the repository
// - Commands accept forms, return DTOs
// - Commands NEVER contain business logic

pub mod recipe_commands;
pub mod storage_commands;

pub use recipe_commands::*;
pub use storage_commands::*;
