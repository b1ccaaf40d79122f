// src/storage/mod.rs
//
// Key-value substrates
//
// RULES:
// - Substrates are DUMB byte movers
// - NO knowledge of recipes
// - Every failure is returned, never swallowed here

pub mod memory;
pub mod sqlite;
pub mod substrate;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;
pub use substrate::{KeyValueStore, StorageError, StorageResult};

#[cfg(test)]
pub use substrate::MockKeyValueStore;
