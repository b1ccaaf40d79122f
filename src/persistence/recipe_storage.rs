// src/persistence/recipe_storage.rs
//
// Recipe persistence adapter
//
// The whole collection is one JSON array under one key. This module is the
// trust boundary with the substrate: every substrate failure is logged here
// and turned into an empty result or `false`. Nothing is raised upward.

use log::{debug, error, info, warn};
use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use super::notifier::UserNotifier;
use crate::domain::Recipe;
use crate::storage::KeyValueStore;

/// Namespaced key the collection lives under
pub const DEFAULT_STORAGE_KEY: &str = "recipebook.recipes";

const PROBE_KEY_PREFIX: &str = "recipebook.__probe__.";

/// Appended to the collection key to name the seed marker
const SEEDED_MARKER_SUFFIX: &str = ".seeded";

/// Shown to the user when a save is rejected for size
pub const QUOTA_WARNING: &str =
    "Storage is full. Delete some recipes or remove large images, then try again.";

pub struct RecipeStorage {
    store: Arc<dyn KeyValueStore>,
    notifier: Arc<dyn UserNotifier>,
    key: String,
}

impl RecipeStorage {
    pub fn new(store: Arc<dyn KeyValueStore>, notifier: Arc<dyn UserNotifier>) -> Self {
        Self {
            store,
            notifier,
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Read the collection.
    ///
    /// Absent key and unreadable substrate both yield an empty collection.
    /// A value that is not an array of recipes is deleted so the next
    /// write starts clean.
    pub fn load(&self) -> Vec<Recipe> {
        let raw = match self.store.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                error!("Failed to read recipes from '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Vec<Recipe>>(&raw) {
            Ok(recipes) => {
                debug!("Loaded {} recipes from '{}'", recipes.len(), self.key);
                recipes
            }
            Err(e) => {
                error!(
                    "Stored recipes under '{}' are corrupted ({}); discarding them",
                    self.key, e
                );
                if let Err(e) = self.store.remove_item(&self.key) {
                    error!("Failed to remove corrupted key '{}': {}", self.key, e);
                }
                Vec::new()
            }
        }
    }

    /// Replace the stored collection. Returns whether the write happened.
    pub fn save(&self, recipes: &[Recipe]) -> bool {
        match serde_json::to_string(recipes) {
            Ok(raw) => self.write(&raw, recipes.len()),
            Err(e) => {
                error!("Failed to serialize {} recipes: {}", recipes.len(), e);
                false
            }
        }
    }

    /// Replace the stored collection from untyped JSON.
    ///
    /// Anything other than an array of recipes is refused without writing.
    pub fn save_value(&self, value: &Value) -> bool {
        if !value.is_array() {
            warn!(
                "Refusing to save recipes: expected an array, got {}",
                json_kind(value)
            );
            return false;
        }

        match serde_json::from_value::<Vec<Recipe>>(value.clone()) {
            Ok(recipes) => self.save(&recipes),
            Err(e) => {
                warn!("Refusing to save recipes: {}", e);
                false
            }
        }
    }

    /// Remove the collection entirely
    pub fn clear(&self) {
        match self.store.remove_item(&self.key) {
            Ok(()) => info!("Cleared recipes under '{}'", self.key),
            Err(e) => error!("Failed to clear '{}': {}", self.key, e),
        }
    }

    /// Probe the substrate with a throwaway write and delete.
    /// A failed probe write leaves nothing behind.
    pub fn is_available(&self) -> bool {
        let probe_key = format!("{}{}", PROBE_KEY_PREFIX, Uuid::new_v4());

        if let Err(e) = self.store.set_item(&probe_key, "probe") {
            warn!("Storage probe write failed: {}", e);
            return false;
        }
        if let Err(e) = self.store.remove_item(&probe_key) {
            warn!("Storage probe cleanup failed for '{}': {}", probe_key, e);
            return false;
        }

        true
    }

    /// Whether the default recipes were ever written under this key.
    /// An unreadable marker counts as absent.
    pub fn is_seeded(&self) -> bool {
        match self.store.get_item(&self.seed_marker_key()) {
            Ok(marker) => marker.is_some(),
            Err(e) => {
                warn!("Failed to read seed marker for '{}': {}", self.key, e);
                false
            }
        }
    }

    /// Record that seeding happened. Survives `clear`.
    pub fn mark_seeded(&self) -> bool {
        let stamp = chrono::Utc::now().to_rfc3339();
        match self.store.set_item(&self.seed_marker_key(), &stamp) {
            Ok(()) => true,
            Err(e) => {
                warn!("Failed to write seed marker for '{}': {}", self.key, e);
                false
            }
        }
    }

    fn seed_marker_key(&self) -> String {
        format!("{}{}", self.key, SEEDED_MARKER_SUFFIX)
    }

    fn write(&self, raw: &str, count: usize) -> bool {
        match self.store.set_item(&self.key, raw) {
            Ok(()) => {
                debug!("Saved {} recipes under '{}'", count, self.key);
                true
            }
            Err(e) if e.is_quota_exceeded() => {
                error!("Saving {} recipes failed: {}", count, e);
                self.notifier.warn(QUOTA_WARNING);
                false
            }
            Err(e) => {
                error!("Saving {} recipes failed: {}", count, e);
                false
            }
        }
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
