// src/config.rs
//
// Application configuration
//
// Resolution order: explicit --config path, then
// {CONFIG_DIR}/recipebook/config.toml if it exists, then defaults.
// Command-line flags are applied on top by the binary.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::db::default_data_dir;
use crate::error::{AppError, AppResult};
use crate::persistence::DEFAULT_STORAGE_KEY;

/// Same order of magnitude as a browser's per-origin storage quota
pub const DEFAULT_MAX_VALUE_BYTES: usize = 5 * 1024 * 1024;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Where the database lives. Platform data dir when unset.
    pub data_dir: Option<PathBuf>,

    /// Key the collection is stored under
    pub storage_key: String,

    /// Largest serialized collection accepted. `0` disables the check.
    pub max_value_bytes: usize,

    /// Write the default recipes into an empty collection on startup
    pub seed_defaults: bool,

    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            max_value_bytes: DEFAULT_MAX_VALUE_BYTES,
            seed_defaults: true,
            log_level: "warn".to_string(),
        }
    }
}

impl AppConfig {
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        match path {
            Some(path) => Self::from_file(path),
            None => match default_config_path() {
                Some(path) if path.exists() => Self::from_file(&path),
                _ => Ok(Self::default()),
            },
        }
    }

    pub fn from_file(path: &Path) -> AppResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> AppResult<Self> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.storage_key.trim().is_empty() {
            return Err(AppError::Config("storage_key cannot be empty".to_string()));
        }
        Ok(())
    }

    /// Storage size limit, or `None` when `max_value_bytes = 0`
    pub fn value_limit(&self) -> Option<usize> {
        (self.max_value_bytes > 0).then_some(self.max_value_bytes)
    }

    pub fn resolved_data_dir(&self) -> AppResult<PathBuf> {
        match &self.data_dir {
            Some(dir) => Ok(dir.clone()),
            None => default_data_dir(),
        }
    }
}

pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("recipebook").join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_file_overrides() {
        let config = AppConfig::from_toml_str(
            r#"
            data_dir = "/tmp/recipes"
            seed_defaults = false
            max_value_bytes = 1024
            "#,
        )
        .unwrap();

        assert_eq!(config.data_dir, Some(PathBuf::from("/tmp/recipes")));
        assert!(!config.seed_defaults);
        assert_eq!(config.value_limit(), Some(1024));
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
    }

    #[test]
    fn test_zero_limit_disables_quota() {
        assert_eq!(
            AppConfig::default().value_limit(),
            Some(DEFAULT_MAX_VALUE_BYTES)
        );

        let config = AppConfig::from_toml_str("max_value_bytes = 0").unwrap();
        assert_eq!(config.value_limit(), None);
    }

    #[test]
    fn test_rejects_bad_values() {
        assert!(AppConfig::from_toml_str("storage_key = \"  \"").is_err());
        assert!(matches!(
            AppConfig::from_toml_str("seed_defaults = \"yes\""),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_load_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "log_level = \"debug\"").unwrap();

        let config = AppConfig::load(Some(&path)).unwrap();
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_missing_explicit_path_fails() {
        let dir = tempfile::tempdir().unwrap();
        assert!(AppConfig::load(Some(&dir.path().join("nope.toml"))).is_err());
    }
}
