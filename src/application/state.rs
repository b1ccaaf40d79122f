// src/application/state.rs

use log::{info, warn};
use std::sync::Arc;

use crate::config::AppConfig;
use crate::db::{
    create_connection_pool, get_connection, get_database_path, initialize_database,
    verify_database_integrity, ConnectionPool,
};
use crate::error::AppResult;
use crate::persistence::{RecipeStorage, UserNotifier};
use crate::repositories::RecipeRepository;
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};

/// Everything command handlers need, built once at startup and passed in.
pub struct AppState {
    pub config: AppConfig,
    pub recipes: Arc<RecipeRepository>,
    /// Present when backed by a database file
    pub pool: Option<Arc<ConnectionPool>>,
}

impl AppState {
    /// Open the on-disk store described by `config`
    pub fn open(config: AppConfig, notifier: Arc<dyn UserNotifier>) -> AppResult<Self> {
        let data_dir = config.resolved_data_dir()?;
        let db_path = get_database_path(&data_dir)?;
        let pool = Arc::new(create_connection_pool(&db_path)?);

        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            if let Err(e) = verify_database_integrity(&conn) {
                warn!("{}", e);
            }
        }
        info!("Using recipe database at {}", db_path.display());

        let store: Arc<dyn KeyValueStore> =
            Arc::new(SqliteStore::new(pool.clone()).with_max_value_bytes(config.value_limit()));
        Ok(Self::assemble(config, store, notifier, Some(pool)))
    }

    /// Throwaway state that lives only as long as the process
    pub fn in_memory(config: AppConfig, notifier: Arc<dyn UserNotifier>) -> Self {
        let store: Arc<dyn KeyValueStore> = match config.value_limit() {
            Some(limit) => Arc::new(MemoryStore::with_quota(limit)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::assemble(config, store, notifier, None)
    }

    fn assemble(
        config: AppConfig,
        store: Arc<dyn KeyValueStore>,
        notifier: Arc<dyn UserNotifier>,
        pool: Option<Arc<ConnectionPool>>,
    ) -> Self {
        let storage = RecipeStorage::new(store, notifier).with_key(config.storage_key.clone());
        Self {
            recipes: Arc::new(RecipeRepository::new(storage)),
            config,
            pool,
        }
    }

    /// First-use bootstrap. Never fails: a store that cannot be seeded
    /// is reported and the application keeps going.
    pub fn bootstrap(&self) {
        if !self.config.seed_defaults {
            return;
        }
        match self.recipes.ensure_seeded() {
            Ok(true) => info!("Empty recipe collection seeded with defaults"),
            Ok(false) => {}
            Err(e) => warn!("Could not seed default recipes: {}", e),
        }
    }
}
