// src/storage/sqlite.rs
//
// Durable substrate: one row per key in the kv_store table.

use chrono::Utc;
use rusqlite::{params, ErrorCode, OptionalExtension};
use std::sync::Arc;

use super::substrate::{KeyValueStore, StorageError, StorageResult};
use crate::db::ConnectionPool;

pub struct SqliteStore {
    pool: Arc<ConnectionPool>,
    max_value_bytes: Option<usize>,
}

impl SqliteStore {
    /// The pool must point at a database that went through
    /// `initialize_database`.
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self {
            pool,
            max_value_bytes: None,
        }
    }

    /// Reject any single key + value larger than `limit` bytes
    pub fn with_max_value_bytes(mut self, limit: Option<usize>) -> Self {
        self.max_value_bytes = limit;
        self
    }

    fn check_quota(&self, key: &str, value: &str) -> StorageResult<()> {
        if let Some(limit) = self.max_value_bytes {
            let needed = key.len() + value.len();
            if needed > limit {
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed,
                    limit,
                });
            }
        }
        Ok(())
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let conn = self.pool.get()?;

        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        self.check_quota(key, value)?;
        let conn = self.pool.get()?;

        let result = conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, Utc::now().to_rfc3339()],
        );

        match result {
            Ok(_) => Ok(()),
            Err(rusqlite::Error::SqliteFailure(e, _)) if e.code == ErrorCode::DiskFull => {
                Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    needed: key.len() + value.len(),
                    limit: self.max_value_bytes.unwrap_or(0),
                })
            }
            Err(e) => Err(StorageError::Database(e)),
        }
    }

    fn remove_item(&self, key: &str) -> StorageResult<()> {
        let conn = self.pool.get()?;
        conn.execute("DELETE FROM kv_store WHERE key = ?1", params![key])?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{
        create_connection_pool, create_memory_pool, get_database_path, initialize_database,
    };

    fn memory_store() -> SqliteStore {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteStore::new(Arc::new(pool))
    }

    #[test]
    fn test_set_get_remove() {
        let store = memory_store();
        assert_eq!(store.get_item("k").unwrap(), None);

        store.set_item("k", "one").unwrap();
        store.set_item("k", "two").unwrap();
        assert_eq!(store.get_item("k").unwrap(), Some("two".to_string()));

        store.remove_item("k").unwrap();
        assert_eq!(store.get_item("k").unwrap(), None);

        // removing an absent key is not an error
        store.remove_item("k").unwrap();
    }

    #[test]
    fn test_value_quota() {
        let store = memory_store().with_max_value_bytes(Some(8));
        store.set_item("k", "1234567").unwrap();

        let err = store.set_item("k", "12345678").unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.get_item("k").unwrap(), Some("1234567".to_string()));
    }

    #[test]
    fn test_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = get_database_path(dir.path()).unwrap();

        {
            let pool = create_connection_pool(&path).unwrap();
            initialize_database(&pool.get().unwrap()).unwrap();
            SqliteStore::new(Arc::new(pool))
                .set_item("recipes", "[]")
                .unwrap();
        }

        let pool = create_connection_pool(&path).unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        let store = SqliteStore::new(Arc::new(pool));
        assert_eq!(store.get_item("recipes").unwrap(), Some("[]".to_string()));
    }

    #[test]
    fn test_missing_table_is_an_error_not_a_panic() {
        let pool = create_memory_pool().unwrap();
        let store = SqliteStore::new(Arc::new(pool));
        assert!(store.get_item("k").is_err());
        assert!(store.set_item("k", "v").is_err());
    }
}
