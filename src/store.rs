//! SQLite store: opened once at startup, schema ensured before serving, closed on shutdown.

use crate::config::{Settings, StoreLocation, DB_FILE_NAME};
use crate::error::ConfigError;
use crate::sql;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("store: {0}")]
    Db(#[from] sqlx::Error),
}

/// Shared handle to the store. Cloning shares the pool.
#[derive(Clone, Debug)]
pub struct Store {
    pool: SqlitePool,
}

impl Store {
    /// Open the store named by `settings` and ensure the schema exists.
    pub async fn open(settings: &Settings) -> Result<Self, StoreError> {
        let store = match &settings.store {
            StoreLocation::Directory(dir) => {
                ensure_data_dir(dir).await?;
                let path = dir.join(DB_FILE_NAME);
                tracing::info!(path = %path.display(), "database path");
                let options = SqliteConnectOptions::new()
                    .filename(&path)
                    .create_if_missing(true)
                    .foreign_keys(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect_with(options)
                    .await?;
                Store { pool }
            }
            StoreLocation::Url(url) if is_memory_url(url) => {
                tracing::info!(url = %url, "database url (in-memory)");
                let options = SqliteConnectOptions::from_str(url)?.foreign_keys(true);
                Store { pool: single_connection_pool(options).await? }
            }
            StoreLocation::Url(url) => {
                tracing::info!(url = %url, "database url");
                let options = SqliteConnectOptions::from_str(url)?
                    .create_if_missing(true)
                    .foreign_keys(true);
                let pool = SqlitePoolOptions::new()
                    .max_connections(5)
                    .connect_with(options)
                    .await?;
                Store { pool }
            }
        };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Fresh private in-memory store with the schema applied.
    pub async fn open_in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
        let store = Store { pool: single_connection_pool(options).await? };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Idempotent `CREATE TABLE IF NOT EXISTS resources`.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(&sql::create_table()).execute(&self.pool).await?;
        tracing::info!("database initialized");
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub async fn close(&self) {
        self.pool.close().await;
        tracing::info!("database closed");
    }
}

/// Every connection to `:memory:` is its own database, so the pool keeps exactly one alive.
async fn single_connection_pool(options: SqliteConnectOptions) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .min_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

async fn ensure_data_dir(dir: &Path) -> Result<(), ConfigError> {
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|source| ConfigError::DataDir {
            path: dir.display().to_string(),
            source,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_urls_are_detected() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file.db?mode=memory&cache=shared"));
        assert!(!is_memory_url("sqlite://data/database.sqlite"));
    }

    #[tokio::test]
    async fn schema_initialization_is_idempotent() {
        let store = Store::open_in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        let (count,): (i64,) = sqlx::query_as(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'resources'",
        )
        .fetch_one(store.pool())
        .await
        .unwrap();
        assert_eq!(count, 1);
    }

    #[tokio::test]
    async fn foreign_keys_are_enabled() {
        let store = Store::open_in_memory().await.unwrap();
        let (on,): (i64,) = sqlx::query_as("PRAGMA foreign_keys")
            .fetch_one(store.pool())
            .await
            .unwrap();
        assert_eq!(on, 1);
    }
}
