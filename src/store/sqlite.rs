use std::path::Path;

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::debug;

use super::DedupStore;
use crate::errors::RelayError;

/// SQLite-backed dedup store.
pub struct SqliteDedupStore {
    pool: SqlitePool,
}

impl SqliteDedupStore {
    /// Open (or create) the store at `path`.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Storage` if the file cannot be opened or the schema created.
    pub async fn open(path: &Path) -> Result<Self, RelayError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;
        Self::init(&pool).await?;
        debug!("Opened dedup store at {}", path.display());
        Ok(Self { pool })
    }

    /// Store that lives only as long as the process. Each connection to
    /// `sqlite::memory:` is a separate database, hence the single connection.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Storage` if the schema cannot be created.
    pub async fn in_memory() -> Result<Self, RelayError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Self::init(&pool).await?;
        Ok(Self { pool })
    }

    async fn init(pool: &SqlitePool) -> Result<(), RelayError> {
        sqlx::query(
            r#"CREATE TABLE IF NOT EXISTS reposted (
                text        TEXT    PRIMARY KEY,
                value       TEXT    NOT NULL,
                recorded_at INTEGER NOT NULL
            )"#,
        )
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Number of recorded texts.
    ///
    /// # Errors
    ///
    /// Returns `RelayError::Storage` if the query fails.
    pub async fn count(&self) -> Result<i64, RelayError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reposted")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl DedupStore for SqliteDedupStore {
    async fn seen(&self, key: &str) -> Result<bool, RelayError> {
        let row: Option<String> = sqlx::query_scalar("SELECT value FROM reposted WHERE text = ?")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.is_some())
    }

    async fn record(&self, key: &str) -> Result<(), RelayError> {
        sqlx::query(
            r#"INSERT INTO reposted (text, value, recorded_at)
               VALUES (?, ?, ?)
               ON CONFLICT(text) DO UPDATE SET
                 value = excluded.value,
                 recorded_at = excluded.recorded_at"#,
        )
        .bind(key)
        .bind(key)
        .bind(chrono::Utc::now().timestamp())
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}
