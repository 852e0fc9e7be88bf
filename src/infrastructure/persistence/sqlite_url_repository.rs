//! SQLite implementation of the URL repository.

use async_trait::async_trait;
use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;

use crate::domain::repositories::{StorageError, UrlRepository};

/// Waits this long for a competing writer before failing with `SQLITE_BUSY`.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

impl From<sqlx::Error> for StorageError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return StorageError::AliasExists;
        }

        StorageError::unavailable(e)
    }
}

/// SQLite repository for URL mappings.
///
/// The `alias` column carries a UNIQUE constraint, so the engine performs the
/// uniqueness check and the insert as one statement. Writers are serialized
/// by SQLite; readers run concurrently under WAL.
pub struct SqliteUrlRepository {
    pool: Arc<SqlitePool>,
}

impl SqliteUrlRepository {
    /// Creates a new repository over an existing pool.
    ///
    /// The schema is not touched; call [`Self::init`] once at startup.
    pub fn new(pool: Arc<SqlitePool>) -> Self {
        Self { pool }
    }

    /// Opens (creating if missing) the database file at `path` and ensures the schema.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] if the file cannot be opened or
    /// the schema cannot be applied.
    pub async fn connect(
        path: impl AsRef<Path>,
        max_connections: u32,
        acquire_timeout: Duration,
    ) -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(acquire_timeout)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.init().await?;
        Ok(repository)
    }

    /// Opens a private in-memory database. Intended for tooling and tests.
    pub async fn in_memory() -> Result<Self, StorageError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // Every connection to `:memory:` is a separate database.
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let repository = Self::new(Arc::new(pool));
        repository.init().await?;
        Ok(repository)
    }

    /// Ensures the `urls` table and its alias index exist.
    ///
    /// Idempotent: applied migrations are recorded and skipped on later runs.
    pub async fn init(&self) -> Result<(), StorageError> {
        sqlx::migrate!("./migrations")
            .run(self.pool.as_ref())
            .await
            .map_err(StorageError::unavailable)?;

        tracing::debug!("Storage schema is up to date");
        Ok(())
    }

    /// Checks that the database answers a trivial query.
    pub async fn ping(&self) -> Result<(), StorageError> {
        sqlx::query("SELECT 1").execute(self.pool.as_ref()).await?;
        Ok(())
    }

    /// Returns the number of stored mappings.
    pub async fn count(&self) -> Result<i64, StorageError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM urls")
            .fetch_one(self.pool.as_ref())
            .await?;
        Ok(count)
    }

    /// Closes every pooled connection. Further calls fail.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl UrlRepository for SqliteUrlRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let result = sqlx::query("INSERT INTO urls (url, alias) VALUES (?, ?)")
            .bind(target_url)
            .bind(alias)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.last_insert_rowid())
    }

    async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        let url: Option<String> = sqlx::query_scalar("SELECT url FROM urls WHERE alias = ?")
            .bind(alias)
            .fetch_optional(self.pool.as_ref())
            .await?;

        url.ok_or(StorageError::AliasNotFound)
    }
}
