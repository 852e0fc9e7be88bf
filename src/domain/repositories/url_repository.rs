//! Repository trait for alias → URL storage.

use async_trait::async_trait;

/// Boxed error from a storage backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported by a [`UrlRepository`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Save-time uniqueness violation. Nothing was written.
    #[error("alias already exists")]
    AliasExists,

    /// Resolve-time miss.
    #[error("alias not found")]
    AliasNotFound,

    /// Any other backend failure. The source carries engine detail and must
    /// not reach API clients.
    #[error("storage unavailable: {0}")]
    Unavailable(#[source] BoxError),
}

impl StorageError {
    pub fn unavailable(source: impl Into<BoxError>) -> Self {
        Self::Unavailable(source.into())
    }
}

/// Durable alias → URL mapping store.
///
/// Any type honouring this contract can back the service, which allows the
/// SQLite store to be swapped for an in-memory one in tests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::SqliteUrlRepository`] - SQLite implementation
/// - [`crate::infrastructure::persistence::MemoryUrlRepository`] - in-process map
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UrlRepository: Send + Sync {
    /// Stores `target_url` under `alias` and returns the new record id.
    ///
    /// The uniqueness check and the insert are one atomic step: of two
    /// concurrent saves with the same alias exactly one succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasExists`] if the alias already has a record;
    /// existing state is left untouched.
    /// Returns [`StorageError::Unavailable`] on backend errors.
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StorageError>;

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::AliasNotFound`] if no record has this alias.
    /// Returns [`StorageError::Unavailable`] on backend errors.
    async fn resolve(&self, alias: &str) -> Result<String, StorageError>;
}
