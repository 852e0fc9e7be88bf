//! In-memory implementation of the URL repository.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUrlMapping, UrlMapping};
use crate::domain::repositories::{StorageError, UrlRepository};

/// Process-local URL store backed by a `HashMap`.
///
/// Nothing survives a restart. The write lock is held across the existence
/// check and the insert, which gives the same atomicity as a UNIQUE constraint.
#[derive(Default)]
pub struct MemoryUrlRepository {
    inner: RwLock<Inner>,
}

#[derive(Default)]
struct Inner {
    last_id: i64,
    by_alias: HashMap<String, UrlMapping>,
}

impl MemoryUrlRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored mappings.
    pub async fn len(&self) -> usize {
        self.inner.read().await.by_alias.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Returns the full record for `alias`, if any.
    pub async fn get(&self, alias: &str) -> Option<UrlMapping> {
        self.inner.read().await.by_alias.get(alias).cloned()
    }
}

#[async_trait]
impl UrlRepository for MemoryUrlRepository {
    async fn save(&self, target_url: &str, alias: &str) -> Result<i64, StorageError> {
        let mut inner = self.inner.write().await;

        if inner.by_alias.contains_key(alias) {
            return Err(StorageError::AliasExists);
        }

        inner.last_id += 1;
        let id = inner.last_id;
        let mapping = NewUrlMapping::new(target_url, alias).into_mapping(id);
        inner.by_alias.insert(mapping.alias.clone(), mapping);

        Ok(id)
    }

    async fn resolve(&self, alias: &str) -> Result<String, StorageError> {
        self.inner
            .read()
            .await
            .by_alias
            .get(alias)
            .map(|mapping| mapping.target_url.clone())
            .ok_or(StorageError::AliasNotFound)
    }
}
