//! Alias allocation and lookup service.

use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::domain::repositories::{StorageError, UrlRepository};
use crate::error::AppError;
use crate::utils::alias_generator::{AliasGenerator, validate_custom_alias};

/// Attempts at storing a generated alias before giving up.
pub const MAX_GENERATION_ATTEMPTS: usize = 10;

pub const MSG_ALIAS_EXISTS: &str = "alias already exists";
pub const MSG_ALIAS_NOT_FOUND: &str = "alias not found";
pub const MSG_INVALID_REQUEST: &str = "invalid request";
pub const MSG_SAVE_FAILED: &str = "failed to add url";
pub const MSG_RESOLVE_FAILED: &str = "internal error";
pub const MSG_GENERATION_EXHAUSTED: &str = "failed to generate unique alias";

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedUrl {
    pub id: i64,
    pub alias: String,
}

/// Service for storing URLs under aliases and resolving them back.
///
/// Holds the store by trait object so any [`UrlRepository`] can be injected.
pub struct UrlService {
    repository: Arc<dyn UrlRepository>,
    generator: AliasGenerator,
}

impl UrlService {
    /// Creates a new URL service.
    pub fn new(repository: Arc<dyn UrlRepository>, generator: AliasGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Stores `target_url` under `alias`, or under a generated alias when
    /// `alias` is `None`.
    ///
    /// `target_url` is expected to be validated by the caller and is stored verbatim.
    ///
    /// # Generated aliases
    ///
    /// A generated alias that collides with an existing one is replaced by a
    /// fresh one, up to [`MAX_GENERATION_ATTEMPTS`] times. Caller-supplied
    /// aliases are never retried.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the supplied alias is invalid.
    /// Returns [`AppError::Conflict`] if the supplied alias is taken.
    /// Returns [`AppError::Internal`] on storage failure or when every
    /// generated alias collided.
    pub async fn save_url(
        &self,
        target_url: &str,
        alias: Option<String>,
    ) -> Result<SavedUrl, AppError> {
        match alias {
            Some(alias) => {
                validate_custom_alias(&alias)?;
                let id = self.store(target_url, &alias).await?;
                Ok(SavedUrl { id, alias })
            }
            None => self.store_generated(target_url).await,
        }
    }

    /// Returns the URL stored under `alias`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `alias` is empty.
    /// Returns [`AppError::NotFound`] if no mapping exists.
    /// Returns [`AppError::Internal`] on storage failure.
    pub async fn resolve_url(&self, alias: &str) -> Result<String, AppError> {
        if alias.is_empty() {
            info!("alias is empty");
            return Err(AppError::bad_request(MSG_INVALID_REQUEST));
        }

        match self.repository.resolve(alias).await {
            Ok(url) => {
                debug!(alias, url = %url, "alias resolved");
                Ok(url)
            }
            Err(StorageError::AliasNotFound) => {
                info!(alias, "url not found");
                Err(AppError::not_found(MSG_ALIAS_NOT_FOUND))
            }
            Err(e) => {
                error!(alias, error = %e, "failed to get url");
                Err(AppError::internal(MSG_RESOLVE_FAILED))
            }
        }
    }

    async fn store(&self, target_url: &str, alias: &str) -> Result<i64, AppError> {
        match self.repository.save(target_url, alias).await {
            Ok(id) => {
                info!(id, alias, "url added");
                Ok(id)
            }
            Err(StorageError::AliasExists) => {
                info!(alias, url = target_url, "url already exists");
                Err(AppError::conflict(MSG_ALIAS_EXISTS))
            }
            Err(e) => Err(save_failed(e)),
        }
    }

    async fn store_generated(&self, target_url: &str) -> Result<SavedUrl, AppError> {
        for attempt in 1..=MAX_GENERATION_ATTEMPTS {
            let alias = self.generator.generate();

            match self.repository.save(target_url, &alias).await {
                Ok(id) => {
                    info!(id, alias = %alias, "url added");
                    return Ok(SavedUrl { id, alias });
                }
                Err(StorageError::AliasExists) => {
                    warn!(alias = %alias, attempt, "generated alias collided, retrying");
                }
                Err(e) => return Err(save_failed(e)),
            }
        }

        error!(
            attempts = MAX_GENERATION_ATTEMPTS,
            "every generated alias collided"
        );
        Err(AppError::internal(MSG_GENERATION_EXHAUSTED))
    }
}

fn save_failed(e: StorageError) -> AppError {
    error!(error = %e, "failed to add url");
    AppError::internal(MSG_SAVE_FAILED)
}
