//! # Snip URL
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! A client stores a long URL under a short alias (its own, or a generated
//! 6-character one); visitors requesting the alias are redirected to the URL.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL mapping entity and the store contract
//! - **Application Layer** ([`application`]) - Alias allocation and lookup
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite and in-memory stores
//! - **API Layer** ([`api`]) - HTTP handlers, DTOs, and middleware
//!
//! ## Quick Start
//!
//! ```bash
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_USER="admin" HTTP_PASSWORD="change-me"
//! cargo run
//!
//! curl -u admin:change-me -d '{"url":"https://example.com","alias":"ex1"}' localhost:8000/url
//! curl -i localhost:8000/ex1
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{SavedUrl, UrlService};
    pub use crate::domain::entities::{NewUrlMapping, UrlMapping};
    pub use crate::domain::repositories::{StorageError, UrlRepository};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::{MemoryUrlRepository, SqliteUrlRepository};
    pub use crate::state::{AppState, BasicCredentials};
    pub use crate::utils::alias_generator::AliasGenerator;
}
