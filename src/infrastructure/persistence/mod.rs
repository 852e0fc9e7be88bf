//! Repository implementations.
//!
//! - [`SqliteUrlRepository`] - durable storage via SQLx/SQLite
//! - [`MemoryUrlRepository`] - process-local map, used by tests and tooling

pub mod memory_url_repository;
pub mod sqlite_url_repository;

pub use memory_url_repository::MemoryUrlRepository;
pub use sqlite_url_repository::SqliteUrlRepository;
