//! Core domain entities representing the business data model.
//!
//! The service persists a single entity, [`UrlMapping`]. [`NewUrlMapping`]
//! carries the fields supplied at creation time, before the store assigns an id.

pub mod url_mapping;

pub use url_mapping::{NewUrlMapping, UrlMapping};
