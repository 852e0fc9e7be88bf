//! Utility functions shared across layers.
//!
//! - [`alias_generator`] - Alias generation and validation

pub mod alias_generator;
