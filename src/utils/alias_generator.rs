//! Alias generation and validation utilities.
//!
//! Generated aliases are short random tokens; caller-supplied aliases are
//! validated so that every stored alias is reachable as a single path segment.

use rand::Rng;
use std::ops::RangeInclusive;

use crate::error::AppError;

/// Characters a generated alias is drawn from.
pub const ALIAS_ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated aliases unless configured otherwise.
pub const DEFAULT_ALIAS_LENGTH: usize = 6;

/// Lengths accepted for generated aliases.
pub const ALIAS_LENGTH_RANGE: RangeInclusive<usize> = 4..=32;

/// Longest alias a caller may supply.
pub const MAX_CUSTOM_ALIAS_LENGTH: usize = 64;

/// Path segments taken by the service's own routes.
const RESERVED_ALIASES: &[&str] = &["url"];

/// Produces fixed-length random aliases.
///
/// Stateless: each call draws fresh randomness from the thread-local CSPRNG,
/// so a single instance can be shared freely between requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AliasGenerator {
    length: usize,
}

impl AliasGenerator {
    /// Creates a generator for aliases of `length` characters.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `length` is outside [`ALIAS_LENGTH_RANGE`].
    pub fn new(length: usize) -> Result<Self, AppError> {
        if !ALIAS_LENGTH_RANGE.contains(&length) {
            return Err(AppError::bad_request(format!(
                "alias length must be between {} and {}, got {length}",
                ALIAS_LENGTH_RANGE.start(),
                ALIAS_LENGTH_RANGE.end()
            )));
        }

        Ok(Self { length })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generates a new alias of [`Self::length`] characters from [`ALIAS_ALPHABET`].
    ///
    /// Never fails. Collisions with existing aliases are detected by the store.
    pub fn generate(&self) -> String {
        let mut rng = rand::rng();

        (0..self.length)
            .map(|_| ALIAS_ALPHABET[rng.random_range(0..ALIAS_ALPHABET.len())] as char)
            .collect()
    }
}

impl Default for AliasGenerator {
    fn default() -> Self {
        Self {
            length: DEFAULT_ALIAS_LENGTH,
        }
    }
}

/// Validates a caller-supplied alias.
///
/// # Rules
///
/// - Length: 1-64 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route segment
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any rule is violated.
pub fn validate_custom_alias(alias: &str) -> Result<(), AppError> {
    if alias.is_empty() || alias.len() > MAX_CUSTOM_ALIAS_LENGTH {
        return Err(AppError::bad_request(format!(
            "field alias must be 1-{MAX_CUSTOM_ALIAS_LENGTH} characters"
        )));
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "field alias can only contain letters, digits, '-' and '_'",
        ));
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(AppError::bad_request("field alias is reserved"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_has_default_length() {
        let alias = AliasGenerator::default().generate();
        assert_eq!(alias.len(), 6);
    }

    #[test]
    fn test_generate_respects_configured_length() {
        let generator = AliasGenerator::new(10).unwrap();
        assert_eq!(generator.length(), 10);
        assert_eq!(generator.generate().len(), 10);
    }

    #[test]
    fn test_generate_uses_alphabet_only() {
        let generator = AliasGenerator::default();

        for _ in 0..10_000 {
            let alias = generator.generate();
            assert_eq!(alias.len(), DEFAULT_ALIAS_LENGTH);
            assert!(alias.bytes().all(|b| ALIAS_ALPHABET.contains(&b)));
        }
    }

    #[test]
    fn test_generate_rarely_collides() {
        let generator = AliasGenerator::default();
        let aliases: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        // 62^6 possible aliases; a handful of collisions in 1000 draws is
        // already astronomically unlikely.
        assert!(aliases.len() >= 995);
    }

    #[test]
    fn test_new_rejects_out_of_range_length() {
        for length in [0, 1, 3, 33] {
            let err = AliasGenerator::new(length).unwrap_err();
            assert!(matches!(err, AppError::Validation { .. }), "length {length}");
        }
    }

    #[test]
    fn test_new_accepts_range_bounds() {
        assert_eq!(AliasGenerator::new(4).unwrap().generate().len(), 4);
        assert_eq!(AliasGenerator::new(32).unwrap().generate().len(), 32);
    }

    #[test]
    fn test_generated_alias_passes_validation() {
        let alias = AliasGenerator::default().generate();
        assert!(validate_custom_alias(&alias).is_ok());
    }

    #[test]
    fn test_validate_accepts_simple_alias() {
        assert!(validate_custom_alias("ex1").is_ok());
        assert!(validate_custom_alias("my-link_2024").is_ok());
        assert!(validate_custom_alias("A").is_ok());
    }

    #[test]
    fn test_validate_max_length() {
        let alias = "a".repeat(MAX_CUSTOM_ALIAS_LENGTH);
        assert!(validate_custom_alias(&alias).is_ok());

        let alias = "a".repeat(MAX_CUSTOM_ALIAS_LENGTH + 1);
        assert!(validate_custom_alias(&alias).is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_alias("").is_err());
    }

    #[test]
    fn test_validate_rejects_path_characters() {
        for alias in ["a/b", "a b", "a?b", "a#b", "ключ", "a.b"] {
            let result = validate_custom_alias(alias);
            assert!(result.is_err(), "alias '{}' should be invalid", alias);
        }
    }

    #[test]
    fn test_validate_reserved_alias() {
        let err = validate_custom_alias("url").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert!(err.to_string().contains("reserved"));
    }
}
