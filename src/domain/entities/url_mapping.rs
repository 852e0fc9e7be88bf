//! URL mapping entity: an alias pointing at a target URL.

/// A stored alias → URL mapping.
///
/// Records are immutable once created. `id` is an internal handle assigned
/// by the store in increasing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlMapping {
    pub id: i64,
    pub alias: String,
    pub target_url: String,
}

impl UrlMapping {
    /// Creates a new UrlMapping instance.
    pub fn new(id: i64, alias: String, target_url: String) -> Self {
        Self {
            id,
            alias,
            target_url,
        }
    }
}

/// Input data for creating a new mapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlMapping {
    pub alias: String,
    pub target_url: String,
}

impl NewUrlMapping {
    pub fn new(target_url: impl Into<String>, alias: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            target_url: target_url.into(),
        }
    }

    /// Attaches the store-assigned identifier.
    pub fn into_mapping(self, id: i64) -> UrlMapping {
        UrlMapping::new(id, self.alias, self.target_url)
    }
}
