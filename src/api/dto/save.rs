//! DTOs for the save endpoint.

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::response::ApiResponse;

/// Request to store a URL under an alias.
///
/// `target_url` is accepted as a synonym for `url`. An absent or empty
/// `alias` asks the service to generate one.
#[derive(Debug, Deserialize, Validate)]
pub struct SaveRequest {
    #[serde(default, alias = "target_url")]
    #[validate(length(min = 1, code = "required"), url(code = "url"))]
    pub url: String,

    #[serde(default)]
    pub alias: Option<String>,
}

impl SaveRequest {
    /// Returns the caller-supplied alias, treating an empty string as absent.
    pub fn requested_alias(&self) -> Option<String> {
        self.alias.clone().filter(|alias| !alias.is_empty())
    }
}

/// Successful save: the envelope plus the alias that was stored.
#[derive(Debug, Serialize)]
pub struct SaveResponse {
    #[serde(flatten)]
    pub response: ApiResponse,
    pub alias: String,
}

impl SaveResponse {
    pub fn ok(alias: impl Into<String>) -> Self {
        Self {
            response: ApiResponse::ok(),
            alias: alias.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_with_alias() {
        let request: SaveRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "alias": "ex1" }))
                .unwrap();

        assert_eq!(request.url, "https://example.com");
        assert_eq!(request.requested_alias().as_deref(), Some("ex1"));
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_target_url_synonym() {
        let request: SaveRequest =
            serde_json::from_value(json!({ "target_url": "https://example.com" })).unwrap();

        assert_eq!(request.url, "https://example.com");
        assert!(request.requested_alias().is_none());
    }

    #[test]
    fn test_empty_alias_is_absent() {
        let request: SaveRequest =
            serde_json::from_value(json!({ "url": "https://example.com", "alias": "" })).unwrap();

        assert!(request.requested_alias().is_none());
    }

    #[test]
    fn test_missing_url_fails_validation() {
        let request: SaveRequest = serde_json::from_value(json!({ "alias": "ex1" })).unwrap();

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("url"));
    }

    #[test]
    fn test_serialize_response() {
        let value = serde_json::to_value(SaveResponse::ok("ex1")).unwrap();
        assert_eq!(value, json!({ "status": "OK", "alias": "ex1" }));
    }
}
