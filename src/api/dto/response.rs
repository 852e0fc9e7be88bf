//! Common response envelope.

use serde::Serialize;

const STATUS_OK: &str = "OK";
const STATUS_ERROR: &str = "Error";

/// Envelope shared by every JSON response.
///
/// Callers detect failure by inspecting `status`, not the HTTP code.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ApiResponse {
    pub fn ok() -> Self {
        Self {
            status: STATUS_OK,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: STATUS_ERROR,
            error: Some(message.into()),
        }
    }
}
