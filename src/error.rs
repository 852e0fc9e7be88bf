//! Application error type and its HTTP representation.
//!
//! Every failure is scoped to a single request. Handlers return [`AppError`],
//! which renders as the service's JSON envelope:
//!
//! ```json
//! { "status": "Error", "error": "alias already exists" }
//! ```
//!
//! Business failures (validation, conflict, not found, internal) keep HTTP
//! status `200` so existing clients that inspect the `status` field keep
//! working. Authentication failures are the exception and use `401`.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use validator::ValidationErrors;

use crate::api::dto::response::ApiResponse;

/// Realm announced in `WWW-Authenticate` challenges.
pub const AUTH_REALM: &str = "url_shortener";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation { message: String },
    #[error("{message}")]
    NotFound { message: String },
    #[error("{message}")]
    Conflict { message: String },
    #[error("{message}")]
    Unauthorized { message: String },
    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Machine-readable kind, used as a structured logging field.
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation { .. } => "validation_error",
            AppError::NotFound { .. } => "not_found",
            AppError::Conflict { .. } => "conflict",
            AppError::Unauthorized { .. } => "unauthorized",
            AppError::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let unauthorized = matches!(self, AppError::Unauthorized { .. });
        let body = Json(ApiResponse::error(self.to_string()));

        if unauthorized {
            let challenge = format!("Basic realm=\"{AUTH_REALM}\"");
            let mut response = (StatusCode::UNAUTHORIZED, body).into_response();
            if let Ok(value) = HeaderValue::from_str(&challenge) {
                response
                    .headers_mut()
                    .insert(header::WWW_AUTHENTICATE, value);
            }
            return response;
        }

        (StatusCode::OK, body).into_response()
    }
}

/// Converts validator output into a single human-readable message.
///
/// Each failing field contributes one phrase; a missing value wins over any
/// other failure on the same field. Fields are listed alphabetically.
impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));

        let messages: Vec<String> = fields
            .into_iter()
            .filter_map(|(field, errs)| {
                let err = errs
                    .iter()
                    .find(|e| e.code == "required")
                    .or_else(|| errs.first());
                err.map(|err| match err.code.as_ref() {
                    "required" => format!("field {field} is a required field"),
                    "url" => format!("field {field} is not a valid url"),
                    _ => format!("field {field} is not valid"),
                })
            })
            .collect();

        AppError::bad_request(messages.join(", "))
    }
}
