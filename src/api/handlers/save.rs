//! Handler for the save endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use tracing::{error, info};
use validator::Validate;

use crate::api::dto::save::{SaveRequest, SaveResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Stores a URL under a caller-supplied or generated alias.
///
/// # Endpoint
///
/// `POST /url` (HTTP basic auth)
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "alias": "ex1" }
/// ```
///
/// `alias` is optional; when absent or empty a 6-character alias is generated.
///
/// # Response
///
/// ```json
/// { "status": "OK", "alias": "ex1" }
/// ```
///
/// # Errors
///
/// Failures are reported in the body with `"status": "Error"`:
/// - undecodable body: `failed to decode request`
/// - missing or malformed `url`: `field url is a required field` / `field url is not a valid url`
/// - alias taken: `alias already exists`
pub async fn save_handler(
    State(state): State<AppState>,
    payload: Result<Json<SaveRequest>, JsonRejection>,
) -> Result<Json<SaveResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        error!(error = %rejection, "failed to decode request body");
        AppError::bad_request("failed to decode request")
    })?;

    info!(url = %request.url, alias = ?request.alias, "request body decoded");

    if let Err(errors) = request.validate() {
        error!(error = %errors, "invalid request");
        return Err(errors.into());
    }

    let saved = state
        .url_service
        .save_url(&request.url, request.requested_alias())
        .await?;

    Ok(Json(SaveResponse::ok(saved.alias)))
}
