//! Handler for alias redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::application::services::url_service::MSG_RESOLVE_FAILED;
use crate::error::AppError;
use crate::state::AppState;

/// Redirects an alias to its stored URL.
///
/// # Endpoint
///
/// `GET /{alias}`
///
/// Every call is a fresh lookup against the store.
///
/// # Response
///
/// `302 Found` with `Location` set to the stored URL, byte for byte.
///
/// # Errors
///
/// - unknown alias: `{"status":"Error","error":"alias not found"}`
/// - storage failure: `{"status":"Error","error":"internal error"}`
pub async fn redirect_handler(
    Path(alias): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let target_url = state.url_service.resolve_url(&alias).await?;

    let location = HeaderValue::from_str(&target_url).map_err(|e| {
        error!(alias = %alias, error = %e, "stored url is not a valid header value");
        AppError::internal(MSG_RESOLVE_FAILED)
    })?;

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}
