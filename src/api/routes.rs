//! API route configuration.

use crate::api::handlers::save_handler;
use crate::state::AppState;
use axum::{Router, routing::post};

/// Write routes, protected by HTTP basic authentication.
///
/// # Endpoints
///
/// - `POST /url` - Store a URL under a supplied or generated alias
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/url", post(save_handler))
}
