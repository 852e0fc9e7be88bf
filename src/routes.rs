//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `POST /url`        - Save a URL (basic auth required)
//! - `GET  /{alias}`    - Alias redirect (public)
//!
//! # Middleware
//!
//! - **Request id** - `x-request-id` assigned and echoed
//! - **Tracing** - Structured request/response logging
//! - **Panic recovery** - A panicking handler yields `500` instead of a dropped connection
//! - **Timeout** - Requests exceeding the configured limit are aborted
//! - **Authentication** - Basic auth on write routes
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::redirect_handler;
use crate::api::middleware::{auth, tracing};
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use std::time::Duration;
use tower::Layer;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Builds the router with all routes and middleware, without path normalization.
///
/// Useful for in-process testing where the router is driven directly.
pub fn router(state: AppState, request_timeout: Duration) -> Router {
    let api_router = api::routes::protected_routes().route_layer(
        middleware::from_fn_with_state(state.clone(), auth::layer),
    );

    Router::new()
        .merge(api_router)
        .route("/{alias}", get(redirect_handler))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ))
        .layer(CatchPanicLayer::new())
        .layer(tracing::propagate_request_id_layer())
        .layer(tracing::layer())
        .layer(tracing::set_request_id_layer())
}

/// Constructs the application router with trailing-slash normalization.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `request_timeout` - per-request time limit
pub fn app_router(state: AppState, request_timeout: Duration) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state, request_timeout))
}
