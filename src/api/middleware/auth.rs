//! HTTP basic authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBasic;
use tracing::warn;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using HTTP basic credentials.
///
/// # Header Format
///
/// ```text
/// Authorization: Basic base64(user:password)
/// ```
///
/// # Errors
///
/// Returns `401 Unauthorized` with `WWW-Authenticate: Basic realm="url_shortener"` if:
/// - Authorization header is missing or malformed
/// - User or password do not match the configured credentials
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/url", post(save_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBasic((user, password)) = AuthBasic::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| {
            warn!("missing or malformed basic credentials");
            AppError::unauthorized("unauthorized")
        })?;

    if !st.credentials.matches(&user, password.as_deref()) {
        warn!(user = %user, "invalid basic credentials");
        return Err(AppError::unauthorized("unauthorized"));
    }

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
