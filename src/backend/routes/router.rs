/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Layers
 *
 * From the outside in:
 * 1. `TraceLayer` - request/response spans
 * 2. CORS middleware - headers on every response, preflight short-circuit
 * 3. `DefaultBodyLimit` - 1 MiB cap enforced while the body is read
 */

use axum::{
    extract::DefaultBodyLimit,
    http::Method,
    middleware,
    response::{IntoResponse, Response},
    Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use crate::backend::envelope::MAX_BODY_BYTES;
use crate::backend::error::BackendError;
use crate::backend::middleware::enable_cors;
use crate::backend::routes::api_routes::configure_api_routes;
use crate::backend::server::state::AppState;

/// Enveloped 404 for unknown routes
async fn not_found() -> Response {
    BackendError::not_found("the requested resource could not be found").into_response()
}

/// Enveloped 405 for known routes hit with an unsupported method
async fn method_not_allowed(method: Method) -> Response {
    BackendError::method_not_allowed(format!(
        "the {} method is not supported for this resource",
        method
    ))
    .into_response()
}

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_api_routes(Router::new());

    router
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(enable_cors))
                .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
        )
        .with_state(app_state)
}
