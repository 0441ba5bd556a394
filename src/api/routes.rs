//! Route configuration.

use axum::Router;
use axum::routing::get;

use super::handlers;
use super::static_assets::serve_frontend;

/// Create the application router.
///
/// API routes live under `/api/v1`. Every other path goes to the embedded
/// front-end so the client router can resolve it.
pub fn create_router() -> Router {
    Router::new()
        .route("/api/v1/health", get(handlers::health))
        .route("/api/v1/home", get(handlers::home_page))
        .fallback(serve_frontend)
}
