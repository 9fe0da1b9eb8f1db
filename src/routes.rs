//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                        - Database health check
//! - `/users`, `/stores`, `/brands`,
//!   `/products`, `/payments`, `/statistics` - Resource CRUD
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling, so `POST /brands/` works

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Builds the router without path normalization.
///
/// Useful where a plain [`Router`] is needed (tests, nesting).
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::resource_routes())
        .with_state(state)
        .layer(tracing::layer())
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(router(state))
}
