//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /`         - Landing message
//! - `GET  /health`   - Liveness
//! - `GET  /{code}`   - Short link redirect
//! - `/api/*`         - REST API
//!
//! Static routes take precedence over `/{code}`. The codes that would shadow
//! them are in the reserved set and never issued.

use crate::api;
use crate::api::handlers::{health_handler, redirect_handler, root_handler};
use crate::api::middleware::tracing;
use crate::state::AppState;
use axum::Router;
use axum::routing::get;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
