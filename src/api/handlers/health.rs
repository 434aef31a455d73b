//! Handlers for health check and landing endpoints.

use axum::{Json, extract::State};
use chrono::Utc;

use crate::api::dto::health::{HealthResponse, RootResponse};
use crate::state::AppState;

/// Returns service liveness.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response
///
/// ```json
/// {
///   "status": "ok",
///   "version": "0.1.0",
///   "timestamp": "2025-01-01T00:00:00Z",
///   "links": 42
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: Utc::now(),
        links: state.link_service.link_count().await,
    })
}

/// Short landing message.
///
/// # Endpoint
///
/// `GET /`
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Welcome to the URL shortener API. POST a URL to /api/shorten.".to_string(),
    })
}
