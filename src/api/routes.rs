//! API route configuration.

use crate::api::handlers::{shorten_handler, stats_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Routes nested under `/api`.
///
/// # Endpoints
///
/// - `POST /shorten`        - Create a short URL
/// - `GET  /stats/{code}`   - Record and hit count for a code
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shorten", post(shorten_handler))
        .route("/stats/{code}", get(stats_handler))
}
