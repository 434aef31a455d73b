//! Handler for link statistics.

use axum::{
    Json,
    extract::{Path, State},
};

use crate::api::dto::stats::StatsResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Returns the stored record for a short code.
///
/// # Endpoint
///
/// `GET /api/stats/{code}`
///
/// Read-only: does not change the hit count.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn stats_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<StatsResponse>, AppError> {
    let record = state.link_service.stats(&code).await?;
    Ok(Json(record.into()))
}
