//! DTOs for health and landing endpoints.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Liveness response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: DateTime<Utc>,
    /// Number of short links currently held in memory.
    pub links: usize,
}

/// Landing message served at `/`.
#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: String,
}
