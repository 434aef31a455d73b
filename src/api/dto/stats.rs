//! DTOs for link statistics.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::UrlRecord;

/// Statistics for a single short link.
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub code: String,
    pub original_url: String,
    pub normalized_url: String,
    pub created_at: DateTime<Utc>,
    pub hit_count: u64,
}

impl From<UrlRecord> for StatsResponse {
    fn from(record: UrlRecord) -> Self {
        Self {
            code: record.code,
            original_url: record.original_url,
            normalized_url: record.normalized_url,
            created_at: record.created_at,
            hit_count: record.hit_count,
        }
    }
}
