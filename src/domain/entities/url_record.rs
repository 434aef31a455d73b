//! URL record entity representing one shortened destination.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A shortened URL together with its usage counter.
///
/// One record exists per distinct normalized URL. The record is created once
/// and afterwards only `hit_count` changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UrlRecord {
    pub code: String,
    /// The URL exactly as submitted, with surrounding whitespace trimmed.
    pub original_url: String,
    /// Canonical form used as the deduplication key.
    pub normalized_url: String,
    pub created_at: DateTime<Utc>,
    pub hit_count: u64,
}

impl UrlRecord {
    /// Builds a fresh record stamped with the current UTC time and zero hits.
    pub fn new(new_record: NewUrlRecord) -> Self {
        Self {
            code: new_record.code,
            original_url: new_record.original_url,
            normalized_url: new_record.normalized_url,
            created_at: Utc::now(),
            hit_count: 0,
        }
    }
}

/// Input data for creating a new record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUrlRecord {
    pub code: String,
    pub original_url: String,
    pub normalized_url: String,
}

impl NewUrlRecord {
    pub fn new(
        code: impl Into<String>,
        original_url: impl Into<String>,
        normalized_url: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            original_url: original_url.into(),
            normalized_url: normalized_url.into(),
        }
    }
}
