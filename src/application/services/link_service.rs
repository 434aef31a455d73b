//! Shorten, follow and stats operations.

use std::sync::Arc;

use metrics::counter;
use serde_json::json;
use tracing::info;

use crate::application::services::code_allocator::{CodeAllocator, Shortened};
use crate::domain::entities::UrlRecord;
use crate::domain::repositories::CodeStore;
use crate::error::AppError;
use crate::utils::url_normalizer::normalize_url;

/// Service for creating, following and inspecting short links.
///
/// Handles URL normalization and deduplication so that submitting the same
/// effective URL twice always yields the same code.
pub struct LinkService<S: CodeStore> {
    store: Arc<S>,
    allocator: CodeAllocator<S>,
}

impl<S: CodeStore> LinkService<S> {
    /// Creates a new link service issuing codes of `code_length` characters.
    pub fn new(store: Arc<S>, code_length: usize) -> Self {
        let allocator = CodeAllocator::new(store.clone(), code_length);
        Self { store, allocator }
    }

    /// Normalizes `url` and shortens it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL cannot be normalized.
    /// Returns [`AppError::Internal`] if code allocation is exhausted.
    pub async fn shorten(&self, url: &str) -> Result<Shortened, AppError> {
        let url = normalize_url(url)?;
        self.shorten_normalized(&url.original, &url.normalized)
            .await
    }

    /// Shortens an already normalized URL.
    ///
    /// # Deduplication
    ///
    /// If `normalized_url` already has a code, its record is returned
    /// unchanged. Otherwise a new code is claimed. The claim itself also
    /// checks the URL, so two concurrent first submissions still end up
    /// sharing one code.
    pub async fn shorten_normalized(
        &self,
        original_url: &str,
        normalized_url: &str,
    ) -> Result<Shortened, AppError> {
        if let Some(code) = self.store.lookup_code_by_url(normalized_url).await
            && let Some(record) = self.store.lookup_record(&code).await
        {
            counter!("links_deduplicated_total").increment(1);
            return Ok(Shortened {
                record,
                created: false,
            });
        }

        let shortened = self
            .allocator
            .allocate(original_url, normalized_url)
            .await?;

        if shortened.created {
            counter!("links_created_total").increment(1);
            info!(code = %shortened.record.code, url = %normalized_url, "Short link created");
        } else {
            counter!("links_deduplicated_total").increment(1);
        }

        Ok(shortened)
    }

    /// Records one hit on `code` and returns the updated record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    pub async fn follow(&self, code: &str) -> Result<UrlRecord, AppError> {
        let record = self
            .store
            .increment_hit(code)
            .await
            .ok_or_else(|| not_found(code))?;

        counter!("redirects_total").increment(1);
        Ok(record)
    }

    /// Returns the record for `code` without touching its hit count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code was never issued.
    pub async fn stats(&self, code: &str) -> Result<UrlRecord, AppError> {
        self.store
            .lookup_record(code)
            .await
            .ok_or_else(|| not_found(code))
    }

    /// Number of short links issued so far.
    pub async fn link_count(&self) -> usize {
        self.store.count().await
    }
}

fn not_found(code: &str) -> AppError {
    AppError::not_found("Short link not found", json!({ "code": code }))
}
