//! Repository trait for short code storage.

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use async_trait::async_trait;

/// Result of an atomic check-and-create.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimOutcome {
    /// The code and the normalized URL were both free; the record now exists.
    Created(UrlRecord),
    /// Another record already owns this code. Nothing was written.
    CodeTaken,
    /// The normalized URL was already shortened. Nothing was written and the
    /// existing record is returned.
    UrlExists(UrlRecord),
}

/// Storage interface for the bidirectional `code <-> normalized URL` index.
///
/// Absence is reported as `None`, never as an error. Implementations must keep
/// both directions of the index consistent under concurrent access: a reader
/// never observes one mapping without the other.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCodeStore`] - process-local index
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CodeStore: Send + Sync {
    /// Returns the code already issued for a normalized URL.
    async fn lookup_code_by_url(&self, normalized_url: &str) -> Option<String>;

    /// Returns a snapshot of the record stored under `code`.
    async fn lookup_record(&self, code: &str) -> Option<UrlRecord>;

    /// Inserts a record whose code is known to be free.
    ///
    /// # Panics
    ///
    /// Calling this with a code that already exists is a defect in the caller.
    /// Debug builds assert on it.
    async fn create(&self, new_record: NewUrlRecord) -> UrlRecord;

    /// Inserts a record only if neither its code nor its normalized URL is
    /// present, as one indivisible step.
    async fn claim(&self, new_record: NewUrlRecord) -> ClaimOutcome;

    /// Adds one hit to `code` and returns the updated record.
    async fn increment_hit(&self, code: &str) -> Option<UrlRecord>;

    /// Number of records in the store.
    async fn count(&self) -> usize;
}
