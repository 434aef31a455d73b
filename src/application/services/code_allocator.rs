//! Short code allocation with race-safe claiming.

use std::sync::Arc;

use metrics::counter;
use serde_json::json;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{ClaimOutcome, CodeStore};
use crate::error::AppError;
use crate::utils::code_generator::{generate_code, is_reserved};

/// Upper bound on generate-and-claim rounds for a single URL.
///
/// At 8 characters the chance of even one collision is negligible. The bound
/// only matters for very short configured lengths.
pub const MAX_ALLOCATION_ATTEMPTS: usize = 64;

/// A record returned by a shorten operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortened {
    pub record: UrlRecord,
    /// `false` when the URL had already been shortened and the existing
    /// record was returned.
    pub created: bool,
}

/// Issues fresh codes for new URLs.
///
/// Each round generates a candidate, drops it if reserved, and then hands it
/// to [`CodeStore::claim`], which checks and inserts in one step. There is no
/// window between "code is free" and "code is mine" for another allocator to
/// slip into.
pub struct CodeAllocator<S: CodeStore> {
    store: Arc<S>,
    code_length: usize,
}

impl<S: CodeStore> CodeAllocator<S> {
    pub fn new(store: Arc<S>, code_length: usize) -> Self {
        Self { store, code_length }
    }

    /// Claims a fresh code for `normalized_url`.
    ///
    /// If another request shortened the same normalized URL first, its record
    /// is returned with `created == false`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if no free code was found within
    /// [`MAX_ALLOCATION_ATTEMPTS`] rounds.
    pub async fn allocate(
        &self,
        original_url: &str,
        normalized_url: &str,
    ) -> Result<Shortened, AppError> {
        for attempt in 1..=MAX_ALLOCATION_ATTEMPTS {
            let Some(code) = self.candidate() else {
                continue;
            };

            let new_record = NewUrlRecord::new(code, original_url, normalized_url);

            match self.store.claim(new_record).await {
                ClaimOutcome::Created(record) => {
                    return Ok(Shortened {
                        record,
                        created: true,
                    });
                }
                ClaimOutcome::UrlExists(record) => {
                    return Ok(Shortened {
                        record,
                        created: false,
                    });
                }
                ClaimOutcome::CodeTaken => {
                    counter!("code_collisions_total").increment(1);
                    debug!(attempt, "Short code collision, retrying");
                }
            }
        }

        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_ALLOCATION_ATTEMPTS }),
        ))
    }

    /// Generates one candidate, or `None` if it landed on a reserved code.
    fn candidate(&self) -> Option<String> {
        let code = generate_code(self.code_length);
        (!is_reserved(&code)).then_some(code)
    }
}
