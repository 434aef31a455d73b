//! Process-local implementation of [`CodeStore`].

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::{NewUrlRecord, UrlRecord};
use crate::domain::repositories::{ClaimOutcome, CodeStore};

/// Both directions of the index. Always mutated together under one write guard.
#[derive(Debug, Default)]
struct Index {
    records: HashMap<String, UrlRecord>,
    codes_by_url: HashMap<String, String>,
}

impl Index {
    fn insert(&mut self, record: UrlRecord) -> UrlRecord {
        self.codes_by_url
            .insert(record.normalized_url.clone(), record.code.clone());
        self.records.insert(record.code.clone(), record.clone());
        record
    }
}

/// In-memory code store.
///
/// A single `RwLock` guards both maps, so every create and every increment is
/// one atomic unit and readers never see half of an insert. Lookups take the
/// read side and run in parallel with each other. State lives for the lifetime
/// of the process only.
#[derive(Debug, Default)]
pub struct InMemoryCodeStore {
    index: RwLock<Index>,
}

impl InMemoryCodeStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        debug!("Using in-memory code store");
        Self::default()
    }

    // No code path panics while holding the guard in release builds, so a
    // poisoned lock still protects a consistent index.
    fn read(&self) -> RwLockReadGuard<'_, Index> {
        self.index.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Index> {
        self.index.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[async_trait]
impl CodeStore for InMemoryCodeStore {
    async fn lookup_code_by_url(&self, normalized_url: &str) -> Option<String> {
        self.read().codes_by_url.get(normalized_url).cloned()
    }

    async fn lookup_record(&self, code: &str) -> Option<UrlRecord> {
        self.read().records.get(code).cloned()
    }

    async fn create(&self, new_record: NewUrlRecord) -> UrlRecord {
        let mut index = self.write();

        debug_assert!(
            !index.records.contains_key(&new_record.code),
            "code {:?} is already in use",
            new_record.code
        );
        debug_assert!(
            !index.codes_by_url.contains_key(&new_record.normalized_url),
            "url {:?} already has a code",
            new_record.normalized_url
        );

        index.insert(UrlRecord::new(new_record))
    }

    async fn claim(&self, new_record: NewUrlRecord) -> ClaimOutcome {
        let mut index = self.write();

        if let Some(existing_code) = index.codes_by_url.get(&new_record.normalized_url)
            && let Some(existing) = index.records.get(existing_code)
        {
            return ClaimOutcome::UrlExists(existing.clone());
        }

        if index.records.contains_key(&new_record.code) {
            return ClaimOutcome::CodeTaken;
        }

        ClaimOutcome::Created(index.insert(UrlRecord::new(new_record)))
    }

    async fn increment_hit(&self, code: &str) -> Option<UrlRecord> {
        let mut index = self.write();
        let record = index.records.get_mut(code)?;
        record.hit_count = record.hit_count.saturating_add(1);
        Some(record.clone())
    }

    async fn count(&self) -> usize {
        self.read().records.len()
    }
}
