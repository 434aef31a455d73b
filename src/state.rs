//! Shared application state injected into all handlers.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryCodeStore;

/// State cloned into every request handler.
///
/// The store is constructed once per process (or once per test) and shared
/// through the service behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService<InMemoryCodeStore>>,
    /// Public base for short URLs; `None` derives it from the request.
    pub base_url: Option<String>,
}

impl AppState {
    pub fn new(link_service: Arc<LinkService<InMemoryCodeStore>>, base_url: Option<String>) -> Self {
        Self {
            link_service,
            base_url,
        }
    }

    /// Builds state around a fresh, empty store.
    pub fn from_config(config: &Config) -> Self {
        let store = Arc::new(InMemoryCodeStore::new());
        let link_service = Arc::new(LinkService::new(store, config.code_length));
        Self::new(link_service, config.base_url.clone())
    }
}
