#![allow(dead_code)]

use axum::{Router, routing::get};
use std::sync::Arc;
use snip::api;
use snip::api::handlers::{health_handler, redirect_handler, root_handler};
use snip::application::services::LinkService;
use snip::infrastructure::persistence::InMemoryCodeStore;
use snip::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

pub fn create_test_service() -> Arc<LinkService<InMemoryCodeStore>> {
    let store = Arc::new(InMemoryCodeStore::new());
    Arc::new(LinkService::new(store, 8))
}

/// State with a configured public base URL.
pub fn create_test_state() -> AppState {
    AppState::new(create_test_service(), Some(BASE_URL.to_string()))
}

/// State that derives the public base URL from the Host header.
pub fn create_host_based_state() -> AppState {
    AppState::new(create_test_service(), None)
}

/// Same routes as the production router, without the path-normalizing wrapper.
pub fn create_test_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .route("/health", get(health_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .with_state(state)
}
