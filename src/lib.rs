//! # snip
//!
//! A small URL shortening service built with Axum. Links live in memory for
//! the lifetime of the process.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The URL record entity and the code store contract
//! - **Application Layer** ([`application`]) - Shorten/follow/stats and code allocation
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory code store
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Guarantees
//!
//! - Submitting the same normalized URL always yields the same code, even
//!   when the first submissions race
//! - Codes are 8 random characters from `[0-9a-zA-Z]`, drawn from a CSPRNG,
//!   and never collide with route names
//! - Hit counts never lose an increment under concurrent redirects
//!
//! ## Quick Start
//!
//! ```bash
//! cargo run -- --listen 127.0.0.1:3000
//!
//! curl -X POST localhost:3000/api/shorten -H 'content-type: application/json' \
//!      -d '{"url":"https://example.com/some/long/path"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CodeAllocator, LinkService, Shortened};
    pub use crate::domain::entities::{NewUrlRecord, UrlRecord};
    pub use crate::domain::repositories::{ClaimOutcome, CodeStore};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryCodeStore;
    pub use crate::state::AppState;
}
