//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::link_service::LinkService`] - Shorten, follow and stats
//! - [`services::code_allocator::CodeAllocator`] - Unique code claiming

pub mod services;
