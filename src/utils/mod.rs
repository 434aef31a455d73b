//! Helper functions used across the application.
//!
//! - [`code_generator`] - Short code alphabet, generation and reserved codes
//! - [`url_normalizer`] - URL validation and canonicalization
//! - [`base_url`] - Public short URL composition from request headers

pub mod base_url;
pub mod code_generator;
pub mod url_normalizer;
