//! Core domain entities.
//!
//! Entities are plain data structures. Creation input is kept in a separate
//! `New*` struct so the store alone decides timestamps and counters.

pub mod url_record;

pub use url_record::{NewUrlRecord, UrlRecord};
