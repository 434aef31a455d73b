//! Repository trait definitions for the domain layer.
//!
//! Traits define the storage contract; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.

pub mod code_store;

pub use code_store::{ClaimOutcome, CodeStore};

#[cfg(test)]
pub use code_store::MockCodeStore;
