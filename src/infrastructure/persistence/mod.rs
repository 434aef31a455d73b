//! Storage implementations of the domain repository traits.

pub mod memory_code_store;

pub use memory_code_store::InMemoryCodeStore;
