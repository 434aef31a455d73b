//! Infrastructure layer implementing domain storage contracts.
//!
//! - [`persistence`] - Code store implementations

pub mod persistence;
