//! Common Test Utilities
//!
//! Shared fixtures and proptest strategies for profile data.

pub mod fixtures;

pub use fixtures::*;
