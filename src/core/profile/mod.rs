//! Profile Store
//!
//! In-memory store for saved profiles and the wizard draft.
//!
//! # Overview
//!
//! The store holds three things:
//! - the saved profiles, in insertion order
//! - one draft, populated field by field while the wizard runs
//! - an optional editing marker pointing at the profile the draft will overwrite
//!
//! A draft is consumed by exactly one commit ([`ProfileStore::create_profile`]
//! or [`ProfileStore::update_profile`]), after which it is cleared.
//!
//! Field-level validation (email shape, age range) is not the store's job; see
//! [`crate::core::wizard`].

mod store;
mod types;

pub use store::*;
pub use types::*;
