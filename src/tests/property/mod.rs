//! Property-based tests for Profile Wizard
//!
//! Property tests verify invariants that should hold for all inputs, rather
//! than testing specific cases.
//!
//! ## Running Property Tests
//!
//! ```sh
//! cargo test property --release
//! ```
//!
//! ## Test Modules
//!
//! - `profile_store_props`: Tests for the profile store
//!   - Creating from a creatable draft adds exactly one profile
//!   - Creating from an incomplete draft changes nothing
//!   - Ids are unique across any sequence of creates
//!   - Load-then-update without edits is the identity
//!   - Delete removes exactly the named profile
//!
//! - `validation_props`: Tests for wizard field validation
//!   - Emails containing whitespace are never accepted
//!   - Ages parse only inside 1..=150
//!   - Blank fields always produce an error
//!
//! ## Configuration
//!
//! By default, proptest runs 256 cases per property. Override with
//! `PROPTEST_CASES`:
//!
//! ```sh
//! PROPTEST_CASES=1000 cargo test property --release
//! ```

mod profile_store_props;
mod validation_props;
