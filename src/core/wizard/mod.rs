//! Profile Wizard Steps and Field Validation
//!
//! The wizard walks the user through three pages:
//! 1. Basic Information - full name, email, age
//! 2. Address Information - city, state, country
//! 3. Review - read-only summary, then create or update
//!
//! Each page validates its own fields before the user may advance. This is a
//! presentation gate only; the profile store accepts whatever it is given
//! apart from requiring a name and email at creation.

mod steps;
mod validation;

pub use steps::*;
pub use validation::*;
