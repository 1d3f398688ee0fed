//! Test Fixtures
//!
//! Builders for drafts, saved profiles and seeded stores, plus proptest
//! strategies producing valid and invalid drafts.

use proptest::prelude::*;

use crate::core::profile::{Draft, DraftPatch, Profile, ProfileId, ProfileStore};

// =============================================================================
// Plain Fixtures
// =============================================================================

/// A draft that passes every wizard step.
pub fn complete_draft(name: &str) -> Draft {
    Draft {
        full_name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase().replace(' ', ".")),
        age: Some(30),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        country: "USA".to_string(),
    }
}

/// A saved profile with a fixed id.
pub fn saved_profile(id: &str, age: Option<u8>, country: &str) -> Profile {
    Profile {
        country: country.to_string(),
        age,
        ..complete_draft(&format!("User {id}")).into_profile(ProfileId::from(id))
    }
}

/// Store holding `n` profiles with ids "1".."n".
pub fn seeded_store(n: usize) -> ProfileStore {
    ProfileStore::from_profiles(
        (1..=n)
            .map(|i| saved_profile(&i.to_string(), Some(20 + i as u8), "USA"))
            .collect(),
    )
}

/// Write a whole draft into the store's draft via one patch.
pub fn fill_draft(store: &mut ProfileStore, draft: Draft) {
    store.set_draft_field(DraftPatch::from(draft));
}

// =============================================================================
// Strategies
// =============================================================================

prop_compose! {
    /// Any draft, including ones missing required fields.
    pub fn arb_draft()(
        full_name in "[a-zA-Z ]{0,20}",
        email in prop_oneof![Just(String::new()), "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}"],
        age in proptest::option::of(1u8..=150),
        city in "[a-zA-Z]{0,12}",
        state in "[a-zA-Z]{0,12}",
        country in "[a-zA-Z]{0,12}",
    ) -> Draft {
        Draft { full_name, email, age, city, state, country }
    }
}

prop_compose! {
    /// Drafts with a non-empty name and email.
    pub fn arb_creatable_draft()(
        draft in arb_draft(),
        full_name in "[A-Z][a-z]{1,10}",
        email in "[a-z]{1,8}@[a-z]{1,8}\\.[a-z]{2,3}",
    ) -> Draft {
        Draft { full_name, email, ..draft }
    }
}
