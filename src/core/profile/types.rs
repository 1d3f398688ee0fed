//! Profile Domain Types
//!
//! - [`ProfileId`]: opaque identifier assigned when a profile is created
//! - [`Profile`]: a saved profile record
//! - [`Draft`]: the record being composed by the wizard
//! - [`DraftPatch`]: a partial draft merged field-by-field into the current one
//! - [`ProfileStats`]: aggregate figures shown on the landing page

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// Identifiers
// ============================================================================

/// Unique, immutable profile identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileId(String);

impl ProfileId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProfileId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ProfileId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// The fields being edited across the wizard steps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub full_name: String,
    pub email: String,
    /// `None` until the user enters an age.
    pub age: Option<u8>,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the fields required to create a profile are present.
    ///
    /// No trimming happens here; callers trim before committing if they care.
    pub fn has_required_fields(&self) -> bool {
        !self.full_name.is_empty() && !self.email.is_empty()
    }

    /// Merge a patch: `Some` fields overwrite, `None` fields keep their value.
    pub fn apply(&mut self, patch: DraftPatch) {
        if let Some(full_name) = patch.full_name {
            self.full_name = full_name;
        }
        if let Some(email) = patch.email {
            self.email = email;
        }
        if let Some(age) = patch.age {
            self.age = age;
        }
        if let Some(city) = patch.city {
            self.city = city;
        }
        if let Some(state) = patch.state {
            self.state = state;
        }
        if let Some(country) = patch.country {
            self.country = country;
        }
    }

    /// Build a saved profile from this draft.
    pub fn into_profile(self, id: ProfileId) -> Profile {
        Profile {
            id,
            full_name: self.full_name,
            email: self.email,
            age: self.age,
            city: self.city,
            state: self.state,
            country: self.country,
        }
    }
}

/// A saved profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    pub full_name: String,
    pub email: String,
    pub age: Option<u8>,
    pub city: String,
    pub state: String,
    pub country: String,
}

impl Profile {
    /// Copy of every field except the id.
    pub fn to_draft(&self) -> Draft {
        Draft {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            age: self.age,
            city: self.city.clone(),
            state: self.state.clone(),
            country: self.country.clone(),
        }
    }

    /// Replace every non-id field with the draft's values.
    pub fn overwrite_from(&mut self, draft: Draft) {
        self.full_name = draft.full_name;
        self.email = draft.email;
        self.age = draft.age;
        self.city = draft.city;
        self.state = draft.state;
        self.country = draft.country;
    }

    /// "City, State, Country" for list rendering.
    pub fn location(&self) -> String {
        format!("{}, {}, {}", self.city, self.state, self.country)
    }
}

// ============================================================================
// Partial updates
// ============================================================================

/// A partial draft. Unset fields leave the current draft untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftPatch {
    pub full_name: Option<String>,
    pub email: Option<String>,
    /// `Some(None)` clears the age.
    pub age: Option<Option<u8>>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub country: Option<String>,
}

impl DraftPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn full_name(mut self, value: impl Into<String>) -> Self {
        self.full_name = Some(value.into());
        self
    }

    pub fn email(mut self, value: impl Into<String>) -> Self {
        self.email = Some(value.into());
        self
    }

    pub fn age(mut self, value: Option<u8>) -> Self {
        self.age = Some(value);
        self
    }

    pub fn city(mut self, value: impl Into<String>) -> Self {
        self.city = Some(value.into());
        self
    }

    pub fn state(mut self, value: impl Into<String>) -> Self {
        self.state = Some(value.into());
        self
    }

    pub fn country(mut self, value: impl Into<String>) -> Self {
        self.country = Some(value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<Draft> for DraftPatch {
    fn from(draft: Draft) -> Self {
        Self {
            full_name: Some(draft.full_name),
            email: Some(draft.email),
            age: Some(draft.age),
            city: Some(draft.city),
            state: Some(draft.state),
            country: Some(draft.country),
        }
    }
}

// ============================================================================
// Statistics
// ============================================================================

/// Aggregate figures over the saved profiles.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileStats {
    pub total_profiles: usize,
    /// Floor of the mean age; a missing age counts as zero.
    pub average_age: u32,
    pub unique_countries: usize,
}

impl ProfileStats {
    pub fn from_profiles(profiles: &[Profile]) -> Self {
        if profiles.is_empty() {
            return Self::default();
        }

        let age_sum: u32 = profiles
            .iter()
            .map(|p| u32::from(p.age.unwrap_or(0)))
            .sum();
        let countries: HashSet<&str> = profiles.iter().map(|p| p.country.as_str()).collect();

        Self {
            total_profiles: profiles.len(),
            average_age: age_sum / profiles.len() as u32,
            unique_countries: countries.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(id: &str, age: Option<u8>, country: &str) -> Profile {
        Profile {
            id: ProfileId::from(id),
            full_name: format!("Person {id}"),
            email: format!("{id}@example.com"),
            age,
            city: "Springfield".to_string(),
            state: "IL".to_string(),
            country: country.to_string(),
        }
    }

    #[test]
    fn test_generated_ids_are_unique() {
        let a = ProfileId::generate();
        let b = ProfileId::generate();
        assert_ne!(a, b);
        assert!(!a.as_str().is_empty());
    }

    #[test]
    fn test_apply_patch_keeps_unset_fields() {
        let mut draft = Draft {
            full_name: "Ann".to_string(),
            email: "a@x.com".to_string(),
            age: Some(30),
            ..Draft::default()
        };

        draft.apply(DraftPatch::new().city("Oslo"));

        assert_eq!(draft.full_name, "Ann");
        assert_eq!(draft.email, "a@x.com");
        assert_eq!(draft.age, Some(30));
        assert_eq!(draft.city, "Oslo");
    }

    #[test]
    fn test_apply_patch_can_clear_age() {
        let mut draft = Draft {
            age: Some(42),
            ..Draft::default()
        };
        draft.apply(DraftPatch::new().age(None));
        assert_eq!(draft.age, None);
    }

    #[test]
    fn test_required_fields_not_trimmed() {
        let draft = Draft {
            full_name: " ".to_string(),
            email: " ".to_string(),
            ..Draft::default()
        };
        assert!(draft.has_required_fields());
        assert!(!Draft::new().has_required_fields());
    }

    #[test]
    fn test_draft_profile_conversion_preserves_fields() {
        let original = profile("p1", Some(25), "Norway");
        let draft = original.to_draft();
        let rebuilt = draft.into_profile(ProfileId::from("p1"));
        assert_eq!(rebuilt, original);
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(ProfileStats::from_profiles(&[]), ProfileStats::default());
    }

    #[test]
    fn test_stats_floor_average_and_unique_countries() {
        let profiles = vec![
            profile("1", Some(30), "Norway"),
            profile("2", Some(25), "Norway"),
            profile("3", None, "Chile"),
        ];
        let stats = ProfileStats::from_profiles(&profiles);
        assert_eq!(stats.total_profiles, 3);
        // (30 + 25 + 0) / 3 = 18.33
        assert_eq!(stats.average_age, 18);
        assert_eq!(stats.unique_countries, 2);
    }

    #[test]
    fn test_location_format() {
        let p = profile("1", None, "USA");
        assert_eq!(p.location(), "Springfield, IL, USA");
    }
}
