//! Per-step field validation.
//!
//! These checks gate movement between wizard pages. They operate on the raw
//! text the user typed, so the age check sees exactly what is in the field.

use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

/// Youngest accepted age.
pub const MIN_AGE: u8 = 1;
/// Oldest accepted age.
pub const MAX_AGE: u8 = 150;

/// Loose email shape: something@something.tld, no whitespace.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex")
});

/// Every input field across the wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FullName,
    Email,
    Age,
    City,
    State,
    Country,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::FullName => "Full Name",
            Field::Email => "Email Address",
            Field::Age => "Age",
            Field::City => "City",
            Field::State => "State / Province",
            Field::Country => "Country",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::FullName => "John Doe",
            Field::Email => "john@example.com",
            Field::Age => "25",
            Field::City => "New York",
            Field::State => "NY",
            Field::Country => "United States",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single field's validation failure. The display text is shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Full name is required")]
    FullNameRequired,

    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email")]
    InvalidEmail,

    #[error("Age is required")]
    AgeRequired,

    #[error("Please enter a valid age")]
    InvalidAge,

    #[error("City is required")]
    CityRequired,

    #[error("State is required")]
    StateRequired,

    #[error("Country is required")]
    CountryRequired,
}

/// Validation outcome for one step: at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<Field, FieldError>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: Field, error: FieldError) {
        self.errors.insert(field, error);
    }

    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    pub fn clear(&mut self, field: Field) {
        self.errors.remove(&field);
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldError)> {
        self.errors.iter().map(|(f, e)| (*f, e))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Parse an age as typed. Only whole numbers in `MIN_AGE..=MAX_AGE` are accepted.
pub fn parse_age(text: &str) -> Option<u8> {
    text.trim()
        .parse::<u16>()
        .ok()
        .filter(|age| (u16::from(MIN_AGE)..=u16::from(MAX_AGE)).contains(age))
        .and_then(|age| u8::try_from(age).ok())
}

/// Step 1 gate: name, email and age.
pub fn validate_basic_info(full_name: &str, email: &str, age_text: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if full_name.trim().is_empty() {
        errors.insert(Field::FullName, FieldError::FullNameRequired);
    }

    if email.trim().is_empty() {
        errors.insert(Field::Email, FieldError::EmailRequired);
    } else if !is_valid_email(email) {
        errors.insert(Field::Email, FieldError::InvalidEmail);
    }

    if age_text.trim().is_empty() {
        errors.insert(Field::Age, FieldError::AgeRequired);
    } else if parse_age(age_text).is_none() {
        errors.insert(Field::Age, FieldError::InvalidAge);
    }

    errors
}

/// Step 2 gate: every address field is required.
pub fn validate_address(city: &str, state: &str, country: &str) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if city.trim().is_empty() {
        errors.insert(Field::City, FieldError::CityRequired);
    }
    if state.trim().is_empty() {
        errors.insert(Field::State, FieldError::StateRequired);
    }
    if country.trim().is_empty() {
        errors.insert(Field::Country, FieldError::CountryRequired);
    }

    errors
}
