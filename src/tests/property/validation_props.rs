//! Property-based tests for wizard field validation
//!
//! Tests invariants:
//! - Emails containing whitespace are never accepted
//! - Ages parse only inside 1..=150
//! - Blank fields always produce an error

use proptest::prelude::*;

use crate::core::wizard::{
    is_valid_email, parse_age, validate_address, validate_basic_info, Field, MAX_AGE, MIN_AGE,
};

// ============================================================================
// Strategies for generating test inputs
// ============================================================================

/// Well-formed addresses of the shape `local@domain.tld`.
fn arb_email() -> impl Strategy<Value = String> {
    "[a-z0-9._+-]{1,12}@[a-z0-9-]{1,12}\\.[a-z]{2,6}"
}

/// Strings made only of whitespace, including the empty string.
fn arb_blank() -> impl Strategy<Value = String> {
    "[ \t]{0,5}"
}

proptest! {
    #[test]
    fn well_formed_emails_are_accepted(email in arb_email()) {
        prop_assert!(is_valid_email(&email));
    }

    #[test]
    fn emails_with_whitespace_are_rejected(
        email in arb_email(),
        pos in any::<prop::sample::Index>(),
        ws in prop_oneof![Just(' '), Just('\t'), Just('\n')],
    ) {
        let mut chars: Vec<char> = email.chars().collect();
        chars.insert(pos.index(chars.len() + 1), ws);
        let broken: String = chars.into_iter().collect();

        prop_assert!(!is_valid_email(&broken));
    }

    #[test]
    fn emails_without_at_are_rejected(s in "[a-z0-9.]{0,30}") {
        prop_assert!(!is_valid_email(&s));
    }

    #[test]
    fn age_in_range_parses(age in MIN_AGE..=MAX_AGE) {
        prop_assert_eq!(parse_age(&age.to_string()), Some(age));
    }

    #[test]
    fn age_out_of_range_rejected(age in prop_oneof![0u32..MIN_AGE as u32, (MAX_AGE as u32 + 1)..100_000]) {
        prop_assert_eq!(parse_age(&age.to_string()), None);
    }

    #[test]
    fn non_numeric_age_rejected(s in "[a-zA-Z]{1,6}") {
        prop_assert_eq!(parse_age(&s), None);
    }

    #[test]
    fn blank_basic_fields_always_error(name in arb_blank(), age in arb_blank()) {
        let errors = validate_basic_info(&name, "a@x.com", &age);
        prop_assert!(errors.get(Field::FullName).is_some());
        prop_assert!(errors.get(Field::Age).is_some());
        prop_assert!(errors.get(Field::Email).is_none());
    }

    #[test]
    fn blank_address_fields_always_error(city in arb_blank(), state in "[A-Z]{2}", country in arb_blank()) {
        let errors = validate_address(&city, &state, &country);
        prop_assert_eq!(errors.len(), 2);
        prop_assert!(errors.get(Field::State).is_none());
    }

    #[test]
    fn complete_basic_info_is_valid(name in "[A-Z][a-z]{1,10}", email in arb_email(), age in MIN_AGE..=MAX_AGE) {
        prop_assert!(validate_basic_info(&name, &email, &age.to_string()).is_valid());
    }
}
