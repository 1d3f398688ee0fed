//! Property-based tests for the profile store
//!
//! Tests invariants:
//! - Creating from a creatable draft adds exactly one profile
//! - Creating from an incomplete draft changes nothing
//! - Ids are unique across any sequence of creates
//! - Load-then-update without edits is the identity
//! - Delete removes exactly the named profile

use std::collections::HashSet;

use proptest::prelude::*;

use crate::core::profile::{Draft, ProfileStats, ProfileStore};
use crate::tests::common::{arb_creatable_draft, arb_draft, fill_draft, seeded_store};

proptest! {
    /// A creatable draft always becomes exactly one new profile with the
    /// draft's field values, and the draft is reset afterwards.
    #[test]
    fn create_appends_one_profile(drafts in proptest::collection::vec(arb_creatable_draft(), 0..5), next in arb_creatable_draft()) {
        let mut store = ProfileStore::new();
        for d in drafts {
            fill_draft(&mut store, d);
            store.create_profile();
        }
        let before = store.len();

        fill_draft(&mut store, next.clone());
        let id = store.create_profile();

        prop_assert!(id.is_some());
        prop_assert_eq!(store.len(), before + 1);
        let created = store.profiles().last().unwrap();
        prop_assert_eq!(created.to_draft(), next);
        prop_assert_eq!(store.draft(), &Draft::default());
        prop_assert!(!store.is_editing());
    }

    /// Without a name or email, create is a no-op.
    #[test]
    fn create_without_required_fields_is_noop(draft in arb_draft()) {
        prop_assume!(draft.full_name.is_empty() || draft.email.is_empty());

        let mut store = ProfileStore::new();
        fill_draft(&mut store, draft.clone());

        prop_assert!(store.create_profile().is_none());
        prop_assert!(store.is_empty());
        prop_assert_eq!(store.draft(), &draft);
    }

    #[test]
    fn ids_are_unique(drafts in proptest::collection::vec(arb_creatable_draft(), 1..20)) {
        let mut store = ProfileStore::new();
        for d in drafts {
            fill_draft(&mut store, d);
            store.create_profile();
        }

        let ids: HashSet<_> = store.profiles().iter().map(|p| p.id.clone()).collect();
        prop_assert_eq!(ids.len(), store.len());
    }

    /// Loading a profile and immediately updating it leaves the list unchanged.
    #[test]
    fn load_then_update_is_identity(
        drafts in proptest::collection::vec(arb_creatable_draft(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = ProfileStore::new();
        for d in drafts {
            fill_draft(&mut store, d);
            store.create_profile();
        }
        let before = store.profiles().to_vec();
        let target = before[pick.index(before.len())].id.clone();

        prop_assert!(store.load_profile_for_edit(&target));
        prop_assert_eq!(store.update_profile(), Some(target));

        prop_assert_eq!(store.profiles(), before.as_slice());
        prop_assert!(!store.is_editing());
        prop_assert_eq!(store.draft(), &Draft::default());
    }

    /// Delete removes the named profile and keeps the others in order.
    #[test]
    fn delete_removes_only_target(
        drafts in proptest::collection::vec(arb_creatable_draft(), 1..8),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = ProfileStore::new();
        for d in drafts {
            fill_draft(&mut store, d);
            store.create_profile();
        }
        let before = store.profiles().to_vec();
        let target = before[pick.index(before.len())].id.clone();

        let removed = store.delete_profile(&target);

        prop_assert_eq!(removed.map(|p| p.id), Some(target.clone()));
        let expected: Vec<_> = before.into_iter().filter(|p| p.id != target).collect();
        prop_assert_eq!(store.profiles(), expected.as_slice());
        prop_assert!(store.get_profile(&target).is_none());
    }

    /// Stats agree with a direct recount of the list.
    #[test]
    fn stats_match_profiles(drafts in proptest::collection::vec(arb_creatable_draft(), 0..10)) {
        let mut store = ProfileStore::new();
        for d in drafts {
            fill_draft(&mut store, d);
            store.create_profile();
        }

        let stats = store.stats();
        prop_assert_eq!(stats, ProfileStats::from_profiles(store.profiles()));
        prop_assert_eq!(stats.total_profiles, store.len());
        prop_assert!(stats.average_age <= 150);
        prop_assert!(stats.unique_countries <= store.len());
    }
}

proptest! {
    /// Deleting the profile under edit ends the edit session; deleting any
    /// other profile leaves it alone.
    #[test]
    fn delete_during_edit_only_resets_for_target(n in 2usize..8, edit in any::<prop::sample::Index>(), del in any::<prop::sample::Index>()) {
        let mut store = seeded_store(n);
        let edit_id = store.profiles()[edit.index(n)].id.clone();
        let del_id = store.profiles()[del.index(n)].id.clone();

        store.load_profile_for_edit(&edit_id);
        store.delete_profile(&del_id);

        if edit_id == del_id {
            prop_assert!(!store.is_editing());
            prop_assert_eq!(store.draft(), &Draft::default());
        } else {
            prop_assert_eq!(store.editing_id(), Some(&edit_id));
            prop_assert_eq!(store.draft(), &store.get_profile(&edit_id).unwrap().to_draft());
        }
    }
}
