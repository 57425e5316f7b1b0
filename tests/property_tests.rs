//! Property-Based Tests for hostsbundle
//!
//! Uses proptest for testing invariants over arbitrary inputs
//!
//! These tests verify:
//! - Toggle sequences never leave the checklist inconsistent
//! - Every reachable checklist maps to a catalog entry
//! - Commit inserts or overwrites, never both
//! - Category string round-trips

use hostsbundle::{
    Catalog, Category, EntryState, HostConfiguration, HostEntry, Persistence, Result,
    SelectionState, Selector, SelectorVector,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

// =============================================================================
// Strategies
// =============================================================================

fn category_strategy() -> impl Strategy<Value = Category> {
    prop_oneof![
        Just(Category::AdsMalware),
        Just(Category::Fakenews),
        Just(Category::Gambling),
        Just(Category::Porn),
        Just(Category::Social),
    ]
}

fn state_strategy() -> impl Strategy<Value = EntryState> {
    prop_oneof![
        Just(EntryState::Deny),
        Just(EntryState::Allow),
        Just(EntryState::Ignore),
    ]
}

/// A host list mixing custom sources with catalog URLs
fn hosts_strategy() -> impl Strategy<Value = Vec<HostEntry>> {
    let catalog_len = Catalog::stevenblack().len();
    prop::collection::vec(
        (prop::option::of(0..catalog_len), state_strategy(), "[a-z]{1,8}"),
        0..8,
    )
    .prop_map(|rows| {
        let catalog = Catalog::stevenblack();
        rows.into_iter()
            .map(|(index, state, name)| match index.and_then(|i| catalog.get(i)) {
                Some(c) => HostEntry::new(&c.title, &c.url, state),
                None => HostEntry::new(&name, format!("https://lists.example.org/{name}"), state),
            })
            .collect()
    })
}

struct NullStore;

impl Persistence for NullStore {
    fn persist(&mut self, _config: &HostConfiguration) -> Result<()> {
        Ok(())
    }
}

// =============================================================================
// Toggle Property Tests
// =============================================================================

proptest! {
    /// Any toggle sequence keeps master and categories consistent
    #[test]
    fn toggles_keep_checklist_consistent(
        events in prop::collection::vec((category_strategy(), any::<bool>()), 0..32)
    ) {
        let catalog = Catalog::stevenblack();
        let mut selector = Selector::open(&catalog, &[]);
        for (category, checked) in events {
            let vector = selector.toggle(category, checked);
            prop_assert!(vector.is_consistent(), "inconsistent after {}: {}", category, vector);
            prop_assert_eq!(vector, selector.vector());
        }
    }

    /// Every reachable non-empty checklist has a catalog entry
    #[test]
    fn reachable_checklist_resolves_to_deny(
        events in prop::collection::vec((category_strategy(), any::<bool>()), 1..32)
    ) {
        let catalog = Catalog::stevenblack();
        let mut selector = Selector::open(&catalog, &[]);
        for (category, checked) in events {
            selector.toggle(category, checked);
        }

        let target = selector.target_entry();
        if selector.vector().is_empty() {
            prop_assert_eq!(target.state, EntryState::Ignore);
            prop_assert_eq!(target.location, catalog.default_combination().url.clone());
        } else {
            prop_assert_eq!(target.state, EntryState::Deny);
            let index = catalog.find_by_url(&target.location);
            prop_assert!(index.is_some());
            prop_assert_eq!(catalog.get(index.unwrap()).unwrap().selector, selector.vector());
        }
    }
}

// =============================================================================
// Load / Commit Property Tests
// =============================================================================

proptest! {
    /// Loading a single DENY entry and committing it changes nothing
    #[test]
    fn deny_round_trip_is_idempotent(index in 0usize..16) {
        let catalog = Catalog::stevenblack();
        let c = catalog.get(index).unwrap();
        let original = HostConfiguration::new(vec![HostEntry::new(&c.title, &c.url, EntryState::Deny)]);
        let mut config = original.clone();

        let selector = Selector::open(&catalog, &config.hosts);
        prop_assert_eq!(selector.vector(), c.selector);
        prop_assert_eq!(selector.matched_index(), Some(0));

        selector
            .commit(&mut config, &mut |_: &[HostEntry]| {}, &mut NullStore)
            .unwrap();
        prop_assert_eq!(config, original);
    }

    /// The loaded checklist is always consistent and the position is in range
    #[test]
    fn load_yields_valid_state(hosts in hosts_strategy()) {
        let catalog = Catalog::stevenblack();
        let state = SelectionState::load(&catalog, &hosts);
        prop_assert!(state.vector.is_consistent());
        if let Some(i) = state.matched_index {
            prop_assert!(i < hosts.len());
            prop_assert!(catalog.find_by_url(&hosts[i].location).is_some());
        } else {
            prop_assert_eq!(state.vector, SelectorVector::empty());
        }
    }

    /// Commit inserts at the front or overwrites in place, never both
    #[test]
    fn commit_inserts_or_updates(
        hosts in hosts_strategy(),
        events in prop::collection::vec((category_strategy(), any::<bool>()), 0..8)
    ) {
        let catalog = Catalog::stevenblack();
        let mut config = HostConfiguration::new(hosts.clone());
        let mut selector = Selector::open(&catalog, &config.hosts);
        let matched = selector.matched_index();
        for (category, checked) in events {
            selector.toggle(category, checked);
        }
        let target = selector.target_entry();

        let outcome = selector
            .commit(&mut config, &mut |_: &[HostEntry]| {}, &mut NullStore)
            .unwrap();

        match matched {
            None => {
                prop_assert!(outcome.inserted);
                prop_assert_eq!(outcome.index, 0);
                prop_assert_eq!(config.hosts.len(), hosts.len() + 1);
                prop_assert_eq!(&config.hosts[1..], &hosts[..]);
            }
            Some(k) => {
                prop_assert!(!outcome.inserted);
                prop_assert_eq!(outcome.index, k);
                prop_assert_eq!(config.hosts.len(), hosts.len());
                for (i, (after, before)) in config.hosts.iter().zip(&hosts).enumerate() {
                    if i != k {
                        prop_assert_eq!(after, before);
                    }
                }
            }
        }
        prop_assert_eq!(&config.hosts[outcome.index], &target);
    }
}

// =============================================================================
// Category Enum Property Tests
// =============================================================================

proptest! {
    /// Category: to_string → parse round-trip is identity
    #[test]
    fn category_roundtrip(category in category_strategy()) {
        let s = category.to_string();
        let parsed: Category = s.parse().expect("Should parse");
        prop_assert_eq!(category, parsed);
    }
}

#[test]
fn category_iteration_follows_checklist_order() {
    for (i, category) in Category::iter().enumerate() {
        assert_eq!(category.index(), i);
    }
}
