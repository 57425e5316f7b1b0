//! Bundle selector: one edit session over the host list.
//!
//! A session is opened against the current list (`Selector::open`), mutated
//! by checklist toggles, and consumed exactly once by `Selector::commit`.
//! Dropping a selector without committing writes nothing.
//!
//! # Loading
//!
//! The host list may hold several entries whose location is a catalog URL
//! (left behind by earlier edits). The list is scanned from the last entry to
//! the first. Every catalog hit records its position; a `Deny` hit loads its
//! selectors and ends the scan, any other state clears the selectors and the
//! scan continues. Without a `Deny` hit the recorded position is therefore
//! the first catalog entry in list order.
//!
//! # Committing
//!
//! The selectors are looked up in the catalog. A hit writes that combination
//! as `Deny`; a miss (only possible with every row unchecked) writes the
//! default combination as `Ignore`. The entry replaces the one at the loaded
//! position, or is inserted at the front when there was none.

use crate::catalog::{Catalog, SelectorVector};
use crate::config::{HostConfiguration, HostEntry};
use crate::error::Result;
use crate::types::{Category, EntryState};
use tracing::{debug, info, warn};

// ============================================================================
// Collaborator seams
// ============================================================================

/// Notified once per commit, after the list has been mutated.
pub trait ListObserver {
    fn list_changed(&mut self, hosts: &[HostEntry]);
}

impl<F> ListObserver for F
where
    F: FnMut(&[HostEntry]),
{
    fn list_changed(&mut self, hosts: &[HostEntry]) {
        self(hosts)
    }
}

/// Durable storage for the whole host configuration.
///
/// Called once per commit, after the list has been mutated. Errors are
/// returned to the caller of `commit` unchanged.
pub trait Persistence {
    fn persist(&mut self, config: &HostConfiguration) -> Result<()>;
}

// ============================================================================
// Session state
// ============================================================================

/// Working state of one edit session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    /// Current checklist rows
    pub vector: SelectorVector,
    /// Position of the managed entry in the host list, if one exists
    pub matched_index: Option<usize>,
}

impl SelectionState {
    /// Derive the initial state from a host list
    pub fn load(catalog: &Catalog, hosts: &[HostEntry]) -> Self {
        let mut state = Self::default();

        for (i, entry) in hosts.iter().enumerate().rev() {
            let Some(index) = catalog.find_by_url(&entry.location) else {
                continue;
            };
            state.matched_index = Some(i);

            if entry.state.is_active() {
                // Table rows are Copy, so this never aliases the catalog
                if let Some(combination) = catalog.get(index) {
                    state.vector = combination.selector;
                }
                debug!("Active bundle at position {}: {}", i, state.vector);
                return state;
            }

            state.vector = SelectorVector::empty();
            debug!(
                "Inactive bundle at position {} ({}), continuing scan",
                i, entry.state
            );
        }

        state
    }
}

/// What a commit wrote, and where
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitOutcome {
    /// Position of the managed entry after the commit
    pub index: usize,
    /// True when a new entry was inserted at the front
    pub inserted: bool,
    pub state: EntryState,
    pub location: String,
}

// ============================================================================
// Selector
// ============================================================================

/// One checklist session over a host list
#[derive(Debug)]
pub struct Selector<'a> {
    catalog: &'a Catalog,
    state: SelectionState,
}

impl<'a> Selector<'a> {
    /// Open a session: compute the initial checklist from `hosts`
    pub fn open(catalog: &'a Catalog, hosts: &[HostEntry]) -> Self {
        let state = SelectionState::load(catalog, hosts);
        info!(
            "Opened bundle selector: selectors={}, managed entry={:?}",
            state.vector, state.matched_index
        );
        Self { catalog, state }
    }

    /// Resume a session from an explicit state
    pub fn with_state(catalog: &'a Catalog, state: SelectionState) -> Self {
        Self { catalog, state }
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    pub fn vector(&self) -> SelectorVector {
        self.state.vector
    }

    pub fn matched_index(&self) -> Option<usize> {
        self.state.matched_index
    }

    /// Apply one checklist event and return the corrected rows.
    ///
    /// Unchecking the master row unchecks every category. Checking a
    /// category checks the master row. The returned vector is the full
    /// state the checklist must show afterwards.
    pub fn toggle(&mut self, category: Category, checked: bool) -> SelectorVector {
        let vector = &mut self.state.vector;
        vector.set(category, checked);

        if category.is_master() && !checked {
            for c in Category::CATEGORIES {
                vector.set(c, false);
            }
        } else if !category.is_master() && checked {
            vector.set(Category::AdsMalware, true);
        }

        debug!("Toggled {} -> {}: selectors={}", category, checked, vector);
        *vector
    }

    /// Index-based variant of [`Selector::toggle`].
    ///
    /// Returns `None`, leaving the state untouched, for rows outside the
    /// checklist.
    pub fn toggle_index(&mut self, index: usize, checked: bool) -> Option<SelectorVector> {
        Category::from_index(index).map(|category| self.toggle(category, checked))
    }

    /// The entry a commit would write for the current rows
    pub fn target_entry(&self) -> HostEntry {
        match self.catalog.find_by_vector(&self.state.vector) {
            Some(index) => {
                let combination = self
                    .catalog
                    .get(index)
                    .unwrap_or_else(|| self.catalog.default_combination());
                HostEntry::new(&combination.title, &combination.url, EntryState::Deny)
            }
            None => {
                let default = self.catalog.default_combination();
                HostEntry::new(&default.title, &default.url, EntryState::Ignore)
            }
        }
    }

    /// Merge the target entry into `hosts` without notifying anyone.
    ///
    /// The entry is built in full before the list is touched, and the list
    /// is changed by a single insert or a single assignment.
    pub fn apply(&self, hosts: &mut Vec<HostEntry>) -> CommitOutcome {
        let entry = self.target_entry();
        let state = entry.state;
        let location = entry.location.clone();

        let slot = match self.state.matched_index {
            Some(i) if i < hosts.len() => Some(i),
            Some(i) => {
                warn!(
                    "Managed entry position {} is past the end of a {}-entry list, inserting instead",
                    i,
                    hosts.len()
                );
                None
            }
            None => None,
        };

        match slot {
            Some(i) => {
                hosts[i] = entry;
                CommitOutcome {
                    index: i,
                    inserted: false,
                    state,
                    location,
                }
            }
            None => {
                hosts.insert(0, entry);
                CommitOutcome {
                    index: 0,
                    inserted: true,
                    state,
                    location,
                }
            }
        }
    }

    /// Finish the session: merge, notify the observer once, persist once.
    pub fn commit(
        self,
        config: &mut HostConfiguration,
        observer: &mut dyn ListObserver,
        persistence: &mut dyn Persistence,
    ) -> Result<CommitOutcome> {
        let outcome = self.apply(&mut config.hosts);
        info!(
            "{} managed entry at position {} as {} ({})",
            if outcome.inserted { "Inserted" } else { "Updated" },
            outcome.index,
            outcome.state,
            outcome.location
        );

        observer.list_changed(&config.hosts);
        persistence.persist(config)?;
        Ok(outcome)
    }
}
