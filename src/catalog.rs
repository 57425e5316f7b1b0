//! Bundle catalog
//!
//! An immutable, ordered table of [`Combination`]s. Each combination is one
//! published hosts bundle: the master "ads and malware" list plus some subset
//! of the four optional categories.
//!
//! # Built-in table
//!
//! | Index | Categories                      |
//! |-------|---------------------------------|
//! | 0     | (master only, the default)      |
//! | 1-4   | one category                    |
//! | 5-10  | two categories                  |
//! | 11-14 | three categories                |
//! | 15    | fakenews + gambling + porn + social |
//!
//! # Design
//!
//! - **Injectable**: `Catalog::new` accepts any table that satisfies the
//!   catalog invariants, so tests can run against a smaller one
//! - **Value lookups**: vectors compare element-wise, never by identity
//! - **Infallible lookups**: a miss is `None`, callers own the fallback

use crate::error::{BundleError, Result};
use crate::types::Category;
use crate::types::Category::{Fakenews, Gambling, Porn, Social};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use tracing::debug;

// ============================================================================
// Selector Vector
// ============================================================================

/// Checklist state: one flag per [`Category`], indexed by `Category::index`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectorVector([bool; Category::COUNT]);

impl SelectorVector {
    pub const fn new(bits: [bool; Category::COUNT]) -> Self {
        Self(bits)
    }

    /// Every row unchecked
    pub const fn empty() -> Self {
        Self([false; Category::COUNT])
    }

    /// Only the master row checked
    pub const fn master_only() -> Self {
        Self([true, false, false, false, false])
    }

    /// Master row plus the given categories
    pub fn with_categories(categories: &[Category]) -> Self {
        let mut vector = Self::master_only();
        for &category in categories {
            vector.set(category, true);
        }
        vector
    }

    pub fn get(&self, category: Category) -> bool {
        self.0[category.index()]
    }

    /// Raw write, no constraint applied. The selector owns the constraint.
    pub fn set(&mut self, category: Category, value: bool) {
        self.0[category.index()] = value;
    }

    pub fn has_master(&self) -> bool {
        self.get(Category::AdsMalware)
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|&bit| !bit)
    }

    /// Checked non-master categories, in catalog order
    pub fn active_categories(&self) -> Vec<Category> {
        Category::CATEGORIES
            .iter()
            .copied()
            .filter(|&c| self.get(c))
            .collect()
    }

    /// Whether the master/category coupling holds: an unchecked master
    /// implies no category is checked.
    pub fn is_consistent(&self) -> bool {
        self.has_master() || self.active_categories().is_empty()
    }
}

impl fmt::Display for SelectorVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let names: Vec<String> = (0..Category::COUNT)
            .filter(|&i| self.0[i])
            .filter_map(Category::from_index)
            .map(|c| c.to_string())
            .collect();
        write!(f, "{}", names.join("+"))
    }
}

// ============================================================================
// Combination
// ============================================================================

/// One catalog row: the selector vector that picks it, where the bundle is
/// published, and how it is labelled in the host list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combination {
    pub selector: SelectorVector,
    pub url: String,
    pub title: String,
}

impl Combination {
    pub fn new(selector: SelectorVector, url: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            selector,
            url: url.into(),
            title: title.into(),
        }
    }
}

// ============================================================================
// Built-in StevenBlack table
// ============================================================================

const STEVENBLACK_BASE: &str = "https://raw.githubusercontent.com/StevenBlack/hosts/master";
const STEVENBLACK_TITLE: &str = "StevenBlack's hosts file (includes all others)";

/// Category subsets in published order. Order is significant: index 0 is the
/// default and the URL path joins names in this order.
const STEVENBLACK_BUNDLES: [&[Category]; 16] = [
    &[],
    &[Fakenews],
    &[Gambling],
    &[Porn],
    &[Social],
    &[Fakenews, Gambling],
    &[Fakenews, Porn],
    &[Fakenews, Social],
    &[Gambling, Porn],
    &[Gambling, Social],
    &[Porn, Social],
    &[Fakenews, Gambling, Porn],
    &[Fakenews, Gambling, Social],
    &[Fakenews, Porn, Social],
    &[Gambling, Porn, Social],
    &[Fakenews, Gambling, Porn, Social],
];

fn stevenblack_combination(categories: &[Category]) -> Combination {
    let names: Vec<String> = categories.iter().map(|c| c.to_string()).collect();

    let url = if names.is_empty() {
        format!("{STEVENBLACK_BASE}/hosts")
    } else {
        format!("{STEVENBLACK_BASE}/alternates/{}/hosts", names.join("-"))
    };

    let mut title = STEVENBLACK_TITLE.to_string();
    for name in &names {
        title.push_str(" + ");
        title.push_str(name);
    }

    Combination::new(SelectorVector::with_categories(categories), url, title)
}

// ============================================================================
// Catalog
// ============================================================================

/// Immutable, ordered table of combinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<Combination>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::stevenblack()
    }
}

impl Catalog {
    /// Index of the master-only fallback entry
    pub const DEFAULT_INDEX: usize = 0;

    /// The built-in StevenBlack hosts table (16 entries)
    pub fn stevenblack() -> Self {
        Self {
            entries: STEVENBLACK_BUNDLES
                .iter()
                .map(|categories| stevenblack_combination(categories))
                .collect(),
        }
    }

    /// Build a catalog from an injected table.
    ///
    /// The table may be smaller than the built-in one, but it must still
    /// satisfy the catalog invariants:
    /// - at least one entry, and the first one is master-only
    /// - every selector has the master bit set
    /// - URLs are unique and selectors are unique
    pub fn new(entries: Vec<Combination>) -> Result<Self> {
        let Some(first) = entries.first() else {
            return Err(BundleError::catalog("catalog must contain at least one entry"));
        };
        if first.selector != SelectorVector::master_only() {
            return Err(BundleError::catalog(format!(
                "first entry must be master-only, found {}",
                first.selector
            )));
        }

        Self::check_entries(&entries)?;
        Ok(Self { entries })
    }

    fn check_entries(entries: &[Combination]) -> Result<()> {
        let mut urls = HashSet::new();
        let mut selectors = HashSet::new();
        for (i, entry) in entries.iter().enumerate() {
            if !entry.selector.has_master() {
                return Err(BundleError::catalog(format!(
                    "entry {} ({}) does not set the master selector",
                    i, entry.url
                )));
            }
            if !urls.insert(entry.url.as_str()) {
                return Err(BundleError::catalog(format!("duplicate url: {}", entry.url)));
            }
            if !selectors.insert(entry.selector) {
                return Err(BundleError::catalog(format!(
                    "duplicate selector {} at entry {}",
                    entry.selector, i
                )));
            }
        }
        Ok(())
    }

    /// Load a catalog table from a JSON array of combinations
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;
        let entries: Vec<Combination> = serde_json::from_str(&content)?;
        debug!("Loaded {} catalog entries from {:?}", entries.len(), path);
        Self::new(entries)
    }

    /// Position of the entry published at `url` (exact match)
    pub fn find_by_url(&self, url: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.url == url)
    }

    /// Position of the entry whose selector equals `vector` element-wise
    pub fn find_by_vector(&self, vector: &SelectorVector) -> Option<usize> {
        self.entries.iter().position(|c| c.selector == *vector)
    }

    pub fn default_index(&self) -> usize {
        Self::DEFAULT_INDEX
    }

    pub fn default_combination(&self) -> &Combination {
        &self.entries[Self::DEFAULT_INDEX]
    }

    pub fn get(&self, index: usize) -> Option<&Combination> {
        self.entries.get(index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combination> {
        self.entries.iter()
    }

    /// True when every subset of the four categories has exactly one entry
    pub fn is_complete(&self) -> bool {
        let subsets = 1usize << Category::CATEGORIES.len();
        self.entries.len() == subsets
            && (0..subsets).all(|mask| {
                let categories: Vec<Category> = Category::CATEGORIES
                    .iter()
                    .enumerate()
                    .filter(|(bit, _)| mask & (1 << bit) != 0)
                    .map(|(_, &c)| c)
                    .collect();
                self.find_by_vector(&SelectorVector::with_categories(&categories))
                    .is_some()
            })
    }
}
