//! hostsbundle library
//!
//! Keeps a host configuration pointed at the right StevenBlack hosts bundle:
//! the catalog of known combinations, the selector that maps checkboxes to a
//! single managed entry, persistence, and the terminal editor around them.

pub mod app;
pub mod catalog;
pub mod cli;
pub mod components;
pub mod config;
pub mod error;
pub mod selector;
pub mod store;
pub mod theme;
pub mod types;
pub mod ui;

// Re-export main types for convenience
pub use catalog::{Catalog, Combination, SelectorVector};
pub use config::{HostConfiguration, HostEntry};
pub use error::{BundleError, Result};
pub use selector::{CommitOutcome, ListObserver, Persistence, SelectionState, Selector};
pub use store::JsonFileStore;
pub use types::{Category, EntryState};
