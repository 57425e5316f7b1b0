//! Application state definitions
//!
//! Contains the state types for the interactive editor: AppState, AppMode
//! and the bundle checklist dialog.

use crate::config::HostConfiguration;
use crate::selector::SelectionState;
use crate::types::Category;

/// Bundle checklist dialog state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BundleDialogState {
    /// Selector session backing the checklist
    pub session: SelectionState,
    /// Focused checklist row
    pub cursor: usize,
}

impl BundleDialogState {
    pub fn new(session: SelectionState) -> Self {
        Self { session, cursor: 0 }
    }

    pub fn focused(&self) -> Category {
        Category::from_index(self.cursor).unwrap_or(Category::AdsMalware)
    }

    pub fn move_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_down(&mut self) {
        if self.cursor + 1 < Category::COUNT {
            self.cursor += 1;
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current application mode
    pub mode: AppMode,
    /// Host configuration being edited
    pub config: HostConfiguration,
    /// Highlighted row in the host list
    pub list_selection: usize,
    /// Open checklist, if any
    pub bundle_dialog: Option<BundleDialogState>,
    /// Status message for user feedback
    pub status_message: String,
    /// Whether the status message reports a failure
    pub status_is_error: bool,
    /// Whether help overlay is visible
    pub help_visible: bool,
}

/// Application operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AppMode {
    /// Host list - entry point
    HostList,
    /// Bundle checklist dialog over the host list
    BundleDialog,
}

impl AppState {
    pub fn new(config: HostConfiguration) -> Self {
        Self {
            mode: AppMode::HostList,
            config,
            list_selection: 0,
            bundle_dialog: None,
            status_message: "Press B to choose a blocklist bundle".to_string(),
            status_is_error: false,
            help_visible: false,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = true;
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HostConfiguration::default())
    }
}
