//! Application module
//!
//! Contains the interactive editor: the host list, the bundle checklist and
//! the event loop that drives them.
//!
//! # Module Structure
//! - `state` - Application state types (AppState, AppMode, BundleDialogState)
//! - Main module - App struct and event loop

mod state;

// Re-export state types for external use
pub use state::{AppMode, AppState, BundleDialogState};

use crate::catalog::Catalog;
use crate::components::keybindings::{KeyAction, KeybindingContext};
use crate::config::{HostConfiguration, HostEntry};
use crate::error::Result;
use crate::selector::{Persistence, Selector};
use crate::ui::UiRenderer;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tracing::{debug, error, info};

/// Main application struct
pub struct App {
    state: AppState,
    catalog: Catalog,
    persistence: Box<dyn Persistence>,
    ui_renderer: UiRenderer,
    /// Keybinding context for key dispatch and navigation hints
    keybinding_context: KeybindingContext,
}

impl App {
    /// Create a new application instance
    pub fn new(
        config: HostConfiguration,
        catalog: Catalog,
        persistence: Box<dyn Persistence>,
    ) -> Self {
        info!("Creating editor over {} host entries", config.hosts.len());
        Self {
            state: AppState::new(config),
            catalog,
            persistence,
            ui_renderer: UiRenderer::new(),
            keybinding_context: KeybindingContext::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        info!("Starting main application loop");

        loop {
            terminal.draw(|f| {
                self.ui_renderer
                    .render(f, &self.state, &self.catalog, &self.keybinding_context)
            })?;

            if event::poll(Duration::from_millis(250))? {
                if let Event::Key(key_event) = event::read()? {
                    if key_event.kind == KeyEventKind::Press && self.handle_key_event(key_event) {
                        break;
                    }
                }
            }
        }

        info!("Leaving main application loop");
        Ok(())
    }

    /// Handle keyboard input events. Returns true when exit is requested.
    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> bool {
        let Some(action) = self
            .keybinding_context
            .action_for(&self.state.mode, &key_event)
        else {
            return false;
        };

        // The first bound key after help only dismisses it, unless it quits
        if self.state.help_visible {
            self.state.help_visible = false;
            if action != KeyAction::Quit {
                return false;
            }
        }

        match (self.state.mode, action) {
            (_, KeyAction::Quit) => return true,
            (_, KeyAction::Help) => self.state.help_visible = true,
            (AppMode::HostList, KeyAction::NavigateUp) => {
                self.state.list_selection = self.state.list_selection.saturating_sub(1);
            }
            (AppMode::HostList, KeyAction::NavigateDown) => {
                if self.state.list_selection + 1 < self.state.config.hosts.len() {
                    self.state.list_selection += 1;
                }
            }
            (AppMode::HostList, KeyAction::OpenBundles) => self.open_bundle_dialog(),
            (AppMode::BundleDialog, KeyAction::NavigateUp) => {
                if let Some(dialog) = self.state.bundle_dialog.as_mut() {
                    dialog.move_up();
                }
            }
            (AppMode::BundleDialog, KeyAction::NavigateDown) => {
                if let Some(dialog) = self.state.bundle_dialog.as_mut() {
                    dialog.move_down();
                }
            }
            (AppMode::BundleDialog, KeyAction::Toggle) => self.toggle_focused(),
            (AppMode::BundleDialog, KeyAction::Confirm) => self.apply_bundle_dialog(),
            (AppMode::BundleDialog, KeyAction::Cancel) => self.cancel_bundle_dialog(),
            _ => {}
        }
        false
    }

    /// Open the checklist, initialised from the current host list
    pub fn open_bundle_dialog(&mut self) {
        let selector = Selector::open(&self.catalog, &self.state.config.hosts);
        self.state.bundle_dialog = Some(BundleDialogState::new(*selector.state()));
        self.state.mode = AppMode::BundleDialog;
    }

    /// Flip the focused checklist row and adopt the corrected rows
    pub fn toggle_focused(&mut self) {
        let Some(dialog) = self.state.bundle_dialog.as_mut() else {
            return;
        };
        let category = dialog.focused();
        let checked = !dialog.session.vector.get(category);

        let mut selector = Selector::with_state(&self.catalog, dialog.session);
        selector.toggle(category, checked);
        dialog.session = *selector.state();
    }

    /// Close the checklist without touching the host list
    pub fn cancel_bundle_dialog(&mut self) {
        debug!("Bundle dialog cancelled");
        self.state.bundle_dialog = None;
        self.state.mode = AppMode::HostList;
        self.state.set_status("Bundle selection cancelled");
    }

    /// Commit the checklist into the host list and persist it
    pub fn apply_bundle_dialog(&mut self) {
        let Some(dialog) = self.state.bundle_dialog.take() else {
            return;
        };
        self.state.mode = AppMode::HostList;

        let selector = Selector::with_state(&self.catalog, dialog.session);
        let AppState {
            config,
            list_selection,
            ..
        } = &mut self.state;

        let mut on_change = |hosts: &[HostEntry]| {
            *list_selection = (*list_selection).min(hosts.len().saturating_sub(1));
        };

        match selector.commit(config, &mut on_change, &mut *self.persistence) {
            Ok(outcome) => {
                self.state.list_selection = outcome.index;
                let message = format!(
                    "Saved: {} ({})",
                    self.state.config.hosts[outcome.index].title, outcome.state
                );
                self.state.set_status(message);
            }
            Err(e) => {
                error!("Bundle selection not saved: {}", e);
                self.state.set_error(format!("Not saved: {}", e));
            }
        }
    }
}
