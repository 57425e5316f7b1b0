//! User interface rendering module
//!
//! - `header` - Title, status line, navigation bar and help overlay
//! - `host_list` - The host configuration list
//! - `dialogs` - The bundle checklist dialog

mod dialogs;
mod header;
mod host_list;

use crate::app::{AppMode, AppState};
use crate::catalog::Catalog;
use crate::components::keybindings::KeybindingContext;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

/// UI renderer for the application
///
/// Delegates to the submodules; holds no state of its own.
#[derive(Debug, Default)]
pub struct UiRenderer;

impl UiRenderer {
    pub fn new() -> Self {
        Self
    }

    /// Render the complete UI based on application state
    pub fn render(
        &self,
        f: &mut Frame,
        state: &AppState,
        catalog: &Catalog,
        keybinding_ctx: &KeybindingContext,
    ) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Title
                Constraint::Min(1),    // Host list
                Constraint::Length(3), // Status line
                Constraint::Length(1), // Navigation bar
            ])
            .split(f.area());

        header::render_title(f, chunks[0]);
        host_list::render_host_list(f, state, catalog, chunks[1]);
        header::render_status(f, state, chunks[2]);
        header::render_nav_bar(f, state, keybinding_ctx, chunks[3]);

        // The list stays visible behind the dialog
        if state.mode == AppMode::BundleDialog {
            if let Some(ref dialog) = state.bundle_dialog {
                dialogs::render_bundle_dialog(f, dialog, catalog);
            }
        }

        if state.help_visible {
            header::render_help_overlay(f, state, keybinding_ctx);
        }
    }
}

/// Centered rectangle of at most `width` x `height` inside `area`
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}
