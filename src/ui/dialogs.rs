//! Bundle checklist dialog rendering

use crate::app::BundleDialogState;
use crate::catalog::{Catalog, SelectorVector};
use crate::selector::Selector;
use crate::theme::Styles;
use crate::types::{Category, EntryState};
use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;

/// One line per checklist row, focused row highlighted
pub(crate) fn checklist_lines(vector: SelectorVector, cursor: usize) -> Vec<Line<'static>> {
    (0..Category::COUNT)
        .filter_map(Category::from_index)
        .map(|category| {
            let mark = if vector.get(category) { "[x]" } else { "[ ]" };
            let indent = if category.is_master() { "" } else { "    " };
            let style = if category.index() == cursor {
                Styles::selected()
            } else {
                Styles::unselected()
            };
            Line::from(Span::styled(
                format!("{indent}{mark} {}", category.label()),
                style,
            ))
        })
        .collect()
}

/// Render the checklist over whatever is already on screen
pub fn render_bundle_dialog(f: &mut Frame, dialog: &BundleDialogState, catalog: &Catalog) {
    let area = centered_rect(64, 14, f.area());
    f.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Blocklist bundle ")
        .border_style(Styles::border_active())
        .style(Styles::panel_bg());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(Category::COUNT as u16),
            Constraint::Length(1),
            Constraint::Min(1),
        ])
        .split(inner);

    f.render_widget(
        Paragraph::new(checklist_lines(dialog.session.vector, dialog.cursor)),
        chunks[0],
    );

    // Preview of what Enter would write
    let target = Selector::with_state(catalog, dialog.session).target_entry();
    let preview = match target.state {
        EntryState::Deny => Line::from(Span::styled(target.title, Styles::success())),
        _ => Line::from(Span::styled(
            "Disabled: the bundle entry will be kept but ignored",
            Styles::text_muted(),
        )),
    };
    f.render_widget(
        Paragraph::new(preview).wrap(Wrap { trim: true }),
        chunks[2],
    );
}
