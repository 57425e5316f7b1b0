//! Host configuration list rendering

use crate::app::AppState;
use crate::catalog::Catalog;
use crate::theme::Styles;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

/// Render the host list, marking entries that belong to the catalog
pub fn render_host_list(f: &mut Frame, state: &AppState, catalog: &Catalog, area: Rect) {
    let items: Vec<ListItem> = state
        .config
        .hosts
        .iter()
        .map(|entry| {
            let bundle_mark = if catalog.find_by_url(&entry.location).is_some() {
                "*"
            } else {
                " "
            };
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<7}", entry.state.to_string().to_uppercase()),
                        Styles::entry_state(entry.state),
                    ),
                    Span::raw(format!("{bundle_mark} {}", entry.title)),
                ]),
                Line::from(Span::styled(
                    format!("         {}", entry.location),
                    Styles::text_muted(),
                )),
            ])
        })
        .collect();

    let title = format!("Hosts ({})", state.config.hosts.len());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(title))
        .highlight_style(Styles::selected());

    let mut list_state = ListState::default();
    if !state.config.hosts.is_empty() {
        list_state.select(Some(state.list_selection));
    }
    f.render_stateful_widget(list, area, &mut list_state);
}
