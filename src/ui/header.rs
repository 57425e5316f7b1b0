//! Header and common widget rendering
//!
//! Title bar, status line, navigation bar and the help overlay.

use crate::app::{AppMode, AppState};
use crate::components::keybindings::KeybindingContext;
use crate::theme::{Colors, Styles};
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;

/// Render the title bar
pub fn render_title(f: &mut Frame, area: Rect) {
    let title = Paragraph::new("Hosts sources")
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .style(Styles::title());
    f.render_widget(title, area);
}

/// Render the status line
pub fn render_status(f: &mut Frame, state: &AppState, area: Rect) {
    let style = if state.status_is_error {
        Styles::error()
    } else {
        Style::default().fg(Colors::FG_PRIMARY)
    };
    let status = Paragraph::new(state.status_message.as_str())
        .block(Block::default().borders(Borders::ALL).title("Status"))
        .style(style);
    f.render_widget(status, area);
}

/// Render the navigation bar
pub fn render_nav_bar(
    f: &mut Frame,
    state: &AppState,
    keybinding_ctx: &KeybindingContext,
    area: Rect,
) {
    let mut spans = Vec::new();
    for item in keybinding_ctx.get_nav_items(&state.mode) {
        spans.push(Span::styled(
            format!(" {} ", item.key_display),
            Style::default().fg(Colors::PRIMARY),
        ));
        spans.push(Span::styled(format!("{}  ", item.action_label), Styles::nav_hint()));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Render the help overlay
pub fn render_help_overlay(f: &mut Frame, state: &AppState, keybinding_ctx: &KeybindingContext) {
    let mode_name = match state.mode {
        AppMode::HostList => "Hosts sources",
        AppMode::BundleDialog => "Blocklist bundle",
    };

    let mut lines = vec![
        Line::from(Span::styled(format!("  {mode_name}  "), Styles::title())),
        Line::from(""),
    ];
    for (key, description) in keybinding_ctx.get_help_content(&state.mode) {
        lines.push(Line::from(vec![
            Span::styled(format!("{key:>8}  "), Style::default().fg(Colors::WARNING)),
            Span::raw(description),
        ]));
    }

    let height = lines.len() as u16 + 2;
    let area = centered_rect(50, height, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help ")
                .border_style(Styles::border_active())
                .style(Styles::panel_bg()),
        ),
        area,
    );
}
