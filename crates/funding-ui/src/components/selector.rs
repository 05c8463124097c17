//! Scrollable name-selection list used by the Startup and Investor views.

use ratatui::{
    layout::Rect,
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::themes::Theme;

/// Render `items` as a bordered, scrollable list with `selected` highlighted.
///
/// The `ListState` is rebuilt per draw from the selected index; ratatui
/// keeps the highlighted row in view as the selection moves.
pub fn render_selector(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    items: &[String],
    selected: usize,
    theme: &Theme,
) {
    let list_items: Vec<ListItem> = items
        .iter()
        .map(|name| ListItem::new(name.clone()).style(theme.list_item))
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {} ", title)),
        )
        .highlight_style(theme.list_highlight)
        .highlight_symbol("> ");

    let mut state = ListState::default();
    if !items.is_empty() {
        state.select(Some(selected.min(items.len() - 1)));
    }

    frame.render_stateful_widget(list, area, &mut state);
}

// ── Tests ─────────────────────────────────────────────────────────────────────
