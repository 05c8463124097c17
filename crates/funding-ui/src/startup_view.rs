//! Startup analysis view.
//!
//! Only the selection list is live; per-startup detail analysis has not
//! been built yet, so the right-hand panel is a placeholder naming the
//! current selection.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::components::header::Header;
use crate::components::selector::render_selector;
use crate::themes::Theme;

/// Render the Startup view: name list on the left, placeholder detail on
/// the right.
pub fn render_startup(
    frame: &mut Frame,
    area: Rect,
    names: &[String],
    selected: usize,
    record_count: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let header = Header::new("startup analysis", record_count, theme);
    frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
        .split(chunks[1]);

    render_selector(frame, body[0], "Startups", names, selected, theme);
    render_detail_placeholder(frame, body[1], names.get(selected), theme);
}

fn render_detail_placeholder(
    frame: &mut Frame,
    area: Rect,
    selected: Option<&String>,
    theme: &Theme,
) {
    let mut lines = vec![Line::from("")];
    match selected {
        Some(name) => {
            lines.push(Line::from(vec![
                Span::styled("Selected: ", theme.label),
                Span::styled(name.clone(), theme.value),
            ]));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "Startup detail analysis is not available yet.",
                theme.dim,
            )));
        }
        None => {
            lines.push(Line::from(Span::styled("No startups found", theme.warning)));
        }
    }

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Startup Detail ")
                .style(theme.text),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
