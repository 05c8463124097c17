//! Metric cards for the Overall view's headline numbers.

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::themes::Theme;

/// One headline metric: a label on top, a large value underneath.
pub struct MetricCard<'a> {
    pub label: &'a str,
    pub value: String,
    pub theme: &'a Theme,
}

impl<'a> MetricCard<'a> {
    pub fn new(label: &'a str, value: String, theme: &'a Theme) -> Self {
        Self {
            label,
            value,
            theme,
        }
    }

    /// Render the card as a bordered block centered in `area`.
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from(Span::styled(self.label, self.theme.metric_label)),
            Line::from(Span::styled(self.value.clone(), self.theme.metric_value)),
        ];

        let card = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));

        frame.render_widget(card, area);
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
