//! Overall analysis view: headline metrics plus the month-on-month chart.
//!
//! The view is pure rendering; all numbers arrive precomputed in
//! [`OverviewViewData`] so a draw never touches the table itself.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use funding_core::formatting::{format_crore, format_number};
use funding_core::models::MomMode;
use funding_data::aggregator::{MomPoint, OverviewStats};

use crate::components::bars::bar_lines_with;
use crate::components::header::Header;
use crate::components::metric::MetricCard;
use crate::themes::Theme;

/// Label-column width for the month-on-month chart ("12-2020" fits).
const MOM_LABEL_WIDTH: usize = 8;
/// Bar width for the month-on-month chart.
const MOM_BAR_WIDTH: usize = 40;

/// All data required to render the Overall view.
#[derive(Debug, Clone)]
pub struct OverviewViewData {
    /// Headline summary statistics.
    pub stats: OverviewStats,
    /// Month-on-month series for the currently selected mode, in
    /// chronological order.
    pub mom: Vec<MomPoint>,
    /// Whether the chart shows total amounts or record counts.
    pub mode: MomMode,
    /// Number of records loaded, shown in the header.
    pub record_count: usize,
}

/// Render the Overall view into `area`.
pub fn render_overview(frame: &mut Frame, area: Rect, data: &OverviewViewData, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header
            Constraint::Length(4), // metric cards
            Constraint::Min(5),    // month-on-month chart
        ])
        .split(area);

    let header = Header::new("overall analysis", data.record_count, theme);
    frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

    render_metrics(frame, chunks[1], &data.stats, theme);
    render_mom_chart(frame, chunks[2], data, theme);
}

/// Render the four headline metric cards side by side.
fn render_metrics(frame: &mut Frame, area: Rect, stats: &OverviewStats, theme: &Theme) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let cards = [
        MetricCard::new(
            "Total Invested",
            format!("{} Cr", format_number(stats.total_invested as f64, 0)),
            theme,
        ),
        MetricCard::new(
            "Max Investment",
            format_crore(stats.max_single_investment),
            theme,
        ),
        MetricCard::new(
            "Avg Ticket Size",
            format_crore(stats.average_ticket_size),
            theme,
        ),
        MetricCard::new(
            "Funded Startups",
            format_number(stats.startup_count as f64, 0),
            theme,
        ),
    ];

    for (card, column) in cards.iter().zip(columns.iter()) {
        card.render(frame, *column);
    }
}

/// Render the month-on-month bar chart with a mode-toggle hint.
fn render_mom_chart(frame: &mut Frame, area: Rect, data: &OverviewViewData, theme: &Theme) {
    let title = match data.mode {
        MomMode::Total => " MoM Investment (Total) ",
        MomMode::Count => " MoM Investment (Count) ",
    };

    let items: Vec<(String, f64)> = data
        .mom
        .iter()
        .map(|p| (p.label.clone(), p.value))
        .collect();

    let mut lines = match data.mode {
        MomMode::Total => {
            bar_lines_with(&items, MOM_LABEL_WIDTH, MOM_BAR_WIDTH, theme, format_crore)
        }
        MomMode::Count => bar_lines_with(&items, MOM_LABEL_WIDTH, MOM_BAR_WIDTH, theme, |v| {
            format_number(v, 0)
        }),
    };

    if lines.is_empty() {
        lines.push(Line::from(Span::styled(
            "No dated records to chart",
            theme.dim,
        )));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press 't' to toggle Total / Count",
        theme.dim,
    )));

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .style(theme.text),
        ),
        area,
    );
}

/// Render a "no data" placeholder when the table has no records at all.
pub fn render_empty(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled("No funding records found", theme.warning)),
        Line::from(""),
        Line::from(Span::styled(
            "Check that the CSV file exists and has the expected columns.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Funding Dashboard "),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
