//! Investor analysis view.
//!
//! Left: a scrollable list of every investor name enumerated from the
//! table. Right: the analysis for the confirmed selection, which is
//! recomputed on Enter, not while scrolling. The analysis shows recent
//! rounds, biggest per-startup investments, the sector split, and the
//! year-on-year chart.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use funding_core::formatting::{format_crore, percentage};
use funding_data::investor::RecentInvestment;

use crate::components::bars::{bar_lines, truncate_to_width};
use crate::components::header::Header;
use crate::components::selector::render_selector;
use crate::themes::Theme;

/// Label-column width for the biggest-investments chart.
const CHART_LABEL_WIDTH: usize = 16;
/// Bar width for the investor charts.
const CHART_BAR_WIDTH: usize = 30;

/// The precomputed analysis for one confirmed investor selection.
#[derive(Debug, Clone)]
pub struct InvestorViewData {
    /// The investor name the analysis was run for.
    pub name: String,
    /// Most recent matching rounds, projected for the table.
    pub recent: Vec<RecentInvestment>,
    /// Biggest per-startup investment totals, descending.
    pub top: Vec<(String, f64)>,
    /// Per-vertical investment totals, descending.
    pub sectors: Vec<(String, f64)>,
    /// Per-year investment totals, ascending by year.
    pub yearly: Vec<(i32, f64)>,
}

impl InvestorViewData {
    /// Whether the investor matched no records at all.
    pub fn is_empty(&self) -> bool {
        self.recent.is_empty()
    }
}

/// Render the Investor view: name list on the left, analysis (or a
/// prompt) on the right.
pub fn render_investor(
    frame: &mut Frame,
    area: Rect,
    names: &[String],
    selected: usize,
    detail: Option<&InvestorViewData>,
    record_count: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(4), Constraint::Min(5)])
        .split(area);

    let header = Header::new("investor analysis", record_count, theme);
    frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25), Constraint::Percentage(75)])
        .split(chunks[1]);

    render_selector(frame, body[0], "Investors", names, selected, theme);

    match detail {
        Some(data) if data.is_empty() => render_no_match(frame, body[1], &data.name, theme),
        Some(data) => render_detail(frame, body[1], data, theme),
        None => render_prompt(frame, body[1], theme),
    }
}

/// Render the analysis panels for a confirmed, non-empty selection.
fn render_detail(frame: &mut Frame, area: Rect, data: &InvestorViewData, theme: &Theme) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(9), Constraint::Min(6)])
        .split(area);

    render_recent_table(frame, chunks[0], data, theme);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);

    render_top_investments(frame, charts[0], data, theme);
    render_sectors(frame, charts[1], data, theme);
    render_yearly(frame, charts[2], data, theme);
}

/// Render the recent-investments table with one row per round.
fn render_recent_table(frame: &mut Frame, area: Rect, data: &InvestorViewData, theme: &Theme) {
    let header_cells = ["Date", "Startup", "Vertical", "City", "Round", "Amount"]
        .iter()
        .map(|h| Cell::from(*h).style(theme.table_header));
    let header = Row::new(header_cells).height(1);

    let rows: Vec<Row> = data
        .recent
        .iter()
        .enumerate()
        .map(|(i, inv)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            Row::new(vec![
                Cell::from(
                    inv.date
                        .map(|d| d.format("%d/%m/%Y").to_string())
                        .unwrap_or_else(|| "-".to_string()),
                ),
                Cell::from(inv.startup.clone().unwrap_or_else(|| "-".to_string())),
                Cell::from(inv.vertical.clone()),
                Cell::from(inv.city.clone()),
                Cell::from(inv.round.clone()),
                Cell::from(
                    inv.amount
                        .map(format_crore)
                        .unwrap_or_else(|| "-".to_string()),
                ),
            ])
            .style(style)
        })
        .collect();

    let widths = [
        Constraint::Length(12),
        Constraint::Length(22),
        Constraint::Length(20),
        Constraint::Length(14),
        Constraint::Length(16),
        Constraint::Length(12),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" Recent Investments: {} ", data.name)),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

/// Render the biggest per-startup investments as a bar chart.
fn render_top_investments(frame: &mut Frame, area: Rect, data: &InvestorViewData, theme: &Theme) {
    let lines = bar_lines(&data.top, CHART_LABEL_WIDTH, CHART_BAR_WIDTH, theme);
    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Biggest Investments ")
                .style(theme.text),
        ),
        area,
    );
}

/// Render the sector split as one coloured proportion line per vertical.
fn render_sectors(frame: &mut Frame, area: Rect, data: &InvestorViewData, theme: &Theme) {
    let total: f64 = data.sectors.iter().map(|(_, v)| v).sum();

    let lines: Vec<Line> = data
        .sectors
        .iter()
        .enumerate()
        .map(|(i, (vertical, amount))| {
            let pct = percentage(*amount, total, 1);
            let short = truncate_to_width(vertical, CHART_LABEL_WIDTH);
            Line::from(vec![
                Span::styled("■ ", theme.sector_style(i)),
                Span::styled(
                    format!("{:<width$} ", short, width = CHART_LABEL_WIDTH),
                    theme.text,
                ),
                Span::styled(format!("{pct:.1}%"), theme.value),
            ])
        })
        .collect();

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Sectors Invested In ")
                .style(theme.text),
        ),
        area,
    );
}

/// Render the year-on-year investment chart.
fn render_yearly(frame: &mut Frame, area: Rect, data: &InvestorViewData, theme: &Theme) {
    let items: Vec<(String, f64)> = data
        .yearly
        .iter()
        .map(|(year, amount)| (year.to_string(), *amount))
        .collect();

    let lines = bar_lines(&items, 6, CHART_BAR_WIDTH, theme);
    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" YoY Investment ")
                .style(theme.text),
        ),
        area,
    );
}

/// Render the empty state shown when an investor matched no records.
fn render_no_match(frame: &mut Frame, area: Rect, name: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No investments found for '{}'", name),
            theme.warning,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Pick another investor with Up/Down and press Enter.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Investor Analysis "),
        ),
        area,
    );
}

/// Render the hint shown before any selection has been confirmed.
fn render_prompt(frame: &mut Frame, area: Rect, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Select an investor with Up/Down and press Enter.",
            theme.dim,
        )),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Investor Analysis "),
        ),
        area,
    );
}

// ── Tests ─────────────────────────────────────────────────────────────────────
