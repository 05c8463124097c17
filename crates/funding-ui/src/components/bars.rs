//! Horizontal bar rendering shared by the chart panels.
//!
//! Charts are drawn as one text line per entry: a fixed-width label, a
//! block-character bar scaled against the largest value, and the formatted
//! value. This keeps rendering identical across terminals without pulling
//! in a canvas widget.

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use funding_core::formatting::format_crore;

use crate::themes::Theme;

/// Truncate `s` to at most `max` display columns, appending `…` when cut.
pub fn truncate_to_width(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for ch in s.chars() {
        if out.width() + 2 > max {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

/// Render `(label, value)` pairs as horizontal bar lines with values
/// formatted as crore amounts.
pub fn bar_lines(
    items: &[(String, f64)],
    label_width: usize,
    bar_width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    bar_lines_with(items, label_width, bar_width, theme, format_crore)
}

/// Render `(label, value)` pairs as horizontal bar lines, formatting each
/// value with `format`.
///
/// Bars scale linearly against the largest value; a zero or all-zero set
/// renders empty bars rather than dividing by zero.
pub fn bar_lines_with(
    items: &[(String, f64)],
    label_width: usize,
    bar_width: usize,
    theme: &Theme,
    format: impl Fn(f64) -> String,
) -> Vec<Line<'static>> {
    let max_value = items.iter().map(|(_, v)| *v).fold(0.0_f64, f64::max);

    items
        .iter()
        .map(|(label, value)| {
            let filled = if max_value > 0.0 {
                ((value / max_value) * bar_width as f64).round() as usize
            } else {
                0
            };

            let short = truncate_to_width(label, label_width);
            let padding = label_width.saturating_sub(short.width());

            Line::from(vec![
                Span::styled(
                    format!("{}{} ", short, " ".repeat(padding)),
                    theme.chart_label,
                ),
                Span::styled("█".repeat(filled), theme.chart_bar),
                Span::styled(
                    "░".repeat(bar_width.saturating_sub(filled)),
                    theme.dim,
                ),
                Span::styled(format!(" {}", format(*value)), theme.value),
            ])
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
