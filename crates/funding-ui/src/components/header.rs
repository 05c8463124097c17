use crate::themes::Theme;
use ratatui::text::{Line, Span};

/// Decorative accent string placed either side of the application title.
pub const ACCENT: &str = "· ─ ·";

/// Dashboard header rendering four lines:
///
/// 1. Application title with accent decorations (ALL CAPS).
/// 2. A 60-column `=` separator.
/// 3. Mode and record count in `[ mode | N records ]` format.
/// 4. An empty line.
pub struct Header<'a> {
    /// Display-mode name (e.g. "overall analysis").
    pub mode: &'a str,
    /// Number of funding records loaded.
    pub record_count: usize,
    /// Theme providing colour styles for each part of the header.
    pub theme: &'a Theme,
}

impl<'a> Header<'a> {
    /// Construct a new header.
    pub fn new(mode: &'a str, record_count: usize, theme: &'a Theme) -> Self {
        Self {
            mode,
            record_count,
            theme,
        }
    }

    /// Render the header as a `Vec<Line>` containing exactly four lines.
    pub fn to_lines(&self) -> Vec<Line<'a>> {
        let separator = "=".repeat(60);

        vec![
            Line::from(vec![
                Span::styled(ACCENT, self.theme.header_accent),
                Span::styled(" STARTUP FUNDING ANALYSIS ", self.theme.header),
                Span::styled(ACCENT, self.theme.header_accent),
            ]),
            Line::from(Span::styled(separator, self.theme.separator)),
            Line::from(vec![
                Span::styled("[ ", self.theme.label),
                Span::styled(self.mode.to_lowercase(), self.theme.value),
                Span::styled(" | ", self.theme.label),
                Span::styled(format!("{} records", self.record_count), self.theme.value),
                Span::styled(" ]", self.theme.label),
            ]),
            Line::from(""),
        ]
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
