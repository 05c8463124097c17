//! Main application state and TUI event loop for the funding dashboard.
//!
//! [`App`] owns the loaded table, the theme, the active view mode, and
//! the per-view selections. Aggregations are recomputed on the
//! interaction that changes them (mode toggle, Enter on an investor),
//! never during a draw.

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Frame, Terminal};

use funding_core::models::MomMode;
use funding_data::aggregator;
use funding_data::investor::{self, DEFAULT_LIMIT};
use funding_data::table::FundingTable;

use crate::investor_view::{self, InvestorViewData};
use crate::overview_view::{self, OverviewViewData};
use crate::startup_view;
use crate::themes::Theme;

// ── ViewMode ──────────────────────────────────────────────────────────────────

/// Which analysis the TUI is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Dataset-wide summary and the month-on-month chart.
    Overall,
    /// Startup selection (detail analysis is a placeholder).
    Startup,
    /// Per-investor analysis.
    Investor,
}

impl ViewMode {
    /// Parse a mode name as used on the CLI and in the saved parameters.
    /// Unknown names fall back to the Overall view.
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "startup" => ViewMode::Startup,
            "investor" => ViewMode::Investor,
            _ => ViewMode::Overall,
        }
    }

    /// The canonical lowercase name, as persisted between runs.
    pub fn name(&self) -> &'static str {
        match self {
            ViewMode::Overall => "overall",
            ViewMode::Startup => "startup",
            ViewMode::Investor => "investor",
        }
    }

    /// The next mode in Tab-cycling order.
    pub fn next(&self) -> Self {
        match self {
            ViewMode::Overall => ViewMode::Startup,
            ViewMode::Startup => ViewMode::Investor,
            ViewMode::Investor => ViewMode::Overall,
        }
    }
}

// ── App ───────────────────────────────────────────────────────────────────────

/// Root application state for the funding dashboard TUI.
pub struct App {
    /// Active colour theme.
    pub theme: Theme,
    /// Current view mode.
    pub view_mode: ViewMode,
    /// Set to `true` to break out of the event loop on the next iteration.
    pub should_quit: bool,

    table: FundingTable,
    startup_names: Vec<String>,
    investor_names: Vec<String>,
    startup_selected: usize,
    investor_selected: usize,

    overview: OverviewViewData,
    /// Analysis for the last confirmed investor selection, `None` until
    /// the first Enter (or `--investor` preselection).
    investor_data: Option<InvestorViewData>,
}

impl App {
    /// Construct the application over a loaded table.
    ///
    /// When `investor` is given its analysis is computed up front, as if
    /// the user had already pressed Enter on that name.
    pub fn new(
        table: FundingTable,
        theme: Theme,
        view_mode: ViewMode,
        investor: Option<&str>,
    ) -> Self {
        let startup_names = table.startup_names();
        let investor_names = table.investor_names();
        let mom_mode = MomMode::Total;

        let overview = OverviewViewData {
            stats: aggregator::overview_stats(&table),
            mom: aggregator::month_on_month(&table, mom_mode),
            mode: mom_mode,
            record_count: table.len(),
        };

        let mut app = Self {
            theme,
            view_mode,
            should_quit: false,
            table,
            startup_names,
            investor_names,
            startup_selected: 0,
            investor_selected: 0,
            overview,
            investor_data: None,
        };

        if let Some(name) = investor {
            if let Some(pos) = app.investor_names.iter().position(|n| n == name) {
                app.investor_selected = pos;
            }
            app.investor_data = Some(app.analyze_investor(name));
        }

        app
    }

    /// The name under the cursor in the investor list, if any.
    pub fn selected_investor(&self) -> Option<&str> {
        self.investor_names
            .get(self.investor_selected)
            .map(String::as_str)
    }

    /// The investor whose analysis is currently shown, if any.
    pub fn confirmed_investor(&self) -> Option<&str> {
        self.investor_data.as_ref().map(|d| d.name.as_str())
    }

    /// The month-on-month mode currently charted.
    pub fn mom_mode(&self) -> MomMode {
        self.overview.mode
    }

    // ── Event loop ────────────────────────────────────────────────────────────

    /// Run the interactive TUI until the user quits.
    ///
    /// Uses `crossterm::event::poll` with a 250 ms timeout so the loop
    /// keeps redrawing without blocking on input.
    pub fn run(mut self) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(250);

        let result = loop {
            terminal.draw(|frame| self.render(frame))?;

            if event::poll(tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key.code, key.modifiers);
                }
            }

            if self.should_quit {
                break Ok(());
            }
        };

        // Restore terminal state unconditionally.
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    /// Apply one key press to the application state.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Char('Q') => self.should_quit = true,
            KeyCode::Char('1') => self.view_mode = ViewMode::Overall,
            KeyCode::Char('2') => self.view_mode = ViewMode::Startup,
            KeyCode::Char('3') => self.view_mode = ViewMode::Investor,
            KeyCode::Tab => self.view_mode = self.view_mode.next(),
            KeyCode::Char('t') if self.view_mode == ViewMode::Overall => self.toggle_mom_mode(),
            KeyCode::Up => self.move_selection(-1),
            KeyCode::Down => self.move_selection(1),
            KeyCode::Enter if self.view_mode == ViewMode::Investor => self.confirm_investor(),
            _ => {}
        }
    }

    // ── Private helpers ───────────────────────────────────────────────────────

    /// Render the current application state into `frame`.
    fn render(&self, frame: &mut Frame) {
        let area = frame.area();

        if self.table.is_empty() {
            overview_view::render_empty(frame, area, &self.theme);
            return;
        }

        match self.view_mode {
            ViewMode::Overall => {
                overview_view::render_overview(frame, area, &self.overview, &self.theme);
            }
            ViewMode::Startup => startup_view::render_startup(
                frame,
                area,
                &self.startup_names,
                self.startup_selected,
                self.table.len(),
                &self.theme,
            ),
            ViewMode::Investor => investor_view::render_investor(
                frame,
                area,
                &self.investor_names,
                self.investor_selected,
                self.investor_data.as_ref(),
                self.table.len(),
                &self.theme,
            ),
        }
    }

    /// Flip the month-on-month mode and recompute the series.
    fn toggle_mom_mode(&mut self) {
        let mode = self.overview.mode.toggle();
        self.overview.mode = mode;
        self.overview.mom = aggregator::month_on_month(&self.table, mode);
    }

    /// Move the list cursor of the current view by `delta`, clamped to
    /// the list bounds.
    fn move_selection(&mut self, delta: i64) {
        let (selected, len) = match self.view_mode {
            ViewMode::Startup => (&mut self.startup_selected, self.startup_names.len()),
            ViewMode::Investor => (&mut self.investor_selected, self.investor_names.len()),
            ViewMode::Overall => return,
        };
        if len == 0 {
            return;
        }
        let max = (len - 1) as i64;
        *selected = (*selected as i64 + delta).clamp(0, max) as usize;
    }

    /// Run the investor analysis for the name under the cursor.
    fn confirm_investor(&mut self) {
        if let Some(name) = self.selected_investor().map(str::to_string) {
            self.investor_data = Some(self.analyze_investor(&name));
        }
    }

    fn analyze_investor(&self, name: &str) -> InvestorViewData {
        InvestorViewData {
            name: name.to_string(),
            recent: investor::recent_investments(&self.table, name, DEFAULT_LIMIT),
            top: investor::top_investments_by_startup(&self.table, name, DEFAULT_LIMIT),
            sectors: investor::sector_breakdown(&self.table, name),
            yearly: investor::yearly_investment(&self.table, name),
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use funding_core::models::FundingRecord;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn record(date: (i32, u32, u32), startup: &str, investors: &str, amount: f64) -> FundingRecord {
        FundingRecord::new(
            NaiveDate::from_ymd_opt(date.0, date.1, date.2),
            Some(startup.to_string()),
            "FinTech".to_string(),
            "Mumbai".to_string(),
            "Series A".to_string(),
            investors.to_string(),
            Some(amount),
        )
    }

    fn make_table() -> FundingTable {
        FundingTable::new(vec![
            record((2020, 1, 9), "Paytm", "SoftBank", 100.0),
            record((2020, 2, 1), "Razorpay", "Sequoia, Accel", 50.0),
            record((2021, 1, 5), "Zerodha", "Accel", 25.0),
        ])
    }

    fn make_app() -> App {
        App::new(make_table(), Theme::dark(), ViewMode::Overall, None)
    }

    // ── ViewMode ──────────────────────────────────────────────────────────────

    #[test]
    fn test_view_mode_from_name() {
        assert_eq!(ViewMode::from_name("overall"), ViewMode::Overall);
        assert_eq!(ViewMode::from_name("Startup"), ViewMode::Startup);
        assert_eq!(ViewMode::from_name("INVESTOR"), ViewMode::Investor);
        assert_eq!(ViewMode::from_name("bogus"), ViewMode::Overall);
    }

    #[test]
    fn test_view_mode_next_cycles() {
        assert_eq!(ViewMode::Overall.next(), ViewMode::Startup);
        assert_eq!(ViewMode::Startup.next(), ViewMode::Investor);
        assert_eq!(ViewMode::Investor.next(), ViewMode::Overall);
    }

    #[test]
    fn test_view_mode_name_round_trip() {
        for mode in [ViewMode::Overall, ViewMode::Startup, ViewMode::Investor] {
            assert_eq!(ViewMode::from_name(mode.name()), mode);
        }
    }

    // ── Key handling ──────────────────────────────────────────────────────────

    #[test]
    fn test_q_quits() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit);
    }

    #[test]
    fn test_ctrl_c_quits() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }

    #[test]
    fn test_plain_c_does_not_quit() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('c'), KeyModifiers::NONE);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_number_keys_switch_modes() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Investor);
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Startup);
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Overall);
    }

    #[test]
    fn test_tab_cycles_modes() {
        let mut app = make_app();
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Startup);
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Investor);
        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.view_mode, ViewMode::Overall);
    }

    #[test]
    fn test_t_toggles_mom_mode_in_overall() {
        let mut app = make_app();
        assert_eq!(app.mom_mode(), MomMode::Total);
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.mom_mode(), MomMode::Count);
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.mom_mode(), MomMode::Total);
    }

    #[test]
    fn test_t_ignored_outside_overall() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        assert_eq!(app.mom_mode(), MomMode::Total);
    }

    #[test]
    fn test_toggle_recomputes_mom_series_as_counts() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('t'), KeyModifiers::NONE);
        // Three records in three distinct months, one each.
        assert!(app.overview.mom.iter().all(|p| p.value == 1.0));
    }

    // ── Selection ─────────────────────────────────────────────────────────────

    #[test]
    fn test_selection_moves_and_clamps() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);

        app.handle_key(KeyCode::Up, KeyModifiers::NONE);
        assert_eq!(app.investor_selected, 0, "must not move above the top");

        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.investor_selected, 1);

        for _ in 0..10 {
            app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        }
        assert_eq!(
            app.investor_selected,
            app.investor_names.len() - 1,
            "must clamp at the bottom"
        );
    }

    #[test]
    fn test_selection_ignored_in_overall_mode() {
        let mut app = make_app();
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.investor_selected, 0);
        assert_eq!(app.startup_selected, 0);
    }

    #[test]
    fn test_startup_and_investor_selections_independent() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('2'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        assert_eq!(app.startup_selected, 1);
        assert_eq!(app.investor_selected, 0);
    }

    // ── Investor confirmation ─────────────────────────────────────────────────

    #[test]
    fn test_enter_confirms_selected_investor() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        assert!(app.confirmed_investor().is_none());

        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        let confirmed = app.confirmed_investor().map(str::to_string);
        assert_eq!(confirmed.as_deref(), app.selected_investor());
    }

    #[test]
    fn test_enter_ignored_outside_investor_mode() {
        let mut app = make_app();
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        assert!(app.confirmed_investor().is_none());
    }

    #[test]
    fn test_scrolling_does_not_recompute_analysis() {
        let mut app = make_app();
        app.handle_key(KeyCode::Char('3'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
        let confirmed = app.confirmed_investor().map(str::to_string);

        app.handle_key(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(app.confirmed_investor(), confirmed.as_deref());
    }

    #[test]
    fn test_preselected_investor_computed_up_front() {
        let app = App::new(
            make_table(),
            Theme::dark(),
            ViewMode::Investor,
            Some("Accel"),
        );
        assert_eq!(app.confirmed_investor(), Some("Accel"));
        let data = app.investor_data.as_ref().unwrap();
        assert_eq!(data.recent.len(), 2);
    }

    #[test]
    fn test_preselected_unknown_investor_yields_empty_analysis() {
        let app = App::new(
            make_table(),
            Theme::dark(),
            ViewMode::Investor,
            Some("Nobody Capital"),
        );
        let data = app.investor_data.as_ref().unwrap();
        assert!(data.is_empty());
    }

    // ── Rendering ─────────────────────────────────────────────────────────────

    #[test]
    fn test_render_each_mode_does_not_panic() {
        let backend = TestBackend::new(120, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut app = make_app();

        for key in ['1', '2', '3'] {
            app.handle_key(KeyCode::Char(key), KeyModifiers::NONE);
            terminal.draw(|frame| app.render(frame)).unwrap();
        }
    }

    #[test]
    fn test_render_empty_table_shows_placeholder() {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        let app = App::new(
            FundingTable::new(Vec::new()),
            Theme::dark(),
            ViewMode::Overall,
            None,
        );

        terminal.draw(|frame| app.render(frame)).unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(text.contains("No funding records found"));
    }
}
