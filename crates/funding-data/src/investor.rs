//! Per-investor queries over the funding table.
//!
//! All operations share one predicate: a record matches an investor when
//! its raw `investors` field contains the investor name as a substring.
//! That is the contract the dashboard has always had — it also means a
//! name that is a substring of another investor's name produces false
//! positives, and that behaviour is preserved, not corrected.
//!
//! Zero matches are never an error; every operation degrades to an empty
//! result and leaves the empty-state display to the view layer.

use std::collections::{BTreeMap, HashMap};

use chrono::NaiveDate;

use funding_core::models::FundingRecord;

use crate::table::FundingTable;

/// How many rows the recent / biggest listings show by default.
pub const DEFAULT_LIMIT: usize = 5;

/// One row of the recent-investments listing, projected to the columns
/// the view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct RecentInvestment {
    pub date: Option<NaiveDate>,
    pub startup: Option<String>,
    pub vertical: String,
    pub city: String,
    pub round: String,
    pub amount: Option<f64>,
}

/// Records mentioning `investor`, in original table order.
fn matching_records<'a>(table: &'a FundingTable, investor: &str) -> Vec<&'a FundingRecord> {
    table
        .records()
        .iter()
        .filter(|r| r.mentions(investor))
        .collect()
}

/// The first `limit` matching records in original table order (not
/// time-sorted), projected for display.
pub fn recent_investments(
    table: &FundingTable,
    investor: &str,
    limit: usize,
) -> Vec<RecentInvestment> {
    matching_records(table, investor)
        .into_iter()
        .take(limit)
        .map(|r| RecentInvestment {
            date: r.date,
            startup: r.startup.clone(),
            vertical: r.vertical.clone(),
            city: r.city.clone(),
            round: r.round.clone(),
            amount: r.amount,
        })
        .collect()
}

/// Matching records grouped by startup, summed, sorted strictly descending
/// by total, truncated to `limit`. Ties may land in either order.
pub fn top_investments_by_startup(
    table: &FundingTable,
    investor: &str,
    limit: usize,
) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for record in matching_records(table, investor) {
        if let Some(startup) = record.startup.as_deref() {
            *totals.entry(startup).or_default() += record.amount_or_zero();
        }
    }

    let mut pairs: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(s, v)| (s.to_string(), v))
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs.truncate(limit);
    pairs
}

/// Matching records grouped by vertical, summed, sorted descending so the
/// proportion display is stable.
pub fn sector_breakdown(table: &FundingTable, investor: &str) -> Vec<(String, f64)> {
    let mut totals: HashMap<&str, f64> = HashMap::new();
    for record in matching_records(table, investor) {
        *totals.entry(record.vertical.as_str()).or_default() += record.amount_or_zero();
    }

    let mut pairs: Vec<(String, f64)> = totals
        .into_iter()
        .map(|(s, v)| (s.to_string(), v))
        .collect();
    pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    pairs
}

/// Matching records grouped by year, summed, ascending by year. Records
/// with an unparsable date are excluded.
pub fn yearly_investment(table: &FundingTable, investor: &str) -> Vec<(i32, f64)> {
    let mut totals: BTreeMap<i32, f64> = BTreeMap::new();
    for record in matching_records(table, investor) {
        if let Some(year) = record.year {
            *totals.entry(year).or_default() += record.amount_or_zero();
        }
    }
    totals.into_iter().collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn record(
        startup: &str,
        vertical: &str,
        amount: Option<f64>,
        investors: &str,
        year: i32,
        month: u32,
    ) -> FundingRecord {
        FundingRecord::new(
            NaiveDate::from_ymd_opt(year, month, 1),
            Some(startup.to_string()),
            vertical.to_string(),
            "Mumbai".to_string(),
            "Seed".to_string(),
            investors.to_string(),
            amount,
        )
    }

    /// The scenario table from the aggregation contract: A funded twice by
    /// X (once jointly with Y), B funded once by Y.
    fn scenario_table() -> FundingTable {
        FundingTable::new(vec![
            record("A", "FinTech", Some(10.0), "X,Y", 2020, 1),
            record("A", "FinTech", Some(5.0), "X", 2020, 2),
            record("B", "EdTech", Some(20.0), "Y", 2021, 1),
        ])
    }

    // ── recent_investments ────────────────────────────────────────────────────

    #[test]
    fn test_recent_scenario_investor_x() {
        let rows = recent_investments(&scenario_table(), "X", DEFAULT_LIMIT);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].startup.as_deref(), Some("A"));
        assert_eq!(rows[0].amount, Some(10.0));
        assert_eq!(rows[1].amount, Some(5.0));
    }

    #[test]
    fn test_recent_table_order_not_time_order() {
        let table = FundingTable::new(vec![
            record("Later", "FinTech", Some(1.0), "X", 2021, 6),
            record("Earlier", "FinTech", Some(2.0), "X", 2019, 6),
        ]);
        let rows = recent_investments(&table, "X", DEFAULT_LIMIT);
        assert_eq!(rows[0].startup.as_deref(), Some("Later"));
        assert_eq!(rows[1].startup.as_deref(), Some("Earlier"));
    }

    #[test]
    fn test_recent_respects_limit() {
        let records: Vec<FundingRecord> = (0..8)
            .map(|i| record(&format!("S{i}"), "FinTech", Some(1.0), "X", 2020, 1))
            .collect();
        let table = FundingTable::new(records);
        assert_eq!(recent_investments(&table, "X", 5).len(), 5);
    }

    #[test]
    fn test_recent_every_row_mentions_investor() {
        let rows = recent_investments(&scenario_table(), "Y", DEFAULT_LIMIT);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].startup.as_deref(), Some("A"));
        assert_eq!(rows[1].startup.as_deref(), Some("B"));
    }

    #[test]
    fn test_recent_unknown_investor_is_empty() {
        assert!(recent_investments(&scenario_table(), "Nobody", DEFAULT_LIMIT).is_empty());
    }

    // ── substring quirk ───────────────────────────────────────────────────────

    #[test]
    fn test_substring_predicate_false_positive_preserved() {
        // Investor "X" also matches records whose investor is "XY".
        let table = FundingTable::new(vec![
            record("A", "FinTech", Some(10.0), "XY", 2020, 1),
            record("B", "FinTech", Some(5.0), "X", 2020, 2),
        ]);
        let rows = recent_investments(&table, "X", DEFAULT_LIMIT);
        assert_eq!(rows.len(), 2, "substring match must include 'XY' records");
    }

    // ── top_investments_by_startup ────────────────────────────────────────────

    #[test]
    fn test_top_investments_sorted_descending() {
        let table = FundingTable::new(vec![
            record("Small", "FinTech", Some(5.0), "X", 2020, 1),
            record("Big", "FinTech", Some(50.0), "X", 2020, 2),
            record("Mid", "FinTech", Some(20.0), "X", 2020, 3),
        ]);
        let top = top_investments_by_startup(&table, "X", DEFAULT_LIMIT);
        let names: Vec<&str> = top.iter().map(|(s, _)| s.as_str()).collect();
        assert_eq!(names, vec!["Big", "Mid", "Small"]);
    }

    #[test]
    fn test_top_investments_sums_per_startup() {
        let top = top_investments_by_startup(&scenario_table(), "X", DEFAULT_LIMIT);
        assert_eq!(top, vec![("A".to_string(), 15.0)]);
    }

    #[test]
    fn test_top_investments_truncates_to_limit() {
        let records: Vec<FundingRecord> = (0..8)
            .map(|i| record(&format!("S{i}"), "FinTech", Some(i as f64), "X", 2020, 1))
            .collect();
        let table = FundingTable::new(records);
        let top = top_investments_by_startup(&table, "X", 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].1, 7.0);
    }

    // ── sector_breakdown ──────────────────────────────────────────────────────

    #[test]
    fn test_sector_breakdown_groups_by_vertical() {
        let table = FundingTable::new(vec![
            record("A", "FinTech", Some(10.0), "X", 2020, 1),
            record("B", "EdTech", Some(30.0), "X", 2020, 2),
            record("C", "FinTech", Some(5.0), "X", 2020, 3),
        ]);
        let sectors = sector_breakdown(&table, "X");
        assert_eq!(
            sectors,
            vec![("EdTech".to_string(), 30.0), ("FinTech".to_string(), 15.0)]
        );
    }

    #[test]
    fn test_sector_breakdown_empty_for_unknown() {
        assert!(sector_breakdown(&scenario_table(), "Nobody").is_empty());
    }

    // ── yearly_investment ─────────────────────────────────────────────────────

    #[test]
    fn test_yearly_scenario_investor_x() {
        let yearly = yearly_investment(&scenario_table(), "X");
        assert_eq!(yearly, vec![(2020, 15.0)]);
    }

    #[test]
    fn test_yearly_scenario_investor_y() {
        let yearly = yearly_investment(&scenario_table(), "Y");
        assert_eq!(yearly, vec![(2020, 10.0), (2021, 20.0)]);
    }

    #[test]
    fn test_yearly_ascending_no_duplicate_years() {
        let table = FundingTable::new(vec![
            record("A", "FinTech", Some(1.0), "X", 2021, 1),
            record("B", "FinTech", Some(2.0), "X", 2019, 1),
            record("C", "FinTech", Some(3.0), "X", 2021, 6),
        ]);
        let yearly = yearly_investment(&table, "X");
        assert_eq!(yearly, vec![(2019, 2.0), (2021, 4.0)]);
    }

    #[test]
    fn test_yearly_excludes_undated_records() {
        let mut undated = record("A", "FinTech", Some(9.0), "X", 2020, 1);
        undated.date = None;
        undated.year = None;
        undated.month = None;

        let table = FundingTable::new(vec![
            undated,
            record("B", "FinTech", Some(4.0), "X", 2022, 1),
        ]);
        assert_eq!(yearly_investment(&table, "X"), vec![(2022, 4.0)]);
    }
}
