//! Overview aggregation over the funding table.
//!
//! Pure, stateless computations: summary statistics for the Overall view
//! and the month-on-month time series. Every call is one full pass over
//! the table; nothing is cached between interactions.

use std::collections::{BTreeMap, HashMap, HashSet};

use funding_core::models::{FundingRecord, MomMode};

use crate::table::FundingTable;

// ── OverviewStats ─────────────────────────────────────────────────────────────

/// The four headline metrics of the Overall view.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OverviewStats {
    /// Sum of all known funding amounts, rounded to the nearest crore.
    pub total_invested: i64,
    /// Largest single funding amount received by any one startup in one
    /// round (per-startup max of single rounds, then the max of those).
    pub max_single_investment: f64,
    /// Mean of the per-startup total funding sums ("ticket size"). Raw
    /// value; the view rounds it for display.
    pub average_ticket_size: f64,
    /// Number of distinct funded startups.
    pub startup_count: usize,
}

/// Compute the Overall summary statistics in one pass over the table.
///
/// An empty table degrades to all-zero stats; missing amounts contribute
/// nothing to any sum.
pub fn overview_stats(table: &FundingTable) -> OverviewStats {
    let total: f64 = table.records().iter().map(FundingRecord::amount_or_zero).sum();

    // Per-startup totals and per-startup single-round maxima, keyed by the
    // non-null startup name.
    let mut per_startup_total: HashMap<&str, f64> = HashMap::new();
    let mut max_single = 0.0_f64;

    for record in table.records() {
        let Some(startup) = record.startup.as_deref() else {
            continue;
        };
        *per_startup_total.entry(startup).or_default() += record.amount_or_zero();
        if let Some(amount) = record.amount {
            max_single = max_single.max(amount);
        }
    }

    let startup_count = per_startup_total.len();
    let average_ticket_size = if startup_count == 0 {
        0.0
    } else {
        per_startup_total.values().sum::<f64>() / startup_count as f64
    };

    OverviewStats {
        total_invested: total.round() as i64,
        max_single_investment: max_single,
        average_ticket_size,
        startup_count,
    }
}

// ── Month-on-month series ─────────────────────────────────────────────────────

/// One point of the month-on-month series.
#[derive(Debug, Clone, PartialEq)]
pub struct MomPoint {
    /// `"{month}-{year}"`, e.g. `"3-2020"`.
    pub label: String,
    /// Amount sum (`Total` mode) or record count (`Count` mode).
    pub value: f64,
}

/// Group records by `(year, month)` and aggregate per group.
///
/// Records with an unparsable date (null year/month) are dropped. The
/// output is ordered ascending by `(year, month)` — BTreeMap key order,
/// which is the grouping order, not a chronological resort of labels.
pub fn month_on_month(table: &FundingTable, mode: MomMode) -> Vec<MomPoint> {
    let mut groups: BTreeMap<(i32, u32), (f64, u64)> = BTreeMap::new();

    for record in table.records() {
        let (Some(year), Some(month)) = (record.year, record.month) else {
            continue;
        };
        let entry = groups.entry((year, month)).or_default();
        entry.0 += record.amount_or_zero();
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((year, month), (total, count))| MomPoint {
            label: format!("{}-{}", month, year),
            value: match mode {
                MomMode::Total => total,
                MomMode::Count => count as f64,
            },
        })
        .collect()
}

/// Number of distinct `(year, month)` pairs among dated records.
pub fn distinct_period_count(table: &FundingTable) -> usize {
    table
        .records()
        .iter()
        .filter_map(|r| Some((r.year?, r.month?)))
        .collect::<HashSet<_>>()
        .len()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
