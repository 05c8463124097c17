//! The immutable in-memory funding table.
//!
//! Loaded once at startup and shared read-only by every query path; no
//! operation ever mutates it. Also derives the two selection enumerations
//! the sidebar needs: investor names and startup names.

use std::collections::BTreeSet;

use funding_core::models::FundingRecord;

/// All funding records, in original file order.
#[derive(Debug, Clone, Default)]
pub struct FundingTable {
    records: Vec<FundingRecord>,
}

impl FundingTable {
    /// Wrap loaded records into a table.
    pub fn new(records: Vec<FundingRecord>) -> Self {
        Self { records }
    }

    /// The records, in original file order.
    pub fn records(&self) -> &[FundingRecord] {
        &self.records
    }

    /// Number of records in the table.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// `true` when the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The deduplicated set of individual investor names, sorted ascending.
    ///
    /// Derived by splitting every record's `investors` field on `,` and
    /// flattening. Names are not trimmed, so `"A, B"` contributes `"A"` and
    /// `" B"` as distinct entries. This matches the raw selection list the
    /// dashboard has always shown.
    pub fn investor_names(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .flat_map(|r| r.investor_names())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }

    /// The distinct non-null startup names, sorted ascending.
    pub fn startup_names(&self) -> Vec<String> {
        let set: BTreeSet<&str> = self
            .records
            .iter()
            .filter_map(|r| r.startup.as_deref())
            .collect();
        set.into_iter().map(str::to_string).collect()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
