use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Which value the month-on-month series carries per period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MomMode {
    /// Sum of funding amounts in the period.
    Total,
    /// Number of funding rounds in the period.
    Count,
}

impl MomMode {
    /// Flip between `Total` and `Count`.
    pub fn toggle(self) -> Self {
        match self {
            MomMode::Total => MomMode::Count,
            MomMode::Count => MomMode::Total,
        }
    }
}

/// One row of the funding table: a single funding event.
///
/// The table is immutable after load; records are only ever read. Sparse
/// cells (unparsable date, empty startup, non-numeric amount) are carried
/// as `None` and excluded from the aggregations that need them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FundingRecord {
    /// Calendar date of the round; `None` when the raw value was unparsable.
    pub date: Option<NaiveDate>,
    /// Month 1-12 derived from `date`; `None` when `date` is `None`.
    pub month: Option<u32>,
    /// Year derived from `date`; `None` when `date` is `None`.
    pub year: Option<i32>,
    /// Name of the funded startup; `None` when the cell was empty.
    pub startup: Option<String>,
    /// Sector / category label.
    pub vertical: String,
    /// City where the startup operates.
    pub city: String,
    /// Funding-round label (e.g. `"Seed"`, `"Series A"`).
    pub round: String,
    /// Comma-joined investor names, kept as one raw string.
    ///
    /// Membership is tested by raw substring containment, so an investor
    /// name that is a substring of another investor's name also matches.
    /// That quirk is part of the observable contract and is not corrected
    /// here.
    pub investors: String,
    /// Funding amount in crore; `None` when missing or non-numeric.
    pub amount: Option<f64>,
}

impl FundingRecord {
    /// Build a record from typed cells, deriving `month`/`year` from `date`.
    pub fn new(
        date: Option<NaiveDate>,
        startup: Option<String>,
        vertical: String,
        city: String,
        round: String,
        investors: String,
        amount: Option<f64>,
    ) -> Self {
        Self {
            month: date.map(|d| d.month()),
            year: date.map(|d| d.year()),
            date,
            startup,
            vertical,
            city,
            round,
            investors,
            amount,
        }
    }

    /// `true` when `investor` participated in this round, per the raw
    /// substring predicate (case-sensitive, no trimming, no word boundary).
    pub fn mentions(&self, investor: &str) -> bool {
        self.investors.contains(investor)
    }

    /// The individual investor names of this record, split on `,`.
    ///
    /// Names are NOT trimmed: `"A, B"` yields `["A", " B"]`.
    pub fn investor_names(&self) -> impl Iterator<Item = &str> {
        self.investors.split(',').filter(|s| !s.is_empty())
    }

    /// Amount contribution to a sum: the value when present, else zero.
    pub fn amount_or_zero(&self) -> f64 {
        self.amount.unwrap_or(0.0)
    }
}
