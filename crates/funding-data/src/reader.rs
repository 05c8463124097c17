//! CSV loading for the funding dashboard.
//!
//! Reads the cleaned funding CSV into [`FundingRecord`]s. Cell-level
//! problems fail open: an unparsable date or a non-numeric amount becomes
//! `None` on the record, never an error. Only structural problems (missing
//! file, missing required columns) are fatal.

use std::path::Path;

use chrono::NaiveDate;
use regex::Regex;
use serde::Deserialize;
use tracing::{debug, warn};

use funding_core::error::{DashboardError, Result};
use funding_core::models::FundingRecord;

/// Columns the CSV must carry for the dashboard to function.
const REQUIRED_COLUMNS: [&str; 7] = [
    "date",
    "startup",
    "vertical",
    "city",
    "investors",
    "round",
    "amount",
];

/// Date formats tried in order when parsing the `date` column.
const DATE_FORMATS: [&str; 3] = ["%d/%m/%Y", "%Y-%m-%d", "%d-%m-%Y"];

/// One CSV row as raw strings, before any cell-level parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    date: String,
    #[serde(default)]
    startup: String,
    #[serde(default)]
    vertical: String,
    #[serde(default)]
    city: String,
    #[serde(default)]
    investors: String,
    #[serde(default)]
    round: String,
    #[serde(default)]
    amount: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the funding CSV at `path` into typed records, in file order.
///
/// Rows that cannot be decoded at all are skipped with a warning; cell
/// values that cannot be parsed become `None` on the record.
pub fn load_funding_records(path: &Path) -> Result<Vec<FundingRecord>> {
    let file = std::fs::File::open(path).map_err(|source| DashboardError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;

    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_reader(file);

    check_required_columns(&mut reader)?;

    let mut records: Vec<FundingRecord> = Vec::new();
    let mut rows_skipped = 0u64;

    for (index, row) in reader.deserialize::<RawRow>().enumerate() {
        match row {
            Ok(raw) => records.push(map_to_record(raw)),
            Err(e) => {
                rows_skipped += 1;
                warn!("Skipping undecodable CSV row {}: {}", index + 1, e);
            }
        }
    }

    debug!(
        "Loaded {} funding records from {} ({} rows skipped)",
        records.len(),
        path.display(),
        rows_skipped
    );

    Ok(records)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Verify the header row carries every required column.
fn check_required_columns(reader: &mut csv::Reader<std::fs::File>) -> Result<()> {
    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(DashboardError::MissingColumn(column.to_string()));
        }
    }
    Ok(())
}

/// Map a raw row to a typed record, deriving `month`/`year` from the date.
fn map_to_record(raw: RawRow) -> FundingRecord {
    let date = parse_date(&raw.date);
    let startup = if raw.startup.is_empty() {
        None
    } else {
        Some(raw.startup)
    };

    FundingRecord::new(
        date,
        startup,
        raw.vertical,
        raw.city,
        raw.round,
        raw.investors,
        parse_amount(&raw.amount),
    )
}

/// Parse a date cell, trying each known format. Fails open to `None`.
fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date);
        }
    }

    debug!("Unparsable date value {:?}; coercing to null", value);
    None
}

/// Parse an amount cell into crore. Strips grouping characters (commas,
/// spaces) first; anything still non-numeric fails open to `None`.
fn parse_amount(value: &str) -> Option<f64> {
    let grouping = Regex::new(r"[,\s]+").expect("regex is valid");
    let cleaned = grouping.replace_all(value.trim(), "");
    if cleaned.is_empty() {
        return None;
    }

    match cleaned.parse::<f64>() {
        Ok(amount) if amount.is_finite() => Some(amount),
        _ => {
            debug!("Non-numeric amount value {:?}; coercing to null", value);
            None
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
