//! Data layer for the funding dashboard.
//!
//! Responsible for reading the funding CSV into typed records, holding the
//! immutable in-memory table with its enumeration interfaces, and computing
//! every aggregate the views display: overview statistics, the
//! month-on-month series, and the per-investor breakdowns.

pub mod aggregator;
pub mod investor;
pub mod reader;
pub mod table;

pub use funding_core as core;
