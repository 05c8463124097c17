//! Core domain layer for the funding dashboard.
//!
//! Holds the funding-record model, the shared error type, CLI settings with
//! last-used persistence, and display formatting helpers used by the data
//! and UI layers.

pub mod error;
pub mod formatting;
pub mod models;
pub mod settings;
