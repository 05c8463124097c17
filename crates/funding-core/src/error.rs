use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the funding dashboard.
#[derive(Error, Debug)]
pub enum DashboardError {
    /// The CSV data file could not be opened or read from disk.
    #[error("Failed to read data file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A CSV record could not be decoded at all (structural failure, not a
    /// bad cell value — bad cells fail open to `None`).
    #[error("Failed to parse CSV: {0}")]
    CsvParse(#[from] csv::Error),

    /// No funding data file was found at any of the candidate locations.
    #[error("Funding data file not found: {0}")]
    DataFileNotFound(PathBuf),

    /// The loaded CSV is missing one of the required columns.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// An error originating from the terminal / TUI layer.
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// A configuration value is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Pass-through for any raw I/O error that does not carry a path.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Catch-all for errors from third-party crates via `anyhow`.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Convenience alias used throughout the dashboard crates.
pub type Result<T> = std::result::Result<T, DashboardError>;
