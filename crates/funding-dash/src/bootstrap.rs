use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// File name the dashboard looks for when `--data` is not given.
pub const DEFAULT_DATA_FILE: &str = "startup_cleaned.csv";

// ── Directory bootstrap ────────────────────────────────────────────────────────

/// Ensure the standard `~/.funding-dash/` directory hierarchy exists.
///
/// Creates the following directories if absent (including any missing parents):
/// - `~/.funding-dash/`
/// - `~/.funding-dash/logs/`
pub fn ensure_directories() -> anyhow::Result<()> {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    let dash_dir = home.join(".funding-dash");
    std::fs::create_dir_all(&dash_dir)?;
    std::fs::create_dir_all(dash_dir.join("logs"))?;
    Ok(())
}

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `log_level` is mapped to a [`tracing_subscriber::EnvFilter`] directive.
/// Falls back to `"info"` if the level string is not recognised.
///
/// The `log_file` parameter is accepted for forward-compatibility but file
/// logging is not yet wired – all output currently goes to stderr.
pub fn setup_logging(log_level: &str, _log_file: Option<&PathBuf>) -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_new(normalise_level(log_level)).unwrap_or_else(|_| EnvFilter::new("info"));

    let subscriber = fmt::layer().with_target(false).with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .init();

    Ok(())
}

/// Map a CLI log-level name to the corresponding `tracing` directive.
///
/// Covers exactly the names `--log-level` accepts (`DEBUG`, `INFO`,
/// `WARNING`, `ERROR`); anything else is passed through uppercased for
/// `EnvFilter` to honour or reject.
fn normalise_level(level: &str) -> String {
    let upper = level.to_uppercase();
    match upper.as_str() {
        "DEBUG" => "debug",
        "INFO" => "info",
        "WARNING" => "warn",
        "ERROR" => "error",
        _ => return upper,
    }
    .to_string()
}

// ── Data-file discovery ────────────────────────────────────────────────────────

/// Attempt to locate the funding CSV file on the local system.
///
/// Checks the following paths in order and returns the first that exists:
/// 1. `./startup_cleaned.csv`
/// 2. `./data/startup_cleaned.csv`
/// 3. `~/.funding-dash/startup_cleaned.csv`
///
/// Returns `None` when no candidate exists.
pub fn discover_data_file() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let home = dirs::home_dir()?;
    discover_data_file_in(&cwd, &home)
}

/// Discovery rooted at explicit directories (used for testing).
fn discover_data_file_in(cwd: &std::path::Path, home: &std::path::Path) -> Option<PathBuf> {
    let candidates = [
        cwd.join(DEFAULT_DATA_FILE),
        cwd.join("data").join(DEFAULT_DATA_FILE),
        home.join(".funding-dash").join(DEFAULT_DATA_FILE),
    ];
    candidates.into_iter().find(|p| p.exists())
}

// ── Tests ──────────────────────────────────────────────────────────────────────
