mod bootstrap;

use std::path::PathBuf;

use anyhow::Result;
use funding_core::error::DashboardError;
use funding_core::settings::Settings;
use funding_data::reader::load_funding_records;
use funding_data::table::FundingTable;
use funding_ui::app::{App, ViewMode};
use funding_ui::themes::Theme;

fn main() -> Result<()> {
    let settings = Settings::load_with_last_used();

    bootstrap::ensure_directories()?;
    bootstrap::setup_logging(&settings.log_level, settings.log_file.as_ref())?;

    tracing::info!("Funding dashboard v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!("View: {}, Theme: {}", settings.view, settings.theme);

    let data_path = match settings.data_file.clone() {
        Some(path) => path,
        None => bootstrap::discover_data_file().ok_or_else(|| {
            DashboardError::DataFileNotFound(PathBuf::from(bootstrap::DEFAULT_DATA_FILE))
        })?,
    };
    tracing::info!("Loading funding data from {}", data_path.display());

    let records = load_funding_records(&data_path)?;
    let table = FundingTable::new(records);
    tracing::info!("Loaded {} funding records", table.len());

    let app = App::new(
        table,
        Theme::from_name(&settings.theme),
        ViewMode::from_name(&settings.view),
        settings.investor.as_deref(),
    );

    app.run()?;

    Ok(())
}
