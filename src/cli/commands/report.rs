use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ReportLogic;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::utils::date::parse_date_or_today;

/// Render the weekly PDF report.
pub fn handle(cmd: &Commands, cfg: &Config, settings: &Settings) -> AppResult<()> {
    if let Commands::Report { week, file, force } = cmd {
        let day = parse_date_or_today(week.as_ref())?;
        let store = RecordStore::from_config(cfg);
        ReportLogic::weekly(&store, settings, day, file.as_deref(), *force)?;
    }
    Ok(())
}
