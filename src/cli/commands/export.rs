use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::settings::Settings;
use crate::store::RecordStore;

pub fn handle(cmd: &Commands, cfg: &Config, settings: &Settings) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        ExportLogic::export(&store, settings, *format, file, range.as_deref(), *force)?;
    }
    Ok(())
}
