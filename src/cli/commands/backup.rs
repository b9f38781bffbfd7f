use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup { file, compress } = cmd {
        let store = RecordStore::from_config(cfg);
        let path = BackupLogic::backup(&store, file.as_deref(), *compress)?;
        success(format!("Backup created: {}", path.display()));
    }

    Ok(())
}
