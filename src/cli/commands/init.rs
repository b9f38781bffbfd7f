use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::store::log::record;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config file (skipped in test mode)
///  - the data directory with Reports/ and Backups/
///  - an empty training log with its header row
///  - the settings file, if missing
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.data_dir.as_deref(), cli.test)?;
    let store = RecordStore::from_config(&cfg);

    info("Initializing trainlog…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Data dir    : {}", store.base_dir.display());
    println!("📒 Training log: {}", store.log_path.display());

    store.ensure_storage()?;

    let settings_path = store.settings_path();
    if !settings_path.exists() {
        Settings::default().save(&settings_path)?;
    }

    record(
        &store,
        "init",
        &store.log_path.to_string_lossy(),
        "Storage initialized",
    );

    success("trainlog initialization completed!");
    Ok(())
}
