use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::store::log::record;
use crate::ui::messages::success;

/// Handle the `settings` subcommand: print and/or update user settings.
pub fn handle(cmd: &Commands, cfg: &Config, current: &Settings) -> AppResult<()> {
    if let Commands::Settings {
        print,
        dark_mode,
        default_rpe,
    } = cmd
    {
        let store = RecordStore::from_config(cfg);
        let mut settings = *current;

        if dark_mode.is_some() || default_rpe.is_some() {
            if let Some(v) = dark_mode {
                settings.dark_mode = *v;
            }
            if let Some(v) = default_rpe {
                settings.default_rpe_for_load = *v;
            }

            settings.save(&store.settings_path())?;
            record(
                &store,
                "settings",
                &store.settings_path().to_string_lossy(),
                &format!(
                    "DarkMode={} DefaultRPEForLoad={}",
                    settings.dark_mode, settings.default_rpe_for_load
                ),
            );
            success("Settings saved.");
        }

        if *print || (dark_mode.is_none() && default_rpe.is_none()) {
            println!("⚙️  Settings ({}):", store.settings_path().display());
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
    }

    Ok(())
}
