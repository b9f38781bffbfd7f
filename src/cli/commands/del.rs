use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = RecordStore::from_config(cfg);

        // resolve first so the prompt can describe the session
        let full_id = store.resolve_id(id)?;
        let entry = store.find(&full_id)?;

        let prompt = format!(
            "Delete {} {} min on {} (id {})? A backup is taken first.",
            entry.sport,
            entry.duration_minutes,
            entry.date_str(),
            entry.short_id()
        );

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&store, &full_id)?;
        success(format!("Session {} has been deleted.", removed.short_id()));
    }

    Ok(())
}
