use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::{EditLogic, EntryPatch};
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        sport,
        duration,
        calories,
        distance,
        rpe,
        avg_hr,
        note,
    } = cmd
    {
        let patch = EntryPatch {
            date: date.clone(),
            sport: sport.clone(),
            duration: duration.clone(),
            calories: calories.clone(),
            distance: distance.clone(),
            rpe: rpe.clone(),
            avg_heart_rate: avg_hr.clone(),
            note: note.clone(),
        };

        if patch.is_empty() {
            info("Nothing to change.");
            return Ok(());
        }

        let store = RecordStore::from_config(cfg);
        let updated = EditLogic::apply(&store, id, &patch)?;

        success(format!(
            "Session {} updated: {} {} min on {}",
            updated.short_id(),
            updated.sport,
            updated.duration_minutes,
            updated.date_str()
        ));
    }

    Ok(())
}
