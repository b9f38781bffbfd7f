use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::parse::NewEntry;
use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::ui::messages::success;

/// Log a new session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
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
        let input = NewEntry {
            date: date.clone(),
            sport: sport.clone(),
            duration: duration.clone(),
            calories: calories.clone(),
            distance: distance.clone(),
            rpe: rpe.clone(),
            avg_heart_rate: avg_hr.clone(),
            note: note.clone(),
        };

        let store = RecordStore::from_config(cfg);
        let entry = AddLogic::apply(&store, &input)?;

        success(format!(
            "Logged {} {} min on {} (id {})",
            entry.sport,
            entry.duration_minutes,
            entry.date_str(),
            entry.short_id()
        ));
    }

    Ok(())
}
