use crate::core::parse::NewEntry;
use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::store::RecordStore;
use crate::store::log::record;

/// Field changes requested by `edit`. `None` keeps the current value; for
/// optional fields `Some("")` clears it.
#[derive(Debug, Clone, Default)]
pub struct EntryPatch {
    pub date: Option<String>,
    pub sport: Option<String>,
    pub duration: Option<String>,
    pub calories: Option<String>,
    pub distance: Option<String>,
    pub rpe: Option<String>,
    pub avg_heart_rate: Option<String>,
    pub note: Option<String>,
}

impl EntryPatch {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.sport.is_none()
            && self.duration.is_none()
            && self.calories.is_none()
            && self.distance.is_none()
            && self.rpe.is_none()
            && self.avg_heart_rate.is_none()
            && self.note.is_none()
    }

    fn merge_into(&self, mut raw: NewEntry) -> NewEntry {
        if let Some(v) = &self.date {
            raw.date = v.clone();
        }
        if let Some(v) = &self.sport {
            raw.sport = v.clone();
        }
        if let Some(v) = &self.duration {
            raw.duration = v.clone();
        }
        if let Some(v) = &self.calories {
            raw.calories = Some(v.clone());
        }
        if let Some(v) = &self.distance {
            raw.distance = Some(v.clone());
        }
        if let Some(v) = &self.rpe {
            raw.rpe = Some(v.clone());
        }
        if let Some(v) = &self.avg_heart_rate {
            raw.avg_heart_rate = Some(v.clone());
        }
        if let Some(v) = &self.note {
            raw.note = Some(v.clone());
        }
        raw
    }
}

pub struct EditLogic;

impl EditLogic {
    /// Apply `patch` to the entry `id` and rewrite the log.
    ///
    /// The merged entry goes through the same strict validation as `add`,
    /// keeping its original id. Nothing is written if validation fails.
    pub fn apply(store: &RecordStore, id: &str, patch: &EntryPatch) -> AppResult<SessionEntry> {
        let full_id = store.resolve_id(id)?;
        let current = store.find(&full_id)?;

        let merged = patch.merge_into(NewEntry::from_entry(&current));
        let updated = merged.validate_with_id(current.id.clone())?;

        store.replace(updated.clone())?;

        record(
            store,
            "edit",
            &updated.id,
            &format!(
                "{} {} {} min",
                updated.date_str(),
                updated.sport,
                updated.duration_minutes
            ),
        );

        Ok(updated)
    }
}
