use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::store::RecordStore;
use crate::store::log::record;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Delete one entry by id (or unique id prefix) through a full rewrite.
    /// The store takes a backup before rewriting.
    pub fn apply(store: &RecordStore, id: &str) -> AppResult<SessionEntry> {
        let full_id = store.resolve_id(id)?;
        let removed = store.delete(&full_id)?;

        record(
            store,
            "del",
            &removed.id,
            &format!(
                "{} {} {} min",
                removed.date_str(),
                removed.sport,
                removed.duration_minutes
            ),
        );

        Ok(removed)
    }
}
