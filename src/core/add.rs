use crate::core::parse::NewEntry;
use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::store::RecordStore;
use crate::store::log::record;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Validate the raw input and append the resulting entry.
    ///
    /// Validation happens before the store is touched: an invalid field
    /// leaves the log exactly as it was.
    pub fn apply(store: &RecordStore, input: &NewEntry) -> AppResult<SessionEntry> {
        let entry = input.validate()?;

        store.append(&entry)?;

        record(
            store,
            "add",
            &entry.id,
            &format!(
                "{} {} {} min",
                entry.date_str(),
                entry.sport,
                entry.duration_minutes
            ),
        );

        Ok(entry)
    }
}
