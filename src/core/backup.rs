use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::store::log::record;
use crate::utils::path::expand_tilde;
use std::path::PathBuf;

pub struct BackupLogic;

impl BackupLogic {
    /// Manual backup.
    ///
    /// Without `dest` a timestamped copy goes to the store's backup directory.
    /// With `dest` (absolute path required) the log is copied there, and
    /// zipped when `compress` is set.
    pub fn backup(store: &RecordStore, dest: Option<&str>, compress: bool) -> AppResult<PathBuf> {
        let final_path = match dest {
            None => store.backup()?,
            Some(file) => {
                let path = expand_tilde(file);
                if !path.is_absolute() {
                    return Err(AppError::Other(format!(
                        "Backup file path must be absolute: {file}"
                    )));
                }
                store.backup_to(&path, compress)?
            }
        };

        record(
            store,
            "backup",
            &final_path.to_string_lossy(),
            if compress {
                "Backup created and compressed"
            } else {
                "Backup created"
            },
        );

        Ok(final_path)
    }
}
