//! Record store: the on-disk training log.
//!
//! Layout under the base directory:
//!
//! ```text
//! <base>/training_log.csv   header + one row per session
//! <base>/settings.json      user preferences
//! <base>/trainlog.log       activity log
//! <base>/Backups/           timestamped copies taken before every rewrite
//! <base>/Reports/           generated weekly reports
//! ```

pub mod backup;
pub mod log;
pub mod row;

use crate::config::Config;
use crate::core::parse::parse_row;
use crate::errors::{AppError, AppResult};
use crate::models::SessionEntry;
use std::fs::{self, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

pub const BACKUP_DIR: &str = "Backups";
pub const REPORT_DIR: &str = "Reports";
pub const SETTINGS_FILE: &str = "settings.json";
pub const ACTIVITY_LOG_FILE: &str = "trainlog.log";

#[derive(Debug, Clone)]
pub struct RecordStore {
    pub base_dir: PathBuf,
    pub log_path: PathBuf,
}

impl RecordStore {
    /// Store rooted at `base_dir`, using the default log file name.
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Self {
        Self::with_log_file(base_dir, "training_log.csv")
    }

    pub fn with_log_file<P: AsRef<Path>>(base_dir: P, log_file: &str) -> Self {
        let base_dir = base_dir.as_ref().to_path_buf();
        let log_path = base_dir.join(log_file);
        Self { base_dir, log_path }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::with_log_file(cfg.data_path(), &cfg.log_file)
    }

    pub fn backup_dir(&self) -> PathBuf {
        self.base_dir.join(BACKUP_DIR)
    }

    pub fn report_dir(&self) -> PathBuf {
        self.base_dir.join(REPORT_DIR)
    }

    pub fn settings_path(&self) -> PathBuf {
        self.base_dir.join(SETTINGS_FILE)
    }

    pub fn activity_log_path(&self) -> PathBuf {
        self.base_dir.join(ACTIVITY_LOG_FILE)
    }

    /// Create the base, report and backup directories and a header-only log
    /// file if any of them is missing. Safe to call repeatedly.
    pub fn ensure_storage(&self) -> AppResult<()> {
        fs::create_dir_all(&self.base_dir)?;
        fs::create_dir_all(self.report_dir())?;
        fs::create_dir_all(self.backup_dir())?;

        if !self.log_path.exists() {
            let file = fs::File::create(&self.log_path)?;
            let mut wtr = row::writer(file);
            row::write_header(&mut wtr)?;
            wtr.flush()?;
        }

        Ok(())
    }

    /// Read every row, sorted ascending by date (file order within a day).
    ///
    /// Rows are parsed leniently: a malformed row is coerced, never rejected.
    /// A missing log file reads as an empty set, and a file whose header line
    /// was lost still yields its first row.
    pub fn load_all(&self) -> AppResult<Vec<SessionEntry>> {
        if !self.log_path.exists() {
            return Ok(Vec::new());
        }

        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.log_path)?;

        let mut entries = Vec::new();
        for (idx, record) in rdr.byte_records().enumerate() {
            let record = record?;
            let fields: Vec<String> = record
                .iter()
                .map(|f| String::from_utf8_lossy(f).into_owned())
                .collect();

            if idx == 0 && is_header(&fields) {
                continue;
            }

            if fields.iter().all(|f| f.trim().is_empty()) {
                continue;
            }

            entries.push(parse_row(&fields));
        }

        entries.sort_by_key(|e| e.date);
        Ok(entries)
    }

    /// Append one entry as a single row. Existing content is never rewritten.
    pub fn append(&self, entry: &SessionEntry) -> AppResult<()> {
        if !self.log_path.exists() {
            self.ensure_storage()?;
        }

        let mut file = OpenOptions::new()
            .read(true)
            .append(true)
            .open(&self.log_path)?;

        let empty = file.metadata()?.len() == 0;

        // A hand-edited file may lack the final newline.
        if !empty && !ends_with_newline(&mut file)? {
            file.write_all(b"\n")?;
        }

        let mut wtr = row::writer(file);
        if empty {
            row::write_header(&mut wtr)?;
        }
        row::write_entry(&mut wtr, entry)?;
        wtr.flush()?;
        Ok(())
    }

    /// Replace the whole log with `entries`, in the given order.
    ///
    /// A backup of the current file is always taken first; if it fails the
    /// log is left untouched. The new content goes to a temp file that is then
    /// renamed over the log.
    pub fn rewrite_all(&self, entries: &[SessionEntry]) -> AppResult<PathBuf> {
        let backup = self.backup()?;

        let tmp = self.log_path.with_extension("csv.tmp");
        {
            let file = fs::File::create(&tmp)?;
            let mut wtr = row::writer(file);
            row::write_header(&mut wtr)?;
            for e in entries {
                row::write_entry(&mut wtr, e)?;
            }
            wtr.flush()?;
        }
        fs::rename(&tmp, &self.log_path)?;

        Ok(backup)
    }

    pub fn find(&self, id: &str) -> AppResult<SessionEntry> {
        self.load_all()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))
    }

    /// Remove the entry with `id` by rewriting the log without it.
    /// Returns the removed entry.
    pub fn delete(&self, id: &str) -> AppResult<SessionEntry> {
        let mut entries = self.load_all()?;
        let pos = entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EntryNotFound(id.to_string()))?;

        let removed = entries.remove(pos);
        self.rewrite_all(&entries)?;
        Ok(removed)
    }

    /// Swap the entry sharing `updated.id` for `updated`, keeping its position.
    pub fn replace(&self, updated: SessionEntry) -> AppResult<()> {
        let mut entries = self.load_all()?;
        let slot = entries
            .iter_mut()
            .find(|e| e.id == updated.id)
            .ok_or_else(|| AppError::EntryNotFound(updated.id.clone()))?;

        *slot = updated;
        entries.sort_by_key(|e| e.date);
        self.rewrite_all(&entries)?;
        Ok(())
    }

    /// Resolve a full id from a unique prefix (as shown in `list`).
    pub fn resolve_id(&self, prefix: &str) -> AppResult<String> {
        let entries = self.load_all()?;

        if let Some(e) = entries.iter().find(|e| e.id == prefix) {
            return Ok(e.id.clone());
        }

        let mut matches = entries.iter().filter(|e| e.id.starts_with(prefix));
        match (matches.next(), matches.next()) {
            (Some(e), None) if !prefix.is_empty() => Ok(e.id.clone()),
            (Some(_), Some(_)) => Err(AppError::Other(format!(
                "Id prefix '{prefix}' is ambiguous, use more characters"
            ))),
            _ => Err(AppError::EntryNotFound(prefix.to_string())),
        }
    }
}

fn is_header(fields: &[String]) -> bool {
    fields
        .first()
        .map(|f| f.trim_start_matches('\u{feff}').trim())
        .is_some_and(|f| f.eq_ignore_ascii_case(row::HEADER[0]))
}

fn ends_with_newline(file: &mut fs::File) -> AppResult<bool> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
