use super::RecordStore;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use std::fs::OpenOptions;

/// One line of the activity log.
#[derive(Debug, Clone)]
pub struct LogLine {
    pub date: String,
    pub operation: String,
    pub target: String,
    pub message: String,
}

/// Append an activity line (`date, operation, target, message`).
pub fn ttlog(store: &RecordStore, operation: &str, target: &str, message: &str) -> AppResult<()> {
    // Timestamp locale, ISO 8601
    let now = Local::now().to_rfc3339();

    std::fs::create_dir_all(&store.base_dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(store.activity_log_path())?;

    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    wtr.write_record([now.as_str(), operation, target, message])?;
    wtr.flush()?;

    Ok(())
}

/// Like [`ttlog`], but a failure only prints a warning: logging never aborts
/// the command that triggered it.
pub fn record(store: &RecordStore, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(store, operation, target, message) {
        warning(format!("Failed to write activity log: {e}"));
    }
}

/// Read back every activity line, oldest first.
pub fn read_all(store: &RecordStore) -> AppResult<Vec<LogLine>> {
    let path = store.activity_log_path();
    if !path.exists() {
        return Ok(Vec::new());
    }

    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut out = Vec::new();
    for rec in rdr.records() {
        let rec = rec?;
        let get = |i: usize| rec.get(i).unwrap_or("").to_string();
        out.push(LogLine {
            date: get(0),
            operation: get(1),
            target: get(2),
            message: get(3),
        });
    }
    Ok(out)
}
