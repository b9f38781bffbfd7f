// src/export/model.rs

use crate::core::aggregate::load_for_entry;
use crate::models::SessionEntry;
use crate::models::entry::opt_to_string;
use serde::Serialize;

/// Flat view of an entry for CSV / JSON / XLSX / PDF export.
#[derive(Serialize, Clone, Debug)]
pub struct EntryExport {
    pub id: String,
    pub date: String,
    pub sport: String,
    pub duration_min: u32,
    pub calories: Option<u32>,
    pub distance_km: Option<f64>,
    pub rpe: Option<u8>,
    pub avg_hr: Option<u32>,
    pub load: u64,
    pub note: String,
}

impl EntryExport {
    pub fn from_entry(e: &SessionEntry, default_rpe: u8) -> Self {
        Self {
            id: e.id.clone(),
            date: e.date_str(),
            sport: e.sport.as_str().to_string(),
            duration_min: e.duration_minutes,
            calories: e.calories,
            distance_km: e.distance_km,
            rpe: e.rpe,
            avg_hr: e.avg_heart_rate,
            load: load_for_entry(e, default_rpe),
            note: e.note.clone(),
        }
    }
}

/// Header for CSV / JSON / XLSX / PDF
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "id",
        "date",
        "sport",
        "duration_min",
        "calories",
        "distance_km",
        "rpe",
        "avg_hr",
        "load",
        "note",
    ]
}

/// Convert an exported entry into a row of strings (XLSX / PDF).
pub(crate) fn entry_to_row(e: &EntryExport) -> Vec<String> {
    vec![
        e.id.clone(),
        e.date.clone(),
        e.sport.clone(),
        e.duration_min.to_string(),
        opt_to_string(e.calories),
        opt_to_string(e.distance_km),
        opt_to_string(e.rpe),
        opt_to_string(e.avg_hr),
        e.load.to_string(),
        e.note.clone(),
    ]
}

pub(crate) fn entries_to_table(entries: &[EntryExport]) -> Vec<Vec<String>> {
    entries.iter().map(entry_to_row).collect()
}
