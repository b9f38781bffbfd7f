use super::sport::Sport;
use chrono::NaiveDate;

/// One logged workout.
///
/// Entries are never mutated once persisted: edits and deletions go through
/// a full rewrite of the log (see `RecordStore::rewrite_all`).
#[derive(Debug, Clone, PartialEq)]
pub struct SessionEntry {
    pub id: String,               // ⇔ Id (opaque, uuid v4 for new entries)
    pub date: NaiveDate,          // ⇔ Date ("YYYY-MM-DD")
    pub sport: Sport,             // ⇔ Sport
    pub duration_minutes: u32,    // ⇔ DurationMin
    pub calories: Option<u32>,    // ⇔ Calories
    pub distance_km: Option<f64>, // ⇔ DistanceKm
    pub rpe: Option<u8>,          // ⇔ RPE (1..=10, 0 is stored as absent)
    pub avg_heart_rate: Option<u32>, // ⇔ AvgHR
    pub note: String,             // ⇔ Note (verbatim)
}

impl SessionEntry {
    /// Generate a fresh opaque identifier.
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Short form of the id for tables (first 8 characters).
    pub fn short_id(&self) -> &str {
        match self.id.char_indices().nth(8) {
            Some((idx, _)) => &self.id[..idx],
            None => &self.id,
        }
    }

    /// Distance formatted with a dot as decimal separator, empty when absent.
    pub fn distance_str(&self) -> String {
        self.distance_km.map(format_km).unwrap_or_default()
    }
}

/// Shortest lossless rendering of a distance ("5", "5.25").
pub fn format_km(km: f64) -> String {
    km.to_string()
}

pub(crate) fn opt_to_string<T: ToString>(v: Option<T>) -> String {
    v.map(|x| x.to_string()).unwrap_or_default()
}
