//! Conversion of raw field strings into `SessionEntry` values.
//!
//! There are two separate paths:
//! - [`parse_row`] is lenient and never fails. It is used for rows read back
//!   from the log file: bad dates fall back to today, malformed optional
//!   numbers become absent.
//! - [`NewEntry::validate`] is strict and is used for user input: any invalid
//!   field is rejected with an error naming it, and nothing gets persisted.

use crate::errors::{AppError, AppResult};
use crate::models::{SessionEntry, Sport};
use crate::utils::date;
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

static WHOLE_NUMBER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+$").expect("valid whole-number pattern"));

static STRICT_DISTANCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d*(?:[.,]\d+)?$").expect("valid distance pattern"));

/// Column order of the persisted log.
pub const COL_ID: usize = 0;
pub const COL_DATE: usize = 1;
pub const COL_SPORT: usize = 2;
pub const COL_DURATION: usize = 3;
pub const COL_CALORIES: usize = 4;
pub const COL_DISTANCE: usize = 5;
pub const COL_RPE: usize = 6;
pub const COL_AVG_HR: usize = 7;
pub const COL_NOTE: usize = 8;

// ---------------------------------------------------------------------------
// Lenient path (load)
// ---------------------------------------------------------------------------

/// Build an entry from one row of the log. Never fails.
///
/// Missing trailing fields are treated as absent. A row without an id gets a
/// fresh one so ids stay unique across the loaded set.
pub fn parse_row<S: AsRef<str>>(fields: &[S]) -> SessionEntry {
    let field = |idx: usize| fields.get(idx).map(|f| f.as_ref()).unwrap_or("");

    let id = match field(COL_ID).trim() {
        "" => SessionEntry::new_id(),
        other => other.to_string(),
    };

    SessionEntry {
        id,
        date: lenient_date(field(COL_DATE)),
        sport: Sport::from_stored(field(COL_SPORT).trim()),
        duration_minutes: whole_number(field(COL_DURATION)).unwrap_or(0),
        calories: whole_number(field(COL_CALORIES)),
        distance_km: lenient_distance(field(COL_DISTANCE)),
        rpe: whole_number(field(COL_RPE)).and_then(normalize_rpe),
        avg_heart_rate: whole_number(field(COL_AVG_HR)),
        note: field(COL_NOTE).to_string(),
    }
}

/// Parse a stored date, falling back to today on failure.
pub fn lenient_date(raw: &str) -> NaiveDate {
    let raw = raw.trim();

    if let Some(d) = date::parse_date(raw) {
        return d;
    }

    // Tolerate a trailing time-of-day ("2024-01-01 00:00:00", "2024-01-01T07:30")
    raw.get(..10)
        .and_then(date::parse_date)
        .unwrap_or_else(date::today)
}

/// A value is present only if it is a whole number that fits the target type.
fn whole_number<T: std::str::FromStr>(raw: &str) -> Option<T> {
    let raw = raw.trim();
    if WHOLE_NUMBER.is_match(raw) {
        raw.parse().ok()
    } else {
        None
    }
}

/// Real number accepting ',' as decimal separator. Negative values are absent.
fn lenient_distance(raw: &str) -> Option<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    raw.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|km| km.is_finite() && *km >= 0.0)
}

/// RPE 0 means "not rated" and is coalesced to absent; values above 10 are dropped.
fn normalize_rpe(v: u32) -> Option<u8> {
    match v {
        1..=10 => Some(v as u8),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Strict path (create / edit)
// ---------------------------------------------------------------------------

/// Raw, user-entered fields of a session. Optional fields left empty are absent.
#[derive(Debug, Clone, Default)]
pub struct NewEntry {
    pub date: String,
    pub sport: String,
    pub duration: String,
    pub calories: Option<String>,
    pub distance: Option<String>,
    pub rpe: Option<String>,
    pub avg_heart_rate: Option<String>,
    pub note: Option<String>,
}

impl NewEntry {
    /// Validate every field and build a new entry with a fresh id.
    pub fn validate(&self) -> AppResult<SessionEntry> {
        self.validate_with_id(SessionEntry::new_id())
    }

    /// Validate every field, keeping an existing id (edit flow).
    pub fn validate_with_id(&self, id: String) -> AppResult<SessionEntry> {
        let date = date::parse_date(self.date.trim())
            .ok_or_else(|| AppError::InvalidDate(self.date.clone()))?;

        let sport =
            Sport::from_name(&self.sport).ok_or_else(|| AppError::InvalidSport(self.sport.clone()))?;

        let duration_minutes: u32 = strict_whole("duration", Some(self.duration.as_str()))?
            .ok_or_else(|| AppError::invalid("duration", "a whole number of minutes >= 1"))?;
        if duration_minutes < 1 {
            return Err(AppError::invalid("duration", "a whole number of minutes >= 1"));
        }

        let calories = strict_whole("calories", self.calories.as_deref())?;
        let avg_heart_rate = strict_whole("avg_hr", self.avg_heart_rate.as_deref())?;

        let rpe = match strict_whole::<u32>("rpe", self.rpe.as_deref())? {
            None | Some(0) => None,
            Some(v @ 1..=10) => Some(v as u8),
            Some(_) => return Err(AppError::invalid("rpe", "a whole number between 1 and 10")),
        };

        let distance_km = strict_distance(self.distance.as_deref())?;

        Ok(SessionEntry {
            id,
            date,
            sport,
            duration_minutes,
            calories,
            distance_km,
            rpe,
            avg_heart_rate,
            note: self.note.clone().unwrap_or_default(),
        })
    }

    /// Rebuild the raw form of an existing entry (used to merge edits).
    pub fn from_entry(e: &SessionEntry) -> Self {
        use crate::models::entry::opt_to_string;

        let optional = |s: String| if s.is_empty() { None } else { Some(s) };

        Self {
            date: e.date_str(),
            sport: e.sport.as_str().to_string(),
            duration: e.duration_minutes.to_string(),
            calories: optional(opt_to_string(e.calories)),
            distance: optional(e.distance_str()),
            rpe: optional(opt_to_string(e.rpe)),
            avg_heart_rate: optional(opt_to_string(e.avg_heart_rate)),
            note: Some(e.note.clone()),
        }
    }
}

fn strict_whole<T: std::str::FromStr>(
    field: &'static str,
    raw: Option<&str>,
) -> AppResult<Option<T>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if !WHOLE_NUMBER.is_match(raw) {
        return Err(AppError::invalid(field, "a non-negative whole number"));
    }

    raw.parse()
        .map(Some)
        .map_err(|_| AppError::invalid(field, "a non-negative whole number"))
}

fn strict_distance(raw: Option<&str>) -> AppResult<Option<f64>> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if !STRICT_DISTANCE.is_match(raw) || !raw.chars().any(|c| c.is_ascii_digit()) {
        return Err(AppError::invalid("distance", "a number such as 5, 5.2 or 5,2"));
    }

    raw.replace(',', ".")
        .parse::<f64>()
        .map(Some)
        .map_err(|_| AppError::invalid("distance", "a number such as 5, 5.2 or 5,2"))
}
