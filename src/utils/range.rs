//! Period expressions shared by `list`, `stats daily` and `export`.

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

/// Parse a period into inclusive bounds.
///
/// Supported:
/// - `all`                 → `None` (no filtering)
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(AppError::InvalidPeriod(format!(
                "{p}: start and end must have same format"
            )));
        }

        let (d1, _) = single_bounds(start, p)?;
        let (_, d2) = single_bounds(end, p)?;

        if d2 < d1 {
            return Err(AppError::InvalidPeriod(format!("{p}: end before start")));
        }
        return Ok(Some((d1, d2)));
    }

    single_bounds(p, p).map(Some)
}

/// Filter helper: does `d` fall into the optional inclusive bounds?
pub fn contains(bounds: &Option<(NaiveDate, NaiveDate)>, d: NaiveDate) -> bool {
    match bounds {
        None => true,
        Some((start, end)) => d >= *start && d <= *end,
    }
}

fn single_bounds(r: &str, whole: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    let invalid = || AppError::InvalidPeriod(whole.to_string());

    match r.len() {
        // YYYY
        4 => {
            let y: i32 = r.parse().map_err(|_| invalid())?;
            let d1 = NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM
        7 => {
            let y: i32 = r.get(0..4).and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
            let m: u32 = r.get(5..7).and_then(|s| s.parse().ok()).ok_or_else(invalid)?;
            let last = month_last_day(y, m).ok_or_else(invalid)?;

            let d1 = NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(invalid)?;
            let d2 = NaiveDate::from_ymd_opt(y, m, last).ok_or_else(invalid)?;
            Ok((d1, d2))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(r, "%Y-%m-%d").map_err(|_| invalid())?;
            Ok((d, d))
        }
        _ => Err(invalid()),
    }
}
