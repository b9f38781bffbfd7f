//! Aggregation engine: derived views over a set of entries.
//!
//! Every function here is pure. The default RPE used for unrated sessions is
//! always passed in explicitly (it comes from `Settings`). An empty input
//! yields empty or zero results, never an error.
//!
//! Loads are `u64` (a `u32` duration times an RPE of at most 10 always fits);
//! all running totals saturate instead of overflowing.

use crate::models::{
    DailyLoad, PersonalRecord, PersonalRecords, SessionEntry, SportBreakdown, WeekTotal,
    WeeklySummary,
};
use chrono::{Datelike, Days, Duration, NaiveDate};
use std::collections::BTreeMap;

/// Training load of one session: `duration × effective RPE`.
///
/// The effective RPE is the entry's own RPE when present and > 0, otherwise
/// `default_rpe`.
pub fn load_for_entry(entry: &SessionEntry, default_rpe: u8) -> u64 {
    let rpe = match entry.rpe {
        Some(r) if r > 0 => r,
        _ => default_rpe,
    };
    u64::from(entry.duration_minutes).saturating_mul(u64::from(rpe))
}

/// Per-day totals, ascending by date.
pub fn daily_load(entries: &[SessionEntry], default_rpe: u8) -> Vec<DailyLoad> {
    let mut by_day: BTreeMap<NaiveDate, DailyLoad> = BTreeMap::new();

    for e in entries {
        let day = by_day.entry(e.date).or_insert_with(|| DailyLoad {
            date: e.date,
            load: 0,
            minutes: 0,
            session_count: 0,
        });
        day.load = day.load.saturating_add(load_for_entry(e, default_rpe));
        day.minutes = day.minutes.saturating_add(e.duration_minutes);
        day.session_count = day.session_count.saturating_add(1);
    }

    by_day.into_values().collect()
}

/// Monday on or before `date`. Sunday is the 7th day of the week.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = date.weekday().num_days_from_monday();
    date - Duration::days(i64::from(offset))
}

/// Totals for the week `[week_start, week_start + 7 days)`.
///
/// `week_start` is used as given; callers normally pass the result of
/// [`week_start`].
pub fn weekly_summary(
    entries: &[SessionEntry],
    week_start: NaiveDate,
    default_rpe: u8,
) -> WeeklySummary {
    let week_end = week_start + Duration::days(7);

    let mut week: Vec<SessionEntry> = entries
        .iter()
        .filter(|e| e.date >= week_start && e.date < week_end)
        .cloned()
        .collect();
    week.sort_by_key(|e| e.date);

    let mut summary = WeeklySummary {
        week_start,
        week_end,
        sessions: 0,
        minutes: 0,
        load: 0,
        distance_km: 0.0,
        by_sport: Vec::new(),
        entries: Vec::new(),
    };

    for e in &week {
        let load = load_for_entry(e, default_rpe);

        summary.sessions = summary.sessions.saturating_add(1);
        summary.minutes = summary.minutes.saturating_add(e.duration_minutes);
        summary.load = summary.load.saturating_add(load);
        if let Some(km) = e.distance_km {
            summary.distance_km += km;
        }

        let label = e.sport.as_str();
        match summary.by_sport.iter_mut().find(|b| b.sport == label) {
            Some(b) => {
                b.sessions = b.sessions.saturating_add(1);
                b.minutes = b.minutes.saturating_add(e.duration_minutes);
                b.load = b.load.saturating_add(load);
            }
            None => summary.by_sport.push(SportBreakdown {
                sport: label.to_string(),
                sessions: 1,
                minutes: e.duration_minutes,
                load,
            }),
        }
    }

    // stable: equal minutes keep first-seen order
    summary.by_sport.sort_by(|a, b| b.minutes.cmp(&a.minutes));
    summary.entries = week;
    summary
}

/// Best values across the whole set.
///
/// Ties go to the first entry in date order (file order within a day).
pub fn personal_records(entries: &[SessionEntry], default_rpe: u8) -> PersonalRecords {
    let mut ordered: Vec<&SessionEntry> = entries.iter().collect();
    ordered.sort_by_key(|e| e.date);

    let mut records = PersonalRecords::default();

    for e in ordered {
        if records
            .longest_session
            .as_ref()
            .is_none_or(|r| e.duration_minutes > r.value)
        {
            records.longest_session = Some(PersonalRecord {
                entry: e.clone(),
                value: e.duration_minutes,
            });
        }

        let load = load_for_entry(e, default_rpe);
        if records.highest_load.as_ref().is_none_or(|r| load > r.value) {
            records.highest_load = Some(PersonalRecord {
                entry: e.clone(),
                value: load,
            });
        }

        if let (true, Some(km)) = (e.sport.is_running(), e.distance_km)
            && records.longest_run.as_ref().is_none_or(|r| km > r.value)
        {
            records.longest_run = Some(PersonalRecord {
                entry: e.clone(),
                value: km,
            });
        }
    }

    records
}

/// Minutes per week for the `week_count` weeks ending with the week of `as_of`,
/// oldest first. Weeks without sessions report zero.
///
/// Weeks that would start before the first representable date are left out.
pub fn multi_week_rollup(
    entries: &[SessionEntry],
    week_count: usize,
    as_of: NaiveDate,
) -> Vec<WeekTotal> {
    let last = week_start(as_of);
    let reachable = usize::try_from((last - NaiveDate::MIN).num_weeks())
        .map_or(usize::MAX, |w| w.saturating_add(1));

    (0..week_count.min(reachable))
        .rev()
        .filter_map(|back| {
            let start = last.checked_sub_days(Days::new((back as u64).saturating_mul(7)))?;
            let end = start.checked_add_days(Days::new(7));

            Some(
                entries
                    .iter()
                    .filter(|e| e.date >= start && end.is_none_or(|end| e.date < end))
                    .fold(
                        WeekTotal {
                            week_start: start,
                            minutes: 0,
                            sessions: 0,
                        },
                        |mut acc, e| {
                            acc.minutes = acc.minutes.saturating_add(e.duration_minutes);
                            acc.sessions = acc.sessions.saturating_add(1);
                            acc
                        },
                    ),
            )
        })
        .collect()
}
