//! Derived views computed by the aggregation engine. None of these are persisted.

use super::entry::SessionEntry;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyLoad {
    pub date: NaiveDate,
    pub load: u64,
    pub minutes: u32,
    pub session_count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportBreakdown {
    pub sport: String,
    pub sessions: u32,
    pub minutes: u32,
    pub load: u64,
}

/// Totals for the week `[week_start, week_end)`.
#[derive(Debug, Clone)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub sessions: u32,
    pub minutes: u32,
    pub load: u64,
    pub distance_km: f64,
    pub by_sport: Vec<SportBreakdown>,
    pub entries: Vec<SessionEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeekTotal {
    pub week_start: NaiveDate,
    pub minutes: u32,
    pub sessions: u32,
}

#[derive(Debug, Clone)]
pub struct PersonalRecord<T> {
    pub entry: SessionEntry,
    pub value: T,
}

#[derive(Debug, Clone, Default)]
pub struct PersonalRecords {
    pub longest_session: Option<PersonalRecord<u32>>,
    pub highest_load: Option<PersonalRecord<u64>>,
    pub longest_run: Option<PersonalRecord<f64>>,
}
