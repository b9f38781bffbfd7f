pub mod entry;
pub mod sport;
pub mod summary;

pub use entry::SessionEntry;
pub use sport::Sport;
pub use summary::{
    DailyLoad, PersonalRecord, PersonalRecords, SportBreakdown, WeekTotal, WeeklySummary,
};
