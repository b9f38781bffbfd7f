use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::load_for_entry;
use crate::errors::{AppError, AppResult};
use crate::models::{SessionEntry, Sport};
use crate::models::entry::opt_to_string;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::ui::messages::info;
use crate::utils::colors::{Palette, RESET, color_for_rpe};
use crate::utils::date::{current_month_bounds, weekday_short};
use crate::utils::formatting::{mins2readable, separator};
use crate::utils::range::{contains, parse_period};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config, settings: &Settings) -> AppResult<()> {
    if let Commands::List { period, sport } = cmd {
        let store = RecordStore::from_config(cfg);

        let bounds = resolve_period(period.as_deref())?;
        let sport_filter = match sport {
            Some(s) => Some(Sport::from_name(s).ok_or_else(|| AppError::InvalidSport(s.clone()))?),
            None => None,
        };

        let entries: Vec<SessionEntry> = store
            .load_all()?
            .into_iter()
            .filter(|e| contains(&bounds, e.date))
            .filter(|e| sport_filter.as_ref().is_none_or(|s| &e.sport == s))
            .collect();

        if entries.is_empty() {
            info("No sessions for the selected period.");
            return Ok(());
        }

        print_entries(&entries, cfg, settings);
    }

    Ok(())
}

fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    match period {
        Some(p) => parse_period(p),
        None => Ok(Some(current_month_bounds())),
    }
}

fn print_entries(entries: &[SessionEntry], cfg: &Config, settings: &Settings) {
    let palette = Palette::for_dark_mode(settings.dark_mode);
    let default_rpe = settings.default_rpe();

    let mut table = Table::new(vec![
        Column::left("ID", 8),
        Column::left("DATE", if cfg.show_weekday { 14 } else { 10 }),
        Column::left("SPORT", 11),
        Column::right("MIN", 5),
        Column::right("RPE", 3),
        Column::right("LOAD", 5),
        Column::right("KM", 6),
        Column::right("KCAL", 5),
        Column::right("HR", 4),
        Column::left("NOTE", 30),
    ]);

    for e in entries {
        let date = if cfg.show_weekday {
            format!("{} {}", weekday_short(&e.date), e.date_str())
        } else {
            e.date_str()
        };

        table.add_row(vec![
            e.short_id().to_string(),
            date,
            e.sport.to_string(),
            e.duration_minutes.to_string(),
            opt_to_string(e.rpe),
            load_for_entry(e, default_rpe).to_string(),
            e.distance_str(),
            opt_to_string(e.calories),
            opt_to_string(e.avg_heart_rate),
            e.note.replace(['\n', '\r'], " "),
        ]);
    }

    let rendered = table.render();
    let mut lines = rendered.lines();
    if let Some(head) = lines.next() {
        println!("  {}{}{}", palette.header, head, RESET);
    }
    for (line, e) in lines.zip(entries) {
        // a colored marker in front keeps the table alignment intact
        println!("{}▌{} {}", color_for_rpe(e.rpe), RESET, line);
    }

    let total_min = entries
        .iter()
        .fold(0u32, |acc, e| acc.saturating_add(e.duration_minutes));
    let total_load = entries
        .iter()
        .fold(0u64, |acc, e| acc.saturating_add(load_for_entry(e, default_rpe)));

    println!("{}", separator(&cfg.separator_char, 60));
    println!(
        "{}{} sessions | {} | load {}{}",
        palette.accent,
        entries.len(),
        mins2readable(i64::from(total_min), false),
        total_load,
        RESET
    );
}
