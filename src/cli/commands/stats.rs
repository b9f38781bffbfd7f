use crate::cli::parser::{Commands, StatsView};
use crate::config::Config;
use crate::core::aggregate::{
    daily_load, load_for_entry, multi_week_rollup, personal_records, week_start, weekly_summary,
};
use crate::errors::AppResult;
use crate::models::SessionEntry;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::ui::messages::{header, info};
use crate::utils::colors::{Palette, RESET};
use crate::utils::date::{current_month_bounds, parse_date_or_today};
use crate::utils::formatting::{mins2readable, separator};
use crate::utils::range::{contains, parse_period};
use crate::utils::table::{Column, Table};

const BAR_WIDTH: u64 = 40;
const MAX_ROLLUP_WEEKS: usize = 520;

pub fn handle(cmd: &Commands, cfg: &Config, settings: &Settings) -> AppResult<()> {
    if let Commands::Stats { view } = cmd {
        let store = RecordStore::from_config(cfg);
        let entries = store.load_all()?;
        let palette = Palette::for_dark_mode(settings.dark_mode);
        let default_rpe = settings.default_rpe();

        match view {
            StatsView::Daily { period } => {
                let bounds = match period {
                    Some(p) => parse_period(p)?,
                    None => Some(current_month_bounds()),
                };
                let selected: Vec<SessionEntry> = entries
                    .into_iter()
                    .filter(|e| contains(&bounds, e.date))
                    .collect();
                print_daily(&selected, default_rpe, &palette);
            }
            StatsView::Week { date } => {
                let day = parse_date_or_today(date.as_ref())?;
                print_week(&entries, day, default_rpe, cfg, &palette);
            }
            StatsView::Records => print_records(&entries, default_rpe, &palette),
            StatsView::Rollup { weeks, date } => {
                let as_of = parse_date_or_today(date.as_ref())?;
                let weeks = weeks.unwrap_or(cfg.rollup_weeks).clamp(1, MAX_ROLLUP_WEEKS);
                print_rollup(&entries, weeks, as_of, &palette);
            }
        }
    }

    Ok(())
}

fn print_daily(entries: &[SessionEntry], default_rpe: u8, palette: &Palette) {
    let days = daily_load(entries, default_rpe);
    if days.is_empty() {
        info("No sessions for the selected period.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("DATE", 10),
        Column::right("SESSIONS", 8),
        Column::right("MIN", 6),
        Column::right("LOAD", 6),
    ]);
    for d in &days {
        table.add_row(vec![
            d.date.format("%Y-%m-%d").to_string(),
            d.session_count.to_string(),
            d.minutes.to_string(),
            d.load.to_string(),
        ]);
    }

    header("Daily training load");
    print!("{}", colored_header(&table.render(), palette));
}

fn print_week(
    entries: &[SessionEntry],
    day: chrono::NaiveDate,
    default_rpe: u8,
    cfg: &Config,
    palette: &Palette,
) {
    let summary = weekly_summary(entries, week_start(day), default_rpe);

    header(format!(
        "Week {} - {}",
        summary.week_start,
        summary.week_end - chrono::Duration::days(1)
    ));
    println!(
        "{}Sessions:{} {}   {}Time:{} {}   {}Load:{} {}   {}Distance:{} {:.2} km",
        palette.accent,
        RESET,
        summary.sessions,
        palette.accent,
        RESET,
        mins2readable(i64::from(summary.minutes), false),
        palette.accent,
        RESET,
        summary.load,
        palette.accent,
        RESET,
        summary.distance_km
    );

    if summary.by_sport.is_empty() {
        info("No sessions logged this week.");
        return;
    }

    let mut table = Table::new(vec![
        Column::left("SPORT", 12),
        Column::right("SESSIONS", 8),
        Column::right("MIN", 6),
        Column::right("LOAD", 6),
    ]);
    for b in &summary.by_sport {
        table.add_row(vec![
            b.sport.clone(),
            b.sessions.to_string(),
            b.minutes.to_string(),
            b.load.to_string(),
        ]);
    }
    println!();
    print!("{}", colored_header(&table.render(), palette));

    println!("{}", separator(&cfg.separator_char, 60));
    for e in &summary.entries {
        println!(
            "{} {:<11} {:>4} min  load {:>4}",
            e.date_str(),
            e.sport.as_str(),
            e.duration_minutes,
            load_for_entry(e, default_rpe)
        );
        if !e.note.trim().is_empty() {
            let opts = textwrap::Options::new(70)
                .initial_indent("    ")
                .subsequent_indent("    ");
            for line in textwrap::wrap(&e.note, opts) {
                println!("{}{}{}", palette.muted, line, RESET);
            }
        }
    }
}

fn print_records(entries: &[SessionEntry], default_rpe: u8, palette: &Palette) {
    let records = personal_records(entries, default_rpe);

    header("Personal records");

    let describe = |label: &str, value: String, e: &SessionEntry| {
        println!(
            "{}{:<16}{} {:<12} {} {} (id {})",
            palette.accent,
            label,
            RESET,
            value,
            e.date_str(),
            e.sport,
            e.short_id()
        );
    };

    match &records.longest_session {
        Some(r) => describe("Longest session", format!("{} min", r.value), &r.entry),
        None => {
            info("No sessions logged yet.");
            return;
        }
    }
    if let Some(r) = &records.highest_load {
        describe("Highest load", r.value.to_string(), &r.entry);
    }
    if let Some(r) = &records.longest_run {
        describe("Longest run", format!("{} km", r.entry.distance_str()), &r.entry);
    }
}

fn print_rollup(entries: &[SessionEntry], weeks: usize, as_of: chrono::NaiveDate, palette: &Palette) {
    let totals = multi_week_rollup(entries, weeks, as_of);
    let max = u64::from(totals.iter().map(|w| w.minutes).max().unwrap_or(0).max(1));

    header(format!("Minutes per week (last {weeks})"));
    for w in &totals {
        let bar_len = (u64::from(w.minutes) * BAR_WIDTH).div_ceil(max) as usize;
        println!(
            "{}  {}{}{} {} ({} sessions)",
            w.week_start,
            palette.accent,
            "█".repeat(bar_len),
            RESET,
            mins2readable(i64::from(w.minutes), true),
            w.sessions
        );
    }
}

fn colored_header(rendered: &str, palette: &Palette) -> String {
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        if i == 0 {
            out.push_str(&format!("{}{}{}\n", palette.header, line, RESET));
        } else {
            out.push_str(line);
            out.push('\n');
        }
    }
    out
}
