//! Weekly report rendering.
//!
//! The renderer only sees a `WeeklySummary`: totals, the per-sport breakdown
//! and the week's entries. It does not read the store.

use crate::core::aggregate::load_for_entry;
use crate::errors::{AppError, AppResult};
use crate::export::pdf::PdfManager;
use crate::models::WeeklySummary;
use crate::models::entry::opt_to_string;
use crate::utils::formatting::{mins2readable, truncate};
use chrono::Duration;
use std::path::Path;

const NOTE_WIDTH: usize = 40;

/// Title used on every page of the report.
pub fn report_title(summary: &WeeklySummary) -> String {
    let last_day = summary.week_end - Duration::days(1);
    format!(
        "Training week {} - {}",
        summary.week_start.format("%Y-%m-%d"),
        last_day.format("%Y-%m-%d")
    )
}

/// Default file name for the report of a week.
pub fn default_report_name(summary: &WeeklySummary) -> String {
    format!("week_{}.pdf", summary.week_start.format("%Y-%m-%d"))
}

/// Render `summary` as a PDF at `path`.
pub fn render_weekly_report(
    summary: &WeeklySummary,
    default_rpe: u8,
    path: &Path,
) -> AppResult<()> {
    let mut pdf = PdfManager::new(&report_title(summary));

    pdf.heading("Totals");
    pdf.line(&format!("Sessions: {}", summary.sessions));
    pdf.line(&format!(
        "Time: {} ({} min)",
        mins2readable(i64::from(summary.minutes), false),
        summary.minutes
    ));
    pdf.line(&format!("Training load: {}", summary.load));
    pdf.line(&format!("Distance: {:.2} km", summary.distance_km));
    pdf.spacer(10.0);

    pdf.heading("By sport");
    if summary.by_sport.is_empty() {
        pdf.line("No sessions logged this week.");
    } else {
        let rows: Vec<Vec<String>> = summary
            .by_sport
            .iter()
            .map(|b| {
                vec![
                    b.sport.clone(),
                    b.sessions.to_string(),
                    b.minutes.to_string(),
                    b.load.to_string(),
                ]
            })
            .collect();
        pdf.write_table(&["Sport", "Sessions", "Minutes", "Load"], &rows);
    }
    pdf.spacer(10.0);

    if !summary.entries.is_empty() {
        pdf.heading("Sessions");
        let rows: Vec<Vec<String>> = summary
            .entries
            .iter()
            .map(|e| {
                vec![
                    e.date_str(),
                    e.sport.to_string(),
                    e.duration_minutes.to_string(),
                    opt_to_string(e.rpe),
                    load_for_entry(e, default_rpe).to_string(),
                    e.distance_str(),
                    opt_to_string(e.avg_heart_rate),
                    truncate(&e.note, NOTE_WIDTH),
                ]
            })
            .collect();
        pdf.write_table(
            &["Date", "Sport", "Min", "RPE", "Load", "Km", "HR", "Note"],
            &rows,
        );
    }

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF report error: {e}")))
}
