// src/export/logic.rs

use crate::core::aggregate::{week_start, weekly_summary};
use crate::errors::{AppError, AppResult};
use crate::export::ExportFormat;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::EntryExport;
use crate::export::pdf_export::export_pdf;
use crate::export::report::{default_report_name, render_weekly_report};
use crate::export::xlsx::export_xlsx;
use crate::settings::Settings;
use crate::store::RecordStore;
use crate::store::log::record;
use crate::ui::messages::{success, warning};
use crate::utils::date::month_name;
use crate::utils::path::expand_tilde;
use crate::utils::range::{contains, parse_period};
use chrono::NaiveDate;
use std::path::PathBuf;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export the entries of a period.
    ///
    /// - `format`: csv | json | xlsx | pdf
    /// - `file`: absolute path of the output file
    /// - `range`: `None`, `"all"` or a period expression (see `utils::range`)
    pub fn export(
        store: &RecordStore,
        settings: &Settings,
        format: ExportFormat,
        file: &str,
        range: Option<&str>,
        force: bool,
    ) -> AppResult<Option<PathBuf>> {
        let path = expand_tilde(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "Output file path must be absolute: {file}"
            )));
        }

        let bounds = match range {
            None => None,
            Some(r) => parse_period(r)?,
        };

        let default_rpe = settings.default_rpe();
        let entries: Vec<EntryExport> = store
            .load_all()?
            .iter()
            .filter(|e| contains(&bounds, e.date))
            .map(|e| EntryExport::from_entry(e, default_rpe))
            .collect();

        if entries.is_empty() {
            warning("No sessions found for the selected range.");
            return Ok(None);
        }

        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        match format {
            ExportFormat::Csv => export_csv(&entries, &path)?,
            ExportFormat::Json => export_json(&entries, &path)?,
            ExportFormat::Xlsx => export_xlsx(&entries, &path)?,
            ExportFormat::Pdf => export_pdf(&entries, &path, &build_pdf_title(range))?,
        }

        record(
            store,
            "export",
            &path.to_string_lossy(),
            &format!("{} sessions as {}", entries.len(), format.as_str()),
        );

        Ok(Some(path))
    }
}

/// PDF title depending on the selected period.
fn build_pdf_title(period: Option<&str>) -> String {
    let Some(p) = period.filter(|p| !p.eq_ignore_ascii_case("all")) else {
        return "Training sessions".to_string();
    };

    match p.len() {
        // YYYY
        4 => format!("Training sessions for year {}", p),
        // YYYY-MM
        7 => match p.split_once('-') {
            Some((year, month)) => {
                format!("Training sessions for {} {}", month_name(month), year)
            }
            None => "Training sessions".to_string(),
        },
        // YYYY-MM-DD
        10 => format!("Training sessions on {}", p),
        _ => match p.split_once(':') {
            Some((from, to)) => format!("Training sessions from {} to {}", from, to),
            None => "Training sessions".to_string(),
        },
    }
}

/// Weekly report generation.
pub struct ReportLogic;

impl ReportLogic {
    /// Render the report of the week containing `day`.
    ///
    /// Without `file` the report is written to `Reports/week_<monday>.pdf`
    /// inside the data directory.
    pub fn weekly(
        store: &RecordStore,
        settings: &Settings,
        day: NaiveDate,
        file: Option<&str>,
        force: bool,
    ) -> AppResult<PathBuf> {
        let default_rpe = settings.default_rpe();
        let entries = store.load_all()?;
        let summary = weekly_summary(&entries, week_start(day), default_rpe);

        let path = match file {
            Some(f) => {
                let p = expand_tilde(f);
                if !p.is_absolute() {
                    return Err(AppError::Export(format!(
                        "Report file path must be absolute: {f}"
                    )));
                }
                p
            }
            None => store.report_dir().join(default_report_name(&summary)),
        };

        ensure_writable(&path, force)?;
        ensure_parent(&path)?;

        render_weekly_report(&summary, default_rpe, &path)?;

        record(
            store,
            "report",
            &path.to_string_lossy(),
            &format!(
                "Week of {}: {} sessions, load {}",
                summary.week_start, summary.sessions, summary.load
            ),
        );
        success(format!("Weekly report written: {}", path.display()));

        Ok(path)
    }
}
