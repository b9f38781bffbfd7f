// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{entries_to_table, get_headers};
use crate::export::pdf::PdfManager;
use crate::export::{EntryExport, notify_export_success};
use crate::ui::messages::info;
use std::path::Path;

/// Export the entry table as a PDF document.
pub(crate) fn export_pdf(entries: &[EntryExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    // the id column is too wide for A4, the short form is enough on paper
    let headers: Vec<&str> = get_headers();
    let mut rows = entries_to_table(entries);
    for row in &mut rows {
        if let Some(id) = row.first_mut() {
            *id = id.chars().take(8).collect();
        }
    }

    let mut pdf = PdfManager::new(title);
    pdf.write_table(&headers, &rows);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
