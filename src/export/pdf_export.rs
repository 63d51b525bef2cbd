// src/export/pdf_export.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, rows_to_table};
use crate::export::pdf::PdfManager;
use crate::export::{ExportOptions, notify_export_success};
use crate::models::OutputRow;
use crate::ui::messages::info;
use std::path::Path;

/// Export PDF usando PdfManager e la tabella generata.
pub(crate) fn export_pdf(rows: &[OutputRow], path: &Path, opts: &ExportOptions) -> AppResult<()> {
    info(format!("Exporting to PDF: {}", path.display()));

    let data_vec = rows_to_table(rows, &opts.date_format);

    let mut pdf = PdfManager::new();
    pdf.write_table(&opts.title, &HEADERS, &data_vec);

    pdf.save(path)
        .map_err(|e| AppError::Export(format!("PDF export error: {e}")))?;

    notify_export_success("PDF", path);
    Ok(())
}
