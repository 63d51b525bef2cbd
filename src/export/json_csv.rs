// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::model::{HEADERS, SummaryExport, row_to_strings};
use crate::export::{ExportOptions, notify_export_success};
use crate::models::OutputRow;
use crate::ui::messages::info;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Export JSON pretty-printed.
pub(crate) fn export_json(rows: &[OutputRow], path: &Path, opts: &ExportOptions) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let data: Vec<SummaryExport> = rows
        .iter()
        .map(|r| SummaryExport::from_row(r, &opts.date_format))
        .collect();
    let json_data = serde_json::to_string_pretty(&data)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export CSV (header always written, even for an empty summary).
pub(crate) fn export_csv(rows: &[OutputRow], path: &Path, opts: &ExportOptions) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let file = File::create(path)?;
    let mut out = BufWriter::new(file);
    write_csv(rows, opts, &mut out)?;
    out.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

/// Serialize the summary as delimited text into any writer.
pub fn write_csv<W: Write>(rows: &[OutputRow], opts: &ExportOptions, mut out: W) -> AppResult<()> {
    if opts.bom {
        out.write_all(UTF8_BOM)?;
    }

    let mut wtr = csv::WriterBuilder::new()
        .delimiter(opts.delimiter)
        .from_writer(out);

    wtr.write_record(HEADERS)?;
    for row in rows {
        wtr.write_record(row_to_strings(row, &opts.date_format))?;
    }

    wtr.flush()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;
    Ok(())
}
