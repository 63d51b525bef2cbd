// src/import/spreadsheet.rs

use crate::errors::{AppError, AppResult};
use crate::import::RawTable;
use crate::import::cell::RawCell;
use calamine::{Data, DataType, Reader, open_workbook_auto};
use std::path::Path;

/// Read a worksheet (the first one unless `sheet` names another) with a header row.
pub fn read_spreadsheet(path: &Path, sheet: Option<&str>) -> AppResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let names = workbook.sheet_names();

    let name = match sheet {
        Some(s) if names.iter().any(|n| n == s) => s.to_string(),
        Some(s) => {
            return Err(AppError::Parse(format!(
                "worksheet '{s}' not found (available: {})",
                names.join(", ")
            )));
        }
        None => names
            .first()
            .cloned()
            .ok_or_else(|| AppError::Parse("workbook contains no worksheets".into()))?,
    };

    let range = workbook.worksheet_range(&name)?;
    let mut rows_iter = range.rows();

    let headers: Vec<String> = match rows_iter.next() {
        Some(row) => row.iter().map(|d| d.to_string().trim().to_string()).collect(),
        None => Vec::new(),
    };

    let rows: Vec<Vec<RawCell>> = rows_iter
        .map(|row| row.iter().map(cell_from).collect())
        .collect();

    tracing::debug!("read {} rows from worksheet '{name}'", rows.len());
    Ok(RawTable { headers, rows })
}

fn cell_from(data: &Data) -> RawCell {
    match data {
        Data::Empty => RawCell::Empty,
        Data::String(s) => RawCell::from_text(s),
        Data::Float(f) => RawCell::Number(*f),
        Data::Int(i) => RawCell::Number(*i as f64),
        Data::Bool(b) => RawCell::Bool(*b),
        Data::DateTime(_) | Data::DateTimeIso(_) => match data.as_date() {
            Some(d) => RawCell::Date(d),
            None => RawCell::from_text(&data.to_string()),
        },
        Data::DurationIso(s) => RawCell::from_text(s),
        Data::Error(e) => RawCell::Text(e.to_string()),
    }
}
