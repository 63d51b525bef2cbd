// src/import/mod.rs

mod cell;
mod delimited;
pub mod schema;
mod spreadsheet;

pub use cell::RawCell;
pub use delimited::read_delimited;
pub use schema::ColumnMap;
pub use spreadsheet::read_spreadsheet;

use crate::errors::{AppError, AppResult};
use crate::models::Entry;
use crate::utils::path::extension_of;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Header plus untyped data rows, as produced by either reader.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<RawCell>>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputFormat {
    Delimited,
    Spreadsheet,
}

impl InputFormat {
    pub fn from_path(path: &Path) -> AppResult<Self> {
        match extension_of(path).as_str() {
            "csv" | "txt" => Ok(InputFormat::Delimited),
            "xlsx" | "xlsm" | "xlsb" | "xls" | "ods" => Ok(InputFormat::Spreadsheet),
            "" => Err(AppError::InvalidInputFormat(format!(
                "{} has no file extension",
                path.display()
            ))),
            other => Err(AppError::InvalidInputFormat(other.to_string())),
        }
    }
}

/// How to read the input file.
#[derive(Clone, Debug)]
pub struct LoadOptions {
    pub delimiter: u8,
    pub sheet: Option<String>,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            sheet: None,
        }
    }
}

/// Read `path` and validate every row against the input schema.
pub fn load_entries(path: &Path, opts: &LoadOptions) -> AppResult<Vec<Entry>> {
    let table = match InputFormat::from_path(path)? {
        InputFormat::Delimited => {
            let file = File::open(path)?;
            read_delimited(BufReader::new(file), opts.delimiter)?
        }
        InputFormat::Spreadsheet => read_spreadsheet(path, opts.sheet.as_deref())?,
    };

    entries_from_table(&table)
}

/// Typed entries from a raw table.
///
/// Blank rows are skipped, and so are completed rows whose values do not parse.
/// An invalid value in an open row is an error.
pub fn entries_from_table(table: &RawTable) -> AppResult<Vec<Entry>> {
    let columns = ColumnMap::resolve(&table.headers)?;
    if !columns.has_remark() {
        tracing::debug!("input has no '{}' column", schema::COL_REMARK);
    }

    let mut entries = Vec::with_capacity(table.rows.len());
    for (idx, cells) in table.rows.iter().enumerate() {
        if cells.iter().all(RawCell::is_empty) {
            continue;
        }
        // +1 for the header, +1 for 1-based numbering
        let row = idx + 2;
        match columns.entry_from(row, cells) {
            Ok(entry) => entries.push(entry),
            // completed rows never reach the summary, so their values are not checked
            Err(e) if !columns.is_open(cells) => {
                tracing::debug!("skipping completed row {row}: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!("loaded {} entries", entries.len());
    Ok(entries)
}
