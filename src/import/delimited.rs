// src/import/delimited.rs

use crate::errors::{AppError, AppResult};
use crate::import::RawTable;
use crate::import::cell::RawCell;
use crate::utils::encoding::decode_cp1252;
use std::io::Read;

/// Read delimiter-separated text with a header row.
///
/// Fields that are not valid UTF-8 are decoded as Windows-1252, which is what
/// spreadsheet applications on Windows usually write. Missing trailing
/// fields read as empty cells; a row with more fields than the header is an error.
pub fn read_delimited<R: Read>(reader: R, delimiter: u8) -> AppResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers: Vec<String> = rdr
        .byte_headers()?
        .iter()
        .map(|h| decode_field(h).trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    let mut rows = Vec::new();
    for (idx, record) in rdr.byte_records().enumerate() {
        let record = record?;
        if record.len() > headers.len() {
            // +1 for the header, +1 for 1-based numbering
            return Err(AppError::Parse(format!(
                "row {}: expected {} fields, found {} (unquoted delimiter in a value?)",
                idx + 2,
                headers.len(),
                record.len()
            )));
        }
        rows.push(
            record
                .iter()
                .map(|f| RawCell::from_text(&decode_field(f)))
                .collect(),
        );
    }

    tracing::debug!("read {} delimited rows, {} columns", rows.len(), headers.len());
    Ok(RawTable { headers, rows })
}

fn decode_field(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => decode_cp1252(bytes),
    }
}
