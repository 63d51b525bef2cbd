// src/import/schema.rs

use crate::errors::{AppError, AppResult};
use crate::import::cell::RawCell;
use crate::models::Entry;

pub const COL_COMPLETED: &str = "Abgeschlossen";
pub const COL_DATE: &str = "Datum";
pub const COL_USER: &str = "Benutzer";
pub const COL_CATEGORY: &str = "Leistung";
pub const COL_HOURS: &str = "Stunden";
pub const COL_REMARK: &str = "Bemerkung";

/// `Abgeschlossen` value of an entry that has not been billed yet. Any other
/// value, including an empty cell, counts as completed.
pub const OPEN_MARKER: &str = "Nein";

/// Columns that must be present in every input, in reporting order.
pub const REQUIRED_COLUMNS: [&str; 5] =
    [COL_COMPLETED, COL_DATE, COL_USER, COL_CATEGORY, COL_HOURS];

/// Position of each known column in the input header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnMap {
    completed: usize,
    date: usize,
    user: usize,
    category: usize,
    hours: usize,
    remark: Option<usize>,
}

impl ColumnMap {
    /// Locate the known columns in `headers`.
    ///
    /// Header names are compared after trimming whitespace and a leading BOM.
    /// The first missing required column is reported as a schema error.
    pub fn resolve<S: AsRef<str>>(headers: &[S]) -> AppResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.as_ref().trim().trim_start_matches('\u{feff}') == name)
        };
        let require = |name: &str| find(name).ok_or_else(|| AppError::MissingColumn(name.into()));

        Ok(Self {
            completed: require(COL_COMPLETED)?,
            date: require(COL_DATE)?,
            user: require(COL_USER)?,
            category: require(COL_CATEGORY)?,
            hours: require(COL_HOURS)?,
            remark: find(COL_REMARK),
        })
    }

    /// True when the row carries the open marker in `Abgeschlossen`.
    pub fn is_open(&self, cells: &[RawCell]) -> bool {
        cells
            .get(self.completed)
            .is_some_and(|c| c.is_marker(OPEN_MARKER))
    }

    pub fn has_remark(&self) -> bool {
        self.remark.is_some()
    }

    /// Build a typed entry from one data row.
    ///
    /// `row` is the 1-based row number as shown by a spreadsheet (header = 1).
    pub fn entry_from(&self, row: usize, cells: &[RawCell]) -> AppResult<Entry> {
        let cell = |idx: usize| cells.get(idx).unwrap_or(&RawCell::Empty);
        let fail = |column: &str, message: String| AppError::invalid_value(row, column, message);

        let completed = !self.is_open(cells);
        let date = cell(self.date).as_date().map_err(|m| fail(COL_DATE, m))?;
        let user = cell(self.user)
            .as_text()
            .ok_or_else(|| fail(COL_USER, "value is missing".into()))?;
        let category = cell(self.category)
            .as_text()
            .ok_or_else(|| fail(COL_CATEGORY, "value is missing".into()))?;
        let hours = cell(self.hours).as_hours().map_err(|m| fail(COL_HOURS, m))?;
        let remark = self.remark.and_then(|idx| cell(idx).as_raw_text());

        Ok(Entry {
            date,
            user,
            completed,
            category,
            hours,
            remark,
        })
    }
}
