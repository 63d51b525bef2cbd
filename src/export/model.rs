// src/export/model.rs

use crate::models::OutputRow;
use crate::utils::formatting::{format_date, format_hours};
use rust_decimal::prelude::ToPrimitive;
use serde::Serialize;

/// Output column names, in output order.
pub const HEADERS: [&str; 5] = [
    "Bearb.",
    "Datum",
    "Arbeitsbeschrieb",
    "Arbeitstarif",
    "Fahrtarif",
];

/// Struttura “piatta” per l'export JSON.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct SummaryExport {
    #[serde(rename = "Bearb.")]
    pub handler: String,
    #[serde(rename = "Datum")]
    pub date: String,
    #[serde(rename = "Arbeitsbeschrieb")]
    pub description: String,
    #[serde(rename = "Arbeitstarif")]
    pub work_hours: f64,
    #[serde(rename = "Fahrtarif")]
    pub travel_hours: f64,
}

impl SummaryExport {
    pub fn from_row(row: &OutputRow, date_format: &str) -> Self {
        Self {
            handler: row.person_code.clone(),
            date: format_date(row.date, date_format),
            description: row.description.clone(),
            work_hours: row.work_hours.to_f64().unwrap_or_default(),
            travel_hours: row.travel_hours.to_f64().unwrap_or_default(),
        }
    }
}

/// One output row as text cells (CSV / PDF).
pub(crate) fn row_to_strings(row: &OutputRow, date_format: &str) -> Vec<String> {
    vec![
        row.person_code.clone(),
        format_date(row.date, date_format),
        row.description.clone(),
        format_hours(row.work_hours),
        format_hours(row.travel_hours),
    ]
}

pub(crate) fn rows_to_table(rows: &[OutputRow], date_format: &str) -> Vec<Vec<String>> {
    rows.iter().map(|r| row_to_strings(r, date_format)).collect()
}
