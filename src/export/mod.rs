// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;
mod pdf;
mod pdf_export;
mod xlsx;

pub use fs_utils::ensure_writable;
pub use json_csv::write_csv;
pub use model::{HEADERS, SummaryExport};

use crate::errors::AppResult;
use crate::models::OutputRow;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Helper comune per messaggi di completamento export.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Xlsx,
    Pdf,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Xlsx => "xlsx",
            ExportFormat::Pdf => "pdf",
        }
    }

    /// Format implied by an output file name, if its extension is known.
    pub fn from_path(path: &Path) -> Option<Self> {
        match crate::utils::path::extension_of(path).as_str() {
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            "xlsx" => Some(ExportFormat::Xlsx),
            "pdf" => Some(ExportFormat::Pdf),
            _ => None,
        }
    }
}

/// Output settings taken from the configuration.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    pub delimiter: u8,
    pub bom: bool,
    pub date_format: String,
    pub title: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            delimiter: b';',
            bom: true,
            date_format: "%d.%m.%Y".to_string(),
            title: "Billing summary".to_string(),
        }
    }
}

/// Write `rows` to `path` in `format`.
pub fn export(
    rows: &[OutputRow],
    format: ExportFormat,
    path: &Path,
    opts: &ExportOptions,
) -> AppResult<()> {
    match format {
        ExportFormat::Csv => json_csv::export_csv(rows, path, opts),
        ExportFormat::Json => json_csv::export_json(rows, path, opts),
        ExportFormat::Xlsx => xlsx::export_xlsx(rows, path, opts),
        ExportFormat::Pdf => pdf_export::export_pdf(rows, path, opts),
    }
}
