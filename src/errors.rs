//! Unified application error type.
//! Every module (import, core, export, config, cli) returns AppError so a
//! failed run always surfaces as one human-readable message.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Schema errors
    // ---------------------------
    #[error("Schema error: required column '{0}' is missing")]
    MissingColumn(String),

    #[error("Schema error: {0}")]
    Schema(String),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Parse error in row {row}, column '{column}': {message}")]
    InvalidValue {
        row: usize,
        column: String,
        message: String,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),

    #[error("Input format not supported: {0}")]
    InvalidInputFormat(String),

    // ---------------------------
    // Mapping errors
    // ---------------------------
    #[error("No handler code configured for '{0}'")]
    UnmappedIdentity(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Shorthand for a cell-level parse failure.
    pub fn invalid_value(row: usize, column: &str, message: impl Into<String>) -> Self {
        AppError::InvalidValue {
            row,
            column: column.to_string(),
            message: message.into(),
        }
    }

    /// True for errors caused by the shape of the input rather than its content.
    pub fn is_schema_error(&self) -> bool {
        matches!(self, AppError::MissingColumn(_) | AppError::Schema(_))
    }
}

pub type AppResult<T> = Result<T, AppError>;
