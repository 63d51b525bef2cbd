// src/import/cell.rs

use crate::utils::date::{from_excel_serial, parse_date};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal::prelude::FromPrimitive;
use std::str::FromStr;

/// A cell as read from the input, before it is checked against the schema.
#[derive(Debug, Clone, PartialEq)]
pub enum RawCell {
    Empty,
    Text(String),
    Number(f64),
    Date(NaiveDate),
    Bool(bool),
}

impl RawCell {
    /// Text as read; blank text becomes `Empty`. Surrounding whitespace is kept
    /// here and stripped by the typed accessors.
    pub fn from_text(s: &str) -> Self {
        if s.trim().is_empty() {
            RawCell::Empty
        } else {
            RawCell::Text(s.to_string())
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RawCell::Empty)
    }

    /// Trimmed textual rendering, `None` for empty cells.
    pub fn as_text(&self) -> Option<String> {
        match self {
            RawCell::Text(s) => Some(s.trim().to_string()),
            other => other.as_raw_text(),
        }
    }

    /// Textual rendering with the original spacing of text cells.
    pub fn as_raw_text(&self) -> Option<String> {
        match self {
            RawCell::Empty => None,
            RawCell::Text(s) => Some(s.clone()),
            RawCell::Number(n) => Some(format_number(*n)),
            RawCell::Date(d) => Some(d.format("%d.%m.%Y").to_string()),
            RawCell::Bool(b) => Some(b.to_string()),
        }
    }

    pub fn as_date(&self) -> Result<NaiveDate, String> {
        match self {
            RawCell::Date(d) => Ok(*d),
            RawCell::Text(s) => parse_date(s).ok_or_else(|| format!("'{s}' is not a date")),
            RawCell::Number(n) => {
                from_excel_serial(*n).ok_or_else(|| format!("{n} is not a date serial"))
            }
            RawCell::Empty => Err("value is missing".to_string()),
            RawCell::Bool(b) => Err(format!("'{b}' is not a date")),
        }
    }

    /// Hours, accepting `.` or `,` as decimal separator. Negative values are rejected.
    pub fn as_hours(&self) -> Result<Decimal, String> {
        let hours = match self {
            RawCell::Number(n) => {
                Decimal::from_f64(*n).ok_or_else(|| format!("{n} is not a valid number"))?
            }
            RawCell::Text(s) => {
                let normalized = s.trim().replace(['\'', ' '], "").replace(',', ".");
                Decimal::from_str(&normalized).map_err(|_| format!("'{s}' is not a number"))?
            }
            RawCell::Empty => return Err("value is missing".to_string()),
            RawCell::Date(_) | RawCell::Bool(_) => {
                return Err(format!(
                    "'{}' is not a number",
                    self.as_text().unwrap_or_default()
                ));
            }
        };

        if hours.is_sign_negative() && !hours.is_zero() {
            return Err(format!("hours must not be negative, got {hours}"));
        }

        Ok(hours.normalize())
    }

    /// True only for the literal text `marker` (surrounding spaces ignored).
    pub fn is_marker(&self, marker: &str) -> bool {
        matches!(self, RawCell::Text(s) if s.trim() == marker)
    }
}

/// Integral floats print without the trailing `.0` (user ids stored as numbers).
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
