use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::models::key::AggregateKey;

/// One row of the time-tracking export, after schema validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub date: NaiveDate,
    pub user: String,
    /// `false` for rows flagged "Nein" (still open, i.e. not yet billed).
    pub completed: bool,
    pub category: String,
    /// Always >= 0; enforced by the loader.
    pub hours: Decimal,
    /// `None` when the remark cell was absent or blank.
    pub remark: Option<String>,
}

impl Entry {
    pub fn key(&self) -> AggregateKey {
        AggregateKey::new(self.date, &self.user)
    }

    /// Remark text with the absent case read as empty.
    pub fn remark_text(&self) -> &str {
        self.remark.as_deref().unwrap_or("")
    }
}
