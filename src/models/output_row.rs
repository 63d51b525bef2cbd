use chrono::NaiveDate;
use rust_decimal::Decimal;

/// One line of the billing summary: a person on a day.
#[derive(Debug, Clone, PartialEq)]
pub struct OutputRow {
    /// Short handler code, or the full identity when no code is configured.
    pub person_code: String,
    pub date: NaiveDate,
    pub description: String,
    pub work_hours: Decimal,
    pub travel_hours: Decimal,
}
