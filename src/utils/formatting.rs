//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDate;
use chrono::format::{Item, StrftimeItems};
use rust_decimal::Decimal;

pub fn pad_right(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn pad_left(s: &str, width: usize) -> String {
    let w = unicode_width::UnicodeWidthStr::width(s);
    format!("{}{}", " ".repeat(width.saturating_sub(w)), s)
}

/// Hours as the shortest exact decimal: `3`, `1.5`, `0.25`.
pub fn format_hours(hours: Decimal) -> String {
    hours.normalize().to_string()
}

/// True when `fmt` is a strftime pattern chrono can render without error.
pub fn is_valid_date_format(fmt: &str) -> bool {
    !fmt.trim().is_empty() && !StrftimeItems::new(fmt).any(|item| matches!(item, Item::Error))
}

/// Render a date with a pattern already checked by [`is_valid_date_format`].
pub fn format_date(date: NaiveDate, fmt: &str) -> String {
    if is_valid_date_format(fmt) {
        date.format(fmt).to_string()
    } else {
        date.format("%Y-%m-%d").to_string()
    }
}
