//! ANSI color helper utilities for terminal output.

use rust_decimal::Decimal;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Zero hours are greyed out, anything else is left as is.
pub fn color_for_hours(value: Decimal) -> &'static str {
    if value.is_zero() { GREY } else { RESET }
}

/// Handler codes that could not be mapped stand out in yellow.
pub fn color_for_handler(mapped: bool) -> &'static str {
    if mapped { CYAN } else { YELLOW }
}

pub fn colorize(value: &str, color: &str) -> String {
    if color == RESET {
        value.to_string()
    } else {
        format!("{color}{value}{RESET}")
    }
}
