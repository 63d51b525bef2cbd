use chrono::NaiveDate;

/// Date layouts found in time-tracking exports.
///
/// The two-digit year goes first: `%Y` would read "24" as the year 24.
const DATE_FORMATS: [&str; 5] = [
    "%d.%m.%y",
    "%d.%m.%Y",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%Y-%m-%d %H:%M:%S",
];

/// Parse a textual date in any of the supported layouts.
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim();

    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
}

/// Day zero of the Excel 1900 date system (with the Lotus leap-year bug folded in).
fn excel_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Date part of an Excel serial number (`45296.0` → 2024-01-05).
pub fn from_excel_serial(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial < 1.0 {
        return None;
    }
    excel_epoch()?.checked_add_days(chrono::Days::new(serial.trunc() as u64))
}

/// Excel serial number of `date`, for writing native date cells.
pub fn to_excel_serial(date: NaiveDate) -> f64 {
    match excel_epoch() {
        Some(epoch) => (date - epoch).num_days() as f64,
        None => 0.0,
    }
}
