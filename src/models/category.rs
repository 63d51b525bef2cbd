//! Performance categories ("Leistung") known to the billing summary.

/// Category billed at the work tariff.
pub const WORK_TARIFF: &str = "Arbeitstarif";

/// Category billed at the travel tariff.
pub const TRAVEL_TARIFF: &str = "Fahrtarif";

/// Categories that every summary row must carry, in output order.
pub const MANDATORY: [&str; 2] = [WORK_TARIFF, TRAVEL_TARIFF];

pub fn is_mandatory(label: &str) -> bool {
    MANDATORY.contains(&label)
}
