//! Per-(date, user) aggregation of remarks.

use crate::models::{AggregateKey, Entry};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Separator between joined remarks.
pub const REMARK_SEPARATOR: &str = ", ";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Aggregate {
    /// Every remark of the group joined with [`REMARK_SEPARATOR`], in input
    /// order. Missing remarks contribute an empty segment; never deduplicated.
    /// A group without any remark text gets `""`.
    pub description: String,
    /// Exact sum of the group's hours over all categories.
    pub hours_total: Decimal,
    /// Distinct category labels of the group, first-seen order.
    pub categories: Vec<String>,
}

impl Aggregate {
    pub fn category_list(&self) -> String {
        self.categories.join(REMARK_SEPARATOR)
    }
}

pub type Aggregates = BTreeMap<AggregateKey, Aggregate>;

/// Group `entries` by (date, user).
pub fn aggregate(entries: &[Entry]) -> Aggregates {
    let mut groups: BTreeMap<AggregateKey, (Vec<&str>, Aggregate)> = BTreeMap::new();

    for e in entries {
        let (remarks, agg) = groups.entry(e.key()).or_default();

        remarks.push(e.remark_text());
        agg.hours_total += e.hours;
        if !agg.categories.contains(&e.category) {
            agg.categories.push(e.category.clone());
        }
    }

    groups
        .into_iter()
        .map(|(key, (remarks, mut agg))| {
            if remarks.iter().any(|r| !r.is_empty()) {
                agg.description = remarks.join(REMARK_SEPARATOR);
            }
            (key, agg)
        })
        .collect()
}
