//! Hours per (date, user) × category.

use crate::models::category::MANDATORY;
use crate::models::{AggregateKey, Entry};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, BTreeSet};

/// Hours of one (date, user) pair, one value per pivot category.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PivotRow {
    hours: BTreeMap<String, Decimal>,
}

impl PivotRow {
    /// Hours booked on `category`, 0 when the category is unknown.
    pub fn hours(&self, category: &str) -> Decimal {
        self.try_hours(category).unwrap_or(Decimal::ZERO)
    }

    /// Hours booked on `category`, `None` when the pivot has no such column.
    pub fn try_hours(&self, category: &str) -> Option<Decimal> {
        self.hours.get(category).copied()
    }

    pub fn total(&self) -> Decimal {
        self.hours.values().copied().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.hours.iter().map(|(c, h)| (c.as_str(), *h))
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pivot {
    /// Observed categories plus the mandatory ones.
    pub categories: BTreeSet<String>,
    pub rows: BTreeMap<AggregateKey, PivotRow>,
}

impl Pivot {
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains(category)
    }

    pub fn get(&self, key: &AggregateKey) -> Option<&PivotRow> {
        self.rows.get(key)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Sum hours by (date, user) and category.
///
/// Every row carries a value for every category in [`Pivot::categories`];
/// combinations without entries are 0.
pub fn pivot(entries: &[Entry]) -> Pivot {
    let mut categories: BTreeSet<String> = MANDATORY.iter().map(|c| c.to_string()).collect();
    let mut rows: BTreeMap<AggregateKey, PivotRow> = BTreeMap::new();

    for e in entries {
        categories.insert(e.category.clone());
        *rows
            .entry(e.key())
            .or_default()
            .hours
            .entry(e.category.clone())
            .or_insert(Decimal::ZERO) += e.hours;
    }

    for row in rows.values_mut() {
        for c in &categories {
            row.hours.entry(c.clone()).or_insert(Decimal::ZERO);
        }
    }

    Pivot { categories, rows }
}
