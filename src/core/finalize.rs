//! Join of pivoted hours with aggregated remarks into the final summary rows.

use crate::config::{Config, HandlerCodes, Resolution, UnmappedPolicy};
use crate::core::aggregate::Aggregates;
use crate::core::pivot::Pivot;
use crate::errors::{AppError, AppResult};
use crate::models::category::{MANDATORY, is_mandatory};
use crate::models::{OutputRow, TRAVEL_TARIFF, WORK_TARIFF};
use std::collections::BTreeSet;

/// Builds output rows; holds the handler-code table for the whole run.
pub struct Finalizer<'a> {
    codes: &'a HandlerCodes,
    policy: UnmappedPolicy,
}

/// Output rows plus what was left out or passed through on the way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Finalized {
    pub rows: Vec<OutputRow>,
    /// Identities written without a short code.
    pub unmapped: BTreeSet<String>,
    /// Pivot categories that have no output column.
    pub dropped_categories: Vec<String>,
}

impl<'a> Finalizer<'a> {
    pub fn new(codes: &'a HandlerCodes, policy: UnmappedPolicy) -> Self {
        Self { codes, policy }
    }

    pub fn from_config(cfg: &'a Config) -> Self {
        Self::new(&cfg.handler_codes, cfg.unmapped_identity)
    }

    pub fn policy(&self) -> UnmappedPolicy {
        self.policy
    }

    /// Short code for `identity`; the flag is false when it was passed through.
    pub fn handler_code(&self, identity: &str) -> AppResult<(String, bool)> {
        match self.codes.resolve(identity) {
            Resolution::Mapped(code) => Ok((code.to_string(), true)),
            Resolution::Unmapped if self.policy == UnmappedPolicy::Reject => {
                Err(AppError::UnmappedIdentity(identity.to_string()))
            }
            Resolution::Unmapped => Ok((identity.to_string(), false)),
        }
    }

    /// Left join of `pivot` with `aggregates` on (date, user).
    ///
    /// Every pivot row yields exactly one output row; a key without an
    /// aggregate gets an empty description.
    pub fn finalize(&self, pivot: &Pivot, aggregates: &Aggregates) -> AppResult<Finalized> {
        for category in MANDATORY {
            if !pivot.has_category(category) {
                return Err(AppError::Schema(format!(
                    "category column '{category}' could not be built"
                )));
            }
        }

        let dropped_categories: Vec<String> = pivot
            .categories
            .iter()
            .filter(|c| !is_mandatory(c))
            .cloned()
            .collect();
        if !dropped_categories.is_empty() {
            tracing::debug!(
                "categories without output column: {}",
                dropped_categories.join(", ")
            );
        }

        let mut rows = Vec::with_capacity(pivot.len());
        let mut unmapped = BTreeSet::new();

        for (key, hours) in &pivot.rows {
            let (person_code, mapped) = self.handler_code(&key.user)?;
            if !mapped && unmapped.insert(key.user.clone()) {
                tracing::debug!("no handler code for '{}', keeping full name", key.user);
            }

            let description = match aggregates.get(key) {
                Some(agg) => agg.description.clone(),
                None => {
                    tracing::debug!("no aggregated remarks for {key}");
                    String::new()
                }
            };

            let column = |category: &str| {
                hours.try_hours(category).ok_or_else(|| {
                    AppError::Schema(format!("row {key} has no '{category}' value"))
                })
            };

            rows.push(OutputRow {
                person_code,
                date: key.date,
                description,
                work_hours: column(WORK_TARIFF)?,
                travel_hours: column(TRAVEL_TARIFF)?,
            });
        }

        Ok(Finalized {
            rows,
            unmapped,
            dropped_categories,
        })
    }
}
