//! The reshaping pipeline: filter → aggregate + pivot → finalize.

use crate::core::aggregate::aggregate;
use crate::core::filter::open_entries;
use crate::core::finalize::Finalizer;
use crate::core::pivot::pivot;
use crate::errors::AppResult;
use crate::models::{Entry, OutputRow};

/// Result of one run, with the counters shown to the user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub rows: Vec<OutputRow>,
    pub entries_read: usize,
    pub entries_open: usize,
    pub dropped_categories: Vec<String>,
    pub unmapped: Vec<String>,
}

pub fn run(entries: Vec<Entry>, finalizer: &Finalizer<'_>) -> AppResult<Summary> {
    let entries_read = entries.len();

    let open = open_entries(entries);
    tracing::info!("{} of {} entries are open", open.len(), entries_read);

    let aggregates = aggregate(&open);
    let pivoted = pivot(&open);
    tracing::debug!(
        "{} groups, categories: {:?}",
        pivoted.len(),
        pivoted.categories
    );

    let finalized = finalizer.finalize(&pivoted, &aggregates)?;

    Ok(Summary {
        rows: finalized.rows,
        entries_read,
        entries_open: open.len(),
        dropped_categories: finalized.dropped_categories,
        unmapped: finalized.unmapped.into_iter().collect(),
    })
}
