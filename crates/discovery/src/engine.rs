//! Top-level discovery entry point.
//!
//! `filter_and_sort` is what the rendering layer calls on every criteria
//! change: a pure function of `(records, criteria)` producing a new ordered
//! subset. It never mutates its inputs and never propagates an error; a
//! UI-facing recomputation that throws would take the whole page down with
//! it, so any internal failure degrades to an empty result instead.

use crate::criteria::FilterCriteria;
use crate::pipeline::FilterPipeline;
use crate::sort;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Produce the ordered, filtered view of `trainers` for `criteria`.
///
/// ## Pipeline
/// 1. Clone the input (callers keep their snapshot untouched)
/// 2. Apply the active facet filters (conjunction; see `FilterPipeline`)
/// 3. Stable-sort by the requested key
///
/// All-empty criteria return every record, reordered only by the default
/// rating sort. Re-running with identical inputs returns an identical
/// sequence.
pub fn filter_and_sort(
    trainers: &[TrainerRecord],
    criteria: &FilterCriteria,
) -> Vec<TrainerRecord> {
    match apply_criteria(trainers.to_vec(), criteria) {
        Ok(matched) => matched,
        Err(err) => {
            tracing::warn!("trainer discovery failed, returning no results: {err:#}");
            Vec::new()
        }
    }
}

fn apply_criteria(
    trainers: Vec<TrainerRecord>,
    criteria: &FilterCriteria,
) -> Result<Vec<TrainerRecord>> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    let mut matched = pipeline.apply(trainers)?;
    sort::sort_trainers(&mut matched, criteria.sort);
    Ok(matched)
}
