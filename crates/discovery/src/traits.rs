//! Core traits for the filtering pipeline.
//!
//! This module defines the Filter trait that allows composable,
//! extensible facet filters to be applied to the trainer list.

use anyhow::Result;
use trainer_data::TrainerRecord;

/// Core trait for filtering trainer records.
///
/// All facet filters implement this trait so the FilterPipeline can chain
/// them. Each filter is a pure predicate over a single record, which is what
/// makes the pipeline stages commute: applying them in any order yields the
/// same final set.
///
/// ## Design Note
/// - `Send + Sync` allows filters to be used in concurrent contexts
/// - Filters take ownership of the Vec<TrainerRecord> and return a filtered
///   Vec, avoiding per-stage cloning
pub trait Filter: Send + Sync {
    /// Returns the name of this filter (for logging/debugging)
    fn name(&self) -> &str;

    /// Apply this filter to the working set.
    ///
    /// # Arguments
    /// * `trainers` - The records to filter (takes ownership)
    ///
    /// # Returns
    /// * `Ok(Vec<TrainerRecord>)` - The records that passed the predicate
    /// * `Err` - If filtering fails
    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>>;
}
