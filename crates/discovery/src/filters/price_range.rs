//! Hourly-rate range filter.
//!
//! Both bounds are inclusive and independently optional. A trainer without
//! a published rate coerces to 0, so it passes any upper bound and fails
//! any positive lower bound.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Keeps trainers whose coerced hourly rate falls inside `[min, max]`.
pub struct PriceRangeFilter {
    min: Option<f64>,
    max: Option<f64>,
}

impl PriceRangeFilter {
    /// Create a new PriceRangeFilter.
    ///
    /// # Arguments
    /// * `min` - Inclusive lower bound, `None` for unbounded
    /// * `max` - Inclusive upper bound, `None` for unbounded
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

impl Filter for PriceRangeFilter {
    fn name(&self) -> &str {
        "PriceRangeFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        Ok(trainers
            .into_iter()
            .filter(|trainer| {
                let rate = trainer.effective_rate();
                self.min.is_none_or(|min| rate >= min) && self.max.is_none_or(|max| rate <= max)
            })
            .collect())
    }
}
