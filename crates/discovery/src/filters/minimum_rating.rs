//! Filter to ensure a minimum rating threshold.
//!
//! Works on the effective rating resolved at ingestion, so a trainer with
//! no reviews yet (rating absent, coerced to 0) only appears when no
//! minimum is requested.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Removes trainers whose effective rating is below the threshold.
pub struct MinimumRatingFilter {
    min_rating: f64,
}

impl MinimumRatingFilter {
    pub fn new(min_rating: f64) -> Self {
        Self { min_rating }
    }
}

impl Filter for MinimumRatingFilter {
    fn name(&self) -> &str {
        "MinimumRatingFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        Ok(trainers
            .into_iter()
            .filter(|trainer| trainer.effective_rating() >= self.min_rating)
            .collect())
    }
}
