//! Minimum-experience filter.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Keeps trainers with at least `min_years` of coerced experience.
pub struct ExperienceFilter {
    min_years: f64,
}

impl ExperienceFilter {
    pub fn new(min_years: f64) -> Self {
        Self { min_years }
    }
}

impl Filter for ExperienceFilter {
    fn name(&self) -> &str {
        "ExperienceFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        Ok(trainers
            .into_iter()
            .filter(|trainer| trainer.effective_experience() >= self.min_years)
            .collect())
    }
}
