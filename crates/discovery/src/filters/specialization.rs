//! Specialization facet filter.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Keeps trainers with at least one specialization containing the query
/// (case-insensitive substring).
pub struct SpecializationFilter {
    query: String,
}

impl SpecializationFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

impl Filter for SpecializationFilter {
    fn name(&self) -> &str {
        "SpecializationFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        if self.query.is_empty() {
            return Ok(trainers);
        }

        Ok(trainers
            .into_iter()
            .filter(|trainer| {
                trainer
                    .specializations
                    .iter()
                    .any(|spec| spec.to_lowercase().contains(&self.query))
            })
            .collect())
    }
}
