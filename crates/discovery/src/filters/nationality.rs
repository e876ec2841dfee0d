//! Nationality facet filter.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Exact match on the trainer's nationality code.
///
/// Records store uppercased codes; the criteria value is uppercased here so
/// the comparison itself stays exact.
pub struct NationalityFilter {
    code: String,
}

impl NationalityFilter {
    pub fn new(code: &str) -> Self {
        Self {
            code: code.trim().to_uppercase(),
        }
    }
}

impl Filter for NationalityFilter {
    fn name(&self) -> &str {
        "NationalityFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        if self.code.is_empty() {
            return Ok(trainers);
        }

        Ok(trainers
            .into_iter()
            .filter(|trainer| trainer.nationality.as_deref() == Some(self.code.as_str()))
            .collect())
    }
}
