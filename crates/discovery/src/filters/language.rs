//! Language facet filter.
//!
//! Matches against the union of the flat `languages` list and the
//! structured taught-language entries, so a trainer indexed either way is
//! found either way.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Keeps trainers whose language facets contain the query as a
/// case-insensitive substring ("span" finds "Spanish").
pub struct LanguageFilter {
    query: String,
}

impl LanguageFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

impl Filter for LanguageFilter {
    fn name(&self) -> &str {
        "LanguageFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        if self.query.is_empty() {
            return Ok(trainers);
        }

        Ok(trainers
            .into_iter()
            .filter(|trainer| {
                trainer
                    .language_facets()
                    .any(|lang| lang.to_lowercase().contains(&self.query))
            })
            .collect())
    }
}
