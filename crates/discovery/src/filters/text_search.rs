//! Full-text search across the searchable trainer fields.
//!
//! A record matches if the query appears in *any* of: name, bio, either
//! language source, or any specialization. Logical OR across fields, never
//! AND, so typing a language name still surfaces trainers who only mention
//! it in their bio.

use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Case-insensitive substring search over name, bio, languages, and
/// specializations.
pub struct TextSearchFilter {
    /// Lowercased, trimmed query.
    query: String,
}

impl TextSearchFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }

    fn matches(&self, trainer: &TrainerRecord) -> bool {
        let q = self.query.as_str();

        trainer
            .name
            .as_deref()
            .is_some_and(|name| name.to_lowercase().contains(q))
            || trainer
                .bio
                .as_deref()
                .is_some_and(|bio| bio.to_lowercase().contains(q))
            || trainer
                .language_facets()
                .any(|lang| lang.to_lowercase().contains(q))
            || trainer
                .specializations
                .iter()
                .any(|spec| spec.to_lowercase().contains(q))
    }
}

impl Filter for TextSearchFilter {
    fn name(&self) -> &str {
        "TextSearchFilter"
    }

    fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        // An effectively-empty query matches everything; from_criteria
        // normally skips us in that case, but stay an identity regardless.
        if self.query.is_empty() {
            return Ok(trainers);
        }

        Ok(trainers
            .into_iter()
            .filter(|trainer| self.matches(trainer))
            .collect())
    }
}
