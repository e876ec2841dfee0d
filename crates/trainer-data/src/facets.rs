//! Facet vocabulary derivation.
//!
//! The filter UI needs to know which values exist before it can offer them:
//! the nationality dropdown and the language picker are both populated from
//! the loaded records rather than a hardcoded list. These helpers are pure
//! functions over a record slice, order irrelevant.

use crate::types::TrainerRecord;
use std::collections::HashSet;

/// Every present, non-empty nationality code, deduplicated.
///
/// Codes are already uppercased at ingestion, so the set is the exact value
/// domain the nationality filter matches against.
pub fn unique_nationalities(trainers: &[TrainerRecord]) -> HashSet<String> {
    trainers
        .iter()
        .filter_map(|t| t.nationality.clone())
        .filter(|code| !code.is_empty())
        .collect()
}

/// Every language across both facet sources, deduplicated.
///
/// Drawn from the same union the language filter matches against, so every
/// vocabulary entry is guaranteed to produce at least one result when
/// selected unfiltered.
pub fn unique_languages(trainers: &[TrainerRecord]) -> HashSet<String> {
    trainers
        .iter()
        .flat_map(|t| t.language_facets())
        .map(str::to_string)
        .collect()
}
