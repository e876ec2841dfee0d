//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the FilterPipeline struct that chains facet filters
//! together using the builder pattern, plus the criteria-driven constructor
//! the engine entry point uses.

use crate::criteria::{FilterCriteria, numeric_bound};
use crate::filters::{
    ExperienceFilter, LanguageFilter, MinimumRatingFilter, NationalityFilter, PriceRangeFilter,
    SpecializationFilter, TextSearchFilter,
};
use crate::traits::Filter;
use anyhow::Result;
use trainer_data::TrainerRecord;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(TextSearchFilter::new("english"))
///     .add_filter(MinimumRatingFilter::new(4.0));
///
/// let filtered = pipeline.apply(trainers)?;
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter to the pipeline (builder pattern).
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Build the pipeline for a criteria object.
    ///
    /// Only active criteria fields contribute a stage. The stage order
    /// follows the UI's filter panel (search, language, price, experience,
    /// specialization, rating, nationality), though each stage is a pure
    /// per-record predicate so the final membership does not depend on it.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = FilterPipeline::new();

        if !criteria.search_text.trim().is_empty() {
            pipeline = pipeline.add_filter(TextSearchFilter::new(&criteria.search_text));
        }

        if !criteria.language.trim().is_empty() {
            pipeline = pipeline.add_filter(LanguageFilter::new(&criteria.language));
        }

        // An unparseable typed bound means "no bound", never "match nothing".
        let min_rate = numeric_bound(&criteria.min_rate);
        let max_rate = numeric_bound(&criteria.max_rate);
        if min_rate.is_some() || max_rate.is_some() {
            pipeline = pipeline.add_filter(PriceRangeFilter::new(min_rate, max_rate));
        }

        if let Some(min_years) = numeric_bound(&criteria.min_experience) {
            pipeline = pipeline.add_filter(ExperienceFilter::new(min_years));
        }

        if !criteria.specialization.trim().is_empty() {
            pipeline = pipeline.add_filter(SpecializationFilter::new(&criteria.specialization));
        }

        if let Some(min_rating) = numeric_bound(&criteria.min_rating) {
            pipeline = pipeline.add_filter(MinimumRatingFilter::new(min_rating));
        }

        if !criteria.nationality.trim().is_empty() {
            pipeline = pipeline.add_filter(NationalityFilter::new(&criteria.nationality));
        }

        pipeline
    }

    /// Number of active stages (used by logging and tests).
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence to the trainer list.
    ///
    /// Each stage strictly narrows the working set; an empty pipeline is the
    /// identity.
    pub fn apply(&self, trainers: Vec<TrainerRecord>) -> Result<Vec<TrainerRecord>> {
        let mut current = trainers;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current)?;
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        Ok(current)
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
