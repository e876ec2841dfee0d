//! Filter implementations for the discovery pipeline.
//!
//! One module per facet. Every filter is constructed from an already-parsed
//! criteria value; deciding whether a criteria field is active at all
//! happens in `FilterPipeline::from_criteria`.

pub mod experience;
pub mod language;
pub mod minimum_rating;
pub mod nationality;
pub mod price_range;
pub mod specialization;
pub mod text_search;

// Re-export for convenience
pub use experience::ExperienceFilter;
pub use language::LanguageFilter;
pub use minimum_rating::MinimumRatingFilter;
pub use nationality::NationalityFilter;
pub use price_range::PriceRangeFilter;
pub use specialization::SpecializationFilter;
pub use text_search::TextSearchFilter;
