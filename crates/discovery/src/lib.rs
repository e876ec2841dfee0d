//! Trainer discovery engine: filtering, sorting, and top-match selection.
//!
//! This crate provides:
//! - Filter trait and per-facet filter implementations
//! - FilterPipeline for composing filters from a criteria object
//! - Stable sort comparators for the supported orderings
//! - The `filter_and_sort` entry point and the `assign_top_trainer` helper
//!
//! ## Architecture
//! The engine is a deterministic, synchronous, pure transformation:
//! `(records, criteria) -> ordered subset`. It holds no state between
//! calls, never mutates its inputs, and never throws — rapid successive
//! invocations (one per keystroke) are independent by construction.
//!
//! ## Example Usage
//! ```ignore
//! use discovery::{FilterCriteria, SortKey, filter_and_sort};
//!
//! let criteria = FilterCriteria {
//!     search_text: "english".to_string(),
//!     max_rate: "30".to_string(),
//!     sort: SortKey::PriceLow,
//!     ..FilterCriteria::default()
//! };
//!
//! let visible = filter_and_sort(catalog.records(), &criteria);
//! ```

pub mod criteria;
pub mod engine;
pub mod filters;
pub mod pipeline;
pub mod sort;
pub mod top_match;
pub mod traits;

// Re-export main types
pub use criteria::{FilterCriteria, SortKey, numeric_bound};
pub use engine::filter_and_sort;
pub use pipeline::FilterPipeline;
pub use sort::sort_trainers;
pub use top_match::assign_top_trainer;
pub use traits::Filter;
