//! Core domain types for the trainer catalog.
//!
//! This module defines the data structures the discovery engine operates on.
//! The wire format of the trainers endpoint is loose: nearly every profile
//! field can be absent. That looseness is modeled explicitly here with
//! `Option<T>` fields, and every numeric default lives in exactly one
//! coercion method so call sites never repeat fallback logic.

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// Unique identifier for a trainer, opaque to this crate.
///
/// The API hands out database object ids as strings; we never inspect them
/// beyond equality.
pub type TrainerId = String;

// =============================================================================
// Language Facets
// =============================================================================

/// How well a trainer speaks a language they teach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Proficiency {
    Native,
    Fluent,
}

/// One language a trainer teaches, with proficiency and the levels offered.
///
/// This is the richer sibling of the flat `languages` list on
/// [`TrainerRecord`]; both feed the same language facet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaughtLanguage {
    pub language: String,
    pub proficiency: Proficiency,
    pub teaching_levels: Vec<String>,
}

// =============================================================================
// TrainerRecord
// =============================================================================

/// A trainer as seen by the discovery engine.
///
/// Records are read-only once ingested: the engine filters and reorders
/// them but never mutates one. Optional fields stay optional here; the
/// `effective_*` methods below resolve defaults at the point of use.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainerRecord {
    pub id: TrainerId,
    pub name: Option<String>,
    pub bio: Option<String>,
    /// Flat list of languages from the profile (may be empty).
    pub languages: Vec<String>,
    /// Structured taught-language entries; supplements `languages`.
    pub taught_languages: Vec<TaughtLanguage>,
    pub hourly_rate: Option<f64>,
    pub years_experience: Option<f64>,
    pub specializations: Vec<String>,
    /// ISO alpha-2 code, uppercased at ingestion.
    pub nationality: Option<String>,
    /// Effective rating in [0, 5], resolved once at ingestion
    /// (stats rating first, then profile average rating).
    pub rating: Option<f64>,
    pub review_count: u32,
    /// Used only by the top-match helper, never by filtering.
    pub is_available: bool,
}

impl TrainerRecord {
    /// Hourly rate with the ingestion default applied.
    ///
    /// Absent (or non-finite) rates coerce to `0.0`, which means a record
    /// without a published rate passes any `max_rate` bound and fails any
    /// positive `min_rate` bound.
    pub fn effective_rate(&self) -> f64 {
        self.hourly_rate.filter(|r| r.is_finite()).unwrap_or(0.0)
    }

    /// Years of experience, defaulting to `0.0` when unset.
    pub fn effective_experience(&self) -> f64 {
        self.years_experience
            .filter(|y| y.is_finite())
            .unwrap_or(0.0)
    }

    /// The single rating value used for filtering and ranking.
    ///
    /// The stats-vs-profile fallback already happened at ingestion, so the
    /// only coercion left is absent -> `0.0`.
    pub fn effective_rating(&self) -> f64 {
        self.rating.filter(|r| r.is_finite()).unwrap_or(0.0)
    }

    /// Union of both language sources, in declaration order.
    ///
    /// The flat `languages` list and the structured `taught_languages`
    /// entries are two views of the same facet; every language-shaped
    /// predicate (search, language filter, preferred-language match) goes
    /// through this iterator so the two sources can never diverge.
    pub fn language_facets(&self) -> impl Iterator<Item = &str> {
        self.languages
            .iter()
            .map(String::as_str)
            .chain(self.taught_languages.iter().map(|t| t.language.as_str()))
    }
}

impl Default for TrainerRecord {
    /// An empty record with a blank id; primarily a test convenience.
    fn default() -> Self {
        Self {
            id: TrainerId::new(),
            name: None,
            bio: None,
            languages: Vec::new(),
            taught_languages: Vec::new(),
            hourly_rate: None,
            years_experience: None,
            specializations: Vec::new(),
            nationality: None,
            rating: None,
            review_count: 0,
            is_available: false,
        }
    }
}
