//! Filter criteria as supplied by the search UI.
//!
//! Every field mirrors a UI control: text inputs arrive as strings (numeric
//! ones included), dropdowns arrive as string parameters. An empty or
//! whitespace-only field means "inactive". The criteria object is ephemeral
//! view state, rebuilt on every keystroke and passed in wholesale; the
//! engine never mutates it.

/// User-supplied search, filter, and sort state.
///
/// All fields are optional-by-emptiness; `FilterCriteria::default()` is the
/// all-empty criteria that must return the full record list under the
/// default rating sort.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterCriteria {
    /// Free text matched against name, bio, languages, and specializations.
    pub search_text: String,
    /// Substring filter over the language facet union.
    pub language: String,
    /// Inclusive lower price bound, as typed ("20", "20.5", or garbage).
    pub min_rate: String,
    /// Inclusive upper price bound, as typed.
    pub max_rate: String,
    /// Minimum years of experience, as typed.
    pub min_experience: String,
    /// Substring filter over specializations.
    pub specialization: String,
    /// Minimum effective rating, as typed.
    pub min_rating: String,
    /// Exact-match nationality code from the facet dropdown.
    pub nationality: String,
    pub sort: SortKey,
}

impl FilterCriteria {
    pub fn new() -> Self {
        Self::default()
    }
}

/// The orderings the UI offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SortKey {
    /// Descending effective rating (the default).
    #[default]
    Rating,
    /// Ascending hourly rate.
    PriceLow,
    /// Descending hourly rate.
    PriceHigh,
    /// Descending years of experience.
    Experience,
}

impl SortKey {
    /// Parse the wire/UI parameter for a sort key.
    ///
    /// Unknown or absent values deterministically fall back to `Rating`, so
    /// a stale query string can never produce an unsorted or surprising
    /// ordering.
    pub fn from_param(param: &str) -> Self {
        match param.trim().to_ascii_lowercase().as_str() {
            "price_low" => SortKey::PriceLow,
            "price_high" => SortKey::PriceHigh,
            "experience" => SortKey::Experience,
            _ => SortKey::Rating,
        }
    }

    pub fn as_param(&self) -> &'static str {
        match self {
            SortKey::Rating => "rating",
            SortKey::PriceLow => "price_low",
            SortKey::PriceHigh => "price_high",
            SortKey::Experience => "experience",
        }
    }
}

/// Lenient parse of a numeric filter input.
///
/// `""`, `"  "`, `"abc"`, and non-finite values all mean "no bound". A user
/// mid-typing must never crash the page or filter everything out.
pub fn numeric_bound(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}
