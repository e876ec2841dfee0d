//! # Trainer Data Crate
//!
//! This crate handles loading and normalizing the trainer catalog consumed
//! by the discovery engine.
//!
//! ## Main Components
//!
//! - **types**: Core domain types (TrainerRecord, TaughtLanguage, coercion helpers)
//! - **parser**: Lenient JSON ingestion of the trainers endpoint payload
//! - **catalog**: Id-indexed container with duplicate detection
//! - **facets**: Facet vocabulary derivation (nationalities, languages)
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use trainer_data::TrainerCatalog;
//! use std::path::Path;
//!
//! // Load a trainers payload captured from the API
//! let catalog = TrainerCatalog::load_from_file(Path::new("data/trainers.json"))?;
//!
//! // Query data
//! let trainer = catalog.get("64f1c2...").unwrap();
//! println!("{} teaches {} languages",
//!     trainer.name.as_deref().unwrap_or("unknown"),
//!     trainer.language_facets().count());
//! ```
//!
//! ## Design Notes
//!
//! The wire shape is loose (optional nested fields, string-typed numbers),
//! so every default lives in exactly one place: field coercion in the
//! parser, numeric fallbacks in the `effective_*` methods on
//! [`TrainerRecord`]. A malformed entry is dropped at ingestion; a malformed
//! field is defaulted. Nothing downstream ever has to second-guess a value.

// Public modules
pub mod catalog;
pub mod error;
pub mod facets;
pub mod parser;
pub mod types;

// Re-export commonly used types for convenience
pub use catalog::TrainerCatalog;
pub use error::{Result, TrainerDataError};
pub use facets::{unique_languages, unique_nationalities};
pub use types::{Proficiency, TaughtLanguage, TrainerId, TrainerRecord};
