//! Error types for the trainer-data crate.
//!
//! Per-record problems (missing fields, string-typed numbers) are recovered
//! locally during ingestion and never surface as errors; the variants here
//! cover the failures that make a whole load unusable.

use thiserror::Error;

/// Errors that can occur while loading or validating trainer data
#[derive(Error, Debug)]
pub enum TrainerDataError {
    /// File could not be found or opened
    #[error("Failed to open file: {path}")]
    FileNotFound { path: String },

    /// I/O error occurred while reading a file
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The response body was not JSON at all
    #[error("Invalid JSON in {source_name}: {reason}")]
    InvalidJson { source_name: String, reason: String },

    /// The JSON parsed but was neither a trainer array nor a known envelope
    #[error("Unexpected response shape: {0}")]
    UnexpectedShape(String),

    /// Two records claimed the same id
    #[error("Duplicate trainer id: {id}")]
    DuplicateId { id: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, TrainerDataError>;
