//! Error types for the rating engine
//!
//! This module defines all error types using anyhow for consistent error
//! handling throughout the application.

use std::path::PathBuf;

/// Result type alias for convenience
pub type Result<T> = anyhow::Result<T>;

/// Custom error types for specific rating scenarios
///
/// Every detected error is unrecoverable for the run: each contest depends
/// on the rating state left by the previous one, so processing a corrupted
/// contest would silently poison all subsequent ratings.
#[derive(Debug, thiserror::Error)]
pub enum RatingError {
    #[error("contest roster is empty")]
    EmptyRoster,

    #[error("duplicate contestant in roster: {contestant}")]
    DuplicateContestant { contestant: String },

    #[error("malformed contest file {path}: {message}")]
    MalformedContestFile { path: PathBuf, message: String },

    #[error("malformed ratings file {path}: {message}")]
    MalformedRatingsFile { path: PathBuf, message: String },

    #[error("configuration error: {message}")]
    ConfigurationError { message: String },
}
