//! Contest Ladder - sequential Elo-style contest ratings
//!
//! This crate computes iterative skill ratings for contestants across an
//! ordered series of ranked contests, producing a final rating table and
//! a full per-contest log of intermediate computations.

pub mod config;
pub mod contest;
pub mod error;
pub mod output;
pub mod rating;
pub mod types;

// Re-export commonly used types and traits
pub use error::{RatingError, Result};
pub use types::*;

// Re-export key components
pub use config::EngineConfig;
pub use contest::ContestRoster;
pub use rating::RatingEngine;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
