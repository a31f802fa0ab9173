//! Rating computation built on the Elo pairwise model
//!
//! This module provides the win-probability kernel and the sequential
//! engine that folds an ordered contest series into a rating table.

pub mod elo;
pub mod engine;

// Re-export commonly used types
pub use elo::win_probability;
pub use engine::RatingEngine;
