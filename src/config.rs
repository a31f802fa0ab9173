//! Engine configuration
//!
//! Scaling constants for the delta computation, with validation. The
//! defaults reproduce the historical arithmetic exactly and must not drift
//! if existing recorded ratings are to stay comparable.

use crate::error::RatingError;
use serde::{Deserialize, Serialize};

/// Tunable parameters of the rating engine
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Rating assigned to a contestant seen for the first time
    pub initial_rating: i64,
    /// Scale applied to each contestant's seed deviation
    pub gain_scale: i64,
    /// Scale used when accumulating the zero-sum correction pool
    pub pool_scale: i64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            initial_rating: 1500,
            gain_scale: 350,
            pool_scale: 300,
        }
    }
}

impl EngineConfig {
    /// Validate configuration parameters
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.gain_scale <= 0 {
            return Err(RatingError::ConfigurationError {
                message: "gain_scale must be positive".to_string(),
            }
            .into());
        }

        if self.pool_scale <= 0 {
            return Err(RatingError::ConfigurationError {
                message: "pool_scale must be positive".to_string(),
            }
            .into());
        }

        Ok(())
    }
}
