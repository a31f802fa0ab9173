//! Common types used throughout the rating engine

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unique identifier for contestants
pub type ContestantId = String;

/// Current rating per contestant
///
/// A `BTreeMap` keeps iteration and JSON key order deterministic, so the
/// serialized table is reproducible across runs.
pub type RatingTable = BTreeMap<ContestantId, i64>;

/// Everything computed for one contestant during a single contest
///
/// `is_new` serializes under the key `"new"` to stay comparable with
/// previously recorded history logs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContestantSnapshot {
    /// Rating going into the contest
    pub before: i64,
    /// Whether the contestant had never been rated before this contest
    #[serde(rename = "new")]
    pub is_new: bool,
    /// Scored points: roster size minus one for first place, zero for last
    pub points: i64,
    /// Expected score against the rest of the field
    pub seed: f64,
    /// Rating after delta and zero-sum correction
    pub after: i64,
}

/// Full snapshot of one processed contest, keyed by contestant
pub type ContestSnapshot = BTreeMap<ContestantId, ContestantSnapshot>;
