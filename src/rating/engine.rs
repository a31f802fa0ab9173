//! Sequential rating engine
//!
//! Consumes one contest at a time, updates the rating table, and appends a
//! full snapshot of the intermediate computation to the history log.
//! Contests must be processed strictly in order: every update depends on
//! the cumulative rating state left by all prior contests.

use crate::config::EngineConfig;
use crate::contest::ContestRoster;
use crate::error::{RatingError, Result};
use crate::rating::elo::win_probability;
use crate::types::{ContestSnapshot, ContestantId, ContestantSnapshot, RatingTable};
use std::cmp::Reverse;
use std::collections::HashSet;
use tracing::info;

/// Per-entrant working state, fixed before any seed is computed
struct Entrant {
    id: ContestantId,
    before: i64,
    is_new: bool,
    points: i64,
}

/// Rating engine owning the rating table and the per-contest history log
pub struct RatingEngine {
    config: EngineConfig,
    ratings: RatingTable,
    history: Vec<ContestSnapshot>,
}

impl Default for RatingEngine {
    fn default() -> Self {
        Self::new(EngineConfig::default())
    }
}

impl RatingEngine {
    /// Create an engine with an empty rating table
    pub fn new(config: EngineConfig) -> Self {
        Self::with_ratings(config, RatingTable::new())
    }

    /// Create an engine seeded with an existing rating table
    pub fn with_ratings(config: EngineConfig, ratings: RatingTable) -> Self {
        Self {
            config,
            ratings,
            history: Vec::new(),
        }
    }

    /// Current rating per contestant
    pub fn ratings(&self) -> &RatingTable {
        &self.ratings
    }

    /// One snapshot per processed contest, in processing order
    pub fn history(&self) -> &[ContestSnapshot] {
        &self.history
    }

    /// Consume the engine, yielding the final table and the history log
    pub fn into_parts(self) -> (RatingTable, Vec<ContestSnapshot>) {
        (self.ratings, self.history)
    }

    /// Apply one contest result to the rating table
    ///
    /// Fixes pre-contest state for the whole field, computes each
    /// entrant's seed from pre-contest ratings only, applies the scaled
    /// seed-deviation delta, then subtracts the zero-sum correction and
    /// commits. The full snapshot is appended to the history and returned.
    ///
    /// Empty rosters and rosters with duplicate identifiers are rejected
    /// before any state is touched; both would silently corrupt the seed
    /// and points computation, and every later contest depends on this
    /// one's outcome.
    pub fn process_contest(&mut self, roster: &ContestRoster) -> Result<ContestSnapshot> {
        if roster.is_empty() {
            return Err(RatingError::EmptyRoster.into());
        }

        let mut seen = HashSet::new();
        for id in roster.entrants() {
            if !seen.insert(id) {
                return Err(RatingError::DuplicateContestant {
                    contestant: id.clone(),
                }
                .into());
            }
        }

        let n = roster.len();

        let entrants: Vec<Entrant> = roster
            .entrants()
            .iter()
            .enumerate()
            .map(|(place, id)| {
                let existing = self.ratings.get(id).copied();
                Entrant {
                    id: id.clone(),
                    before: existing.unwrap_or(self.config.initial_rating),
                    is_new: existing.is_none(),
                    points: (n - place - 1) as i64,
                }
            })
            .collect();

        let seeds: Vec<f64> = (0..n).map(|i| self.seed(i, &entrants)).collect();

        // Raw delta per entrant plus the correction pool, each truncated
        // toward zero independently.
        let mut total_delta: i64 = 0;
        let mut afters: Vec<i64> = Vec::with_capacity(n);
        for (entrant, seed) in entrants.iter().zip(&seeds) {
            let deviation = entrant.points as f64 - seed;
            let delta = (self.config.gain_scale as f64 * deviation / n as f64) as i64;
            total_delta += (self.config.pool_scale as f64 * deviation / n as f64) as i64;
            afters.push(entrant.before + delta);
        }

        // Integer division truncates toward zero, matching the float casts
        // above.
        let correction = total_delta / n as i64;
        for after in &mut afters {
            *after -= correction;
        }

        self.log_expectations(&entrants, &afters, roster);

        let mut snapshot = ContestSnapshot::new();
        for ((entrant, seed), after) in entrants.iter().zip(&seeds).zip(&afters) {
            self.ratings.insert(entrant.id.clone(), *after);
            snapshot.insert(
                entrant.id.clone(),
                ContestantSnapshot {
                    before: entrant.before,
                    is_new: entrant.is_new,
                    points: entrant.points,
                    seed: *seed,
                    after: *after,
                },
            );
        }

        self.history.push(snapshot.clone());
        Ok(snapshot)
    }

    /// Expected score of `entrants[i]` against the rest of the field
    ///
    /// A new contestant is seeded at the middle of the field; a returning
    /// one gets the sum of pairwise win probabilities over all opponents,
    /// using pre-contest ratings only.
    fn seed(&self, i: usize, entrants: &[Entrant]) -> f64 {
        if entrants[i].is_new {
            return entrants.len() as f64 / 2.0;
        }

        entrants
            .iter()
            .enumerate()
            .filter(|(j, _)| *j != i)
            .map(|(_, other)| win_probability(entrants[i].before, other.before))
            .sum()
    }

    /// Diagnostic output only, never part of the committed state
    fn log_expectations(&self, entrants: &[Entrant], afters: &[i64], roster: &ContestRoster) {
        // Stable sort keeps roster order for equal ratings.
        let mut expected: Vec<&Entrant> = entrants.iter().collect();
        expected.sort_by_key(|e| Reverse(e.before));

        info!(
            "expected: {:?}",
            expected.iter().map(|e| e.id.as_str()).collect::<Vec<_>>()
        );
        info!("result: {:?}", roster.entrants());
        info!(
            "changes: {:?}",
            entrants
                .iter()
                .zip(afters)
                .map(|(e, after)| (e.id.as_str(), after - e.before))
                .collect::<Vec<_>>()
        );
    }
}
