//! Elo pairwise win-probability kernel
//!
//! Thin wrapper over the Elo expected-score function from the
//! skillratings crate.

use skillratings::elo::{expected_score, EloRating};

/// Probability that a contestant rated `ra` beats one rated `rb`
///
/// Standard Elo expected score, `1 / (1 + 10^((rb - ra) / 400))`.
/// Symmetric in the sense that `win_probability(a, b) +
/// win_probability(b, a) == 1`, equals 0.5 for equal ratings, and is
/// strictly increasing in `ra` and strictly decreasing in `rb`.
pub fn win_probability(ra: i64, rb: i64) -> f64 {
    let (expected, _) = expected_score(
        &EloRating { rating: ra as f64 },
        &EloRating { rating: rb as f64 },
    );
    expected
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equal_ratings_are_even_odds() {
        assert!((win_probability(1500, 1500) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_symmetry() {
        let p = win_probability(1700, 1300);
        let q = win_probability(1300, 1700);
        assert!((p + q - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_four_hundred_point_gap() {
        // A 400-point favorite wins 10 games out of 11.
        let p = win_probability(1900, 1500);
        assert!((p - 10.0 / 11.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic_in_both_arguments() {
        assert!(win_probability(1600, 1500) > win_probability(1500, 1500));
        assert!(win_probability(1500, 1600) < win_probability(1500, 1500));
    }
}
