//! Loading contest series from disk
//!
//! Input collaborator for the rating engine. A contests directory holds an
//! `info` index file naming one contest file per line, in processing
//! order; each named contest file lists one contestant per line, best
//! first.

use crate::contest::ContestRoster;
use crate::error::{RatingError, Result};
use crate::types::RatingTable;
use std::fs;
use std::path::Path;
use tracing::debug;

fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        RatingError::MalformedContestFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}

/// Load a single contest result file
pub fn load_contest(path: &Path) -> Result<ContestRoster> {
    Ok(ContestRoster::from_lines(&read_file(path)?))
}

/// Load an ordered contest series from a directory
///
/// The directory's `info` file lists contest file names one per line; that
/// listing order is the processing order.
pub fn load_series(dir: &Path) -> Result<Vec<ContestRoster>> {
    let index = read_file(&dir.join("info"))?;

    let mut series = Vec::new();
    for name in index.lines().map(str::trim).filter(|l| !l.is_empty()) {
        let roster = load_contest(&dir.join(name))?;
        debug!("loaded contest {} with {} entrants", name, roster.len());
        series.push(roster);
    }

    Ok(series)
}

/// Load an initial rating table from a JSON object file (string -> integer)
pub fn load_initial_ratings(path: &Path) -> Result<RatingTable> {
    let text = fs::read_to_string(path).map_err(|e| RatingError::MalformedRatingsFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&text).map_err(|e| {
        RatingError::MalformedRatingsFile {
            path: path.to_path_buf(),
            message: e.to_string(),
        }
        .into()
    })
}
