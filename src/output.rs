//! JSON report writing
//!
//! Output collaborator for the engine: serializes the final rating table
//! and the history log as pretty-printed JSON. Both structures are keyed
//! by `BTreeMap`, so key ordering is sorted and reproducible across runs.

use crate::error::Result;
use crate::types::{ContestSnapshot, RatingTable};
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, value)?;
    writer.flush()?;
    Ok(())
}

/// Write the final rating table
pub fn write_ratings(path: &Path, ratings: &RatingTable) -> Result<()> {
    write_json(path, ratings)
}

/// Write the full per-contest history log
pub fn write_history(path: &Path, history: &[ContestSnapshot]) -> Result<()> {
    write_json(path, history)
}
