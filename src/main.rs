//! Main entry point for the contest-ladder rating tool
//!
//! Loads an ordered contest series from disk, folds it through the rating
//! engine strictly in order, and writes the final rating table plus the
//! per-contest history log as JSON.

use anyhow::Result;
use clap::Parser;
use contest_ladder::config::EngineConfig;
use contest_ladder::contest::loader;
use contest_ladder::output;
use contest_ladder::rating::RatingEngine;
use contest_ladder::types::RatingTable;
use std::path::PathBuf;
use tracing::info;

/// Contest Ladder - Elo-style ratings for ranked contest series
#[derive(Parser)]
#[command(
    name = "contest-ladder",
    version,
    about = "Compute Elo-style ratings over an ordered series of ranked contests",
    long_about = "Contest Ladder ingests a contests directory (an `info` index naming one \
                 contest file per line, each contest file listing one contestant per line, \
                 best first), updates ratings contest by contest, and writes the final \
                 rating table plus a full per-contest history log as JSON."
)]
struct Args {
    /// Contests directory
    #[arg(
        long,
        value_name = "DIR",
        help = "Directory containing contest files and an `info` index"
    )]
    contests_dir: PathBuf,

    /// Final ratings output
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to write the final rating table (JSON)"
    )]
    result_path: PathBuf,

    /// History log output
    #[arg(
        long,
        value_name = "FILE",
        help = "Path to write the per-contest history log (JSON)"
    )]
    log_path: PathBuf,

    /// Optional initial ratings
    #[arg(
        long,
        value_name = "FILE",
        help = "Optional initial rating table to seed the engine (JSON object)"
    )]
    initial_ratings: Option<PathBuf>,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,
}

/// Initialize structured logging with the configured level
///
/// Diagnostics go to stderr so the process can be piped without mixing
/// logs into data output.
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    if let Err(e) = init_logging(args.log_level.as_deref().unwrap_or("info")) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    let config = EngineConfig::default();
    config.validate()?;

    let initial = match &args.initial_ratings {
        Some(path) => loader::load_initial_ratings(path)?,
        None => RatingTable::new(),
    };

    let series = loader::load_series(&args.contests_dir)?;
    info!(
        "loaded {} contests from {}",
        series.len(),
        args.contests_dir.display()
    );

    // Strictly sequential: each contest depends on the rating state left
    // by the previous one.
    let mut engine = RatingEngine::with_ratings(config, initial);
    for roster in &series {
        engine.process_contest(roster)?;
    }

    let (ratings, history) = engine.into_parts();
    output::write_ratings(&args.result_path, &ratings)?;
    output::write_history(&args.log_path, &history)?;

    info!(
        "✅ rated {} contestants across {} contests",
        ratings.len(),
        history.len()
    );
    Ok(())
}
