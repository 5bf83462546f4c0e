//! Offline dataset builder.
//!
//! Merges the IMDb `title.basics.tsv` and `title.ratings.tsv` dumps into the
//! `movies.csv` file read by `myflix`.

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use data_loader::{DatasetBuilder, DEFAULT_VOTE_THRESHOLD};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "myflix-build")]
#[command(about = "Merge the IMDb title and rating dumps into the MyFlix dataset", long_about = None)]
struct Args {
    /// Path to title.basics.tsv
    #[arg(long, default_value = "title.basics.tsv")]
    titles: PathBuf,

    /// Path to title.ratings.tsv
    #[arg(long, default_value = "title.ratings.tsv")]
    ratings: PathBuf,

    /// Where to write the merged CSV
    #[arg(short, long, default_value = "movies.csv")]
    output: PathBuf,

    /// Drop movies with fewer votes than this
    #[arg(long, default_value_t = DEFAULT_VOTE_THRESHOLD)]
    min_votes: u64,
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let start = Instant::now();
    let summary = DatasetBuilder::new(&args.titles, &args.ratings)
        .min_votes(args.min_votes)
        .build_to(&args.output)
        .context("Failed to build movie dataset")?;

    println!(
        "{} Wrote {} movies to {} in {:?}",
        "✓".green(),
        summary.written,
        args.output.display(),
        start.elapsed()
    );
    Ok(())
}
