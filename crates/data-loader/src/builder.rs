//! Builds the merged movies dataset from the raw IMDb dumps.
//!
//! Steps:
//! 1. Parse title.basics, keeping cleaned movies only
//! 2. Parse title.ratings
//! 3. Inner join on `tconst`
//! 4. Sort by average rating, highest first
//! 5. Drop rows under the vote threshold
//! 6. Write the CSV

use crate::error::Result;
use crate::parser;
use crate::types::*;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Rows with fewer votes than this are dropped by default
pub const DEFAULT_VOTE_THRESHOLD: u64 = 1_000;

/// Counts collected while building, for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub titles_read: usize,
    pub movies_kept: usize,
    pub ratings_read: usize,
    pub joined: usize,
    pub pruned_low_votes: usize,
    pub written: usize,
}

/// Configuration for one dataset build
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    titles_path: PathBuf,
    ratings_path: PathBuf,
    min_votes: u64,
}

impl DatasetBuilder {
    pub fn new(titles_path: impl Into<PathBuf>, ratings_path: impl Into<PathBuf>) -> Self {
        Self {
            titles_path: titles_path.into(),
            ratings_path: ratings_path.into(),
            min_votes: DEFAULT_VOTE_THRESHOLD,
        }
    }

    /// Override the vote threshold (builder pattern)
    pub fn min_votes(mut self, min_votes: u64) -> Self {
        self.min_votes = min_votes;
        self
    }

    /// Run the merge in memory and return the finished table.
    ///
    /// Any parse failure aborts the whole build.
    pub fn build(&self) -> Result<(MovieTable, BuildSummary)> {
        tracing::info!("Reading titles from {}", self.titles_path.display());
        let titles = parser::parse_titles(&self.titles_path)?;

        tracing::info!("Reading ratings from {}", self.ratings_path.display());
        let ratings = parser::parse_ratings(&self.ratings_path)?;

        let mut summary = BuildSummary {
            titles_read: titles.rows_read,
            movies_kept: titles.records.len(),
            ratings_read: ratings.rows_read,
            ..Default::default()
        };

        let mut movies = join_titles_and_ratings(titles.records, ratings.records);
        summary.joined = movies.len();

        sort_by_rating_desc(&mut movies);

        let before = movies.len();
        retain_min_votes(&mut movies, self.min_votes);
        summary.pruned_low_votes = before - movies.len();
        summary.written = movies.len();

        Ok((MovieTable::from_movies(movies), summary))
    }

    /// Build and persist to `output`
    pub fn build_to(&self, output: &Path) -> Result<BuildSummary> {
        let (table, summary) = self.build()?;
        table.write_csv(output)?;

        tracing::info!(
            titles_read = summary.titles_read,
            movies_kept = summary.movies_kept,
            ratings_read = summary.ratings_read,
            joined = summary.joined,
            pruned_low_votes = summary.pruned_low_votes,
            written = summary.written,
            "Dataset written to {}",
            output.display()
        );
        Ok(summary)
    }
}

/// Inner join: a movie survives only if its id has a rating and vice versa.
///
/// Output follows the order of `titles`.
pub fn join_titles_and_ratings(
    titles: Vec<TitleBasics>,
    ratings: Vec<(TitleId, TitleRating)>,
) -> Vec<Movie> {
    let ratings: HashMap<TitleId, TitleRating> = ratings.into_iter().collect();

    titles
        .into_iter()
        .filter_map(|basics| {
            let rating = *ratings.get(&basics.id)?;
            Some(Movie::from_parts(basics, rating))
        })
        .collect()
}

/// Sort by average rating, highest first. Ties keep no particular order.
pub fn sort_by_rating_desc(movies: &mut [Movie]) {
    movies.sort_unstable_by(|a, b| {
        let a = a.rating.unwrap_or(f32::NEG_INFINITY);
        let b = b.rating.unwrap_or(f32::NEG_INFINITY);
        b.total_cmp(&a)
    });
}

/// Keep rows with at least `min_votes` votes; unknown counts are dropped
pub fn retain_min_votes(movies: &mut Vec<Movie>, min_votes: u64) {
    movies.retain(|m| m.num_votes.is_some_and(|v| v >= min_votes));
}
