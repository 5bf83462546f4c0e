//! Filter criteria for one recommendation query.
//!
//! `CriteriaOptions` mirrors what a caller may or may not have supplied;
//! every field is an `Option` so "explicitly given" can be told apart from
//! "left at the default". `FilterCriteria` is the validated result with
//! defaults filled in.

use crate::filters::{RatingConstraint, parse_genre_terms};
use thiserror::Error;

/// Results shown when no limit is given
pub const DEFAULT_LIMIT: usize = 5;
/// Vote threshold used when none is given
pub const DEFAULT_MIN_VOTES: u64 = 500_000;

/// Reasons a set of options can't form valid criteria
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("Options --min-rating and --rating-range are mutually exclusive")]
    ConflictingRatingFilters,

    #[error("Invalid --rating-range: low ({low}) must not be greater than high ({high})")]
    InvalidRatingRange { low: f32, high: f32 },

    #[error("--limit must be at least 1")]
    ZeroLimit,
}

/// Raw, possibly-absent query options
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CriteriaOptions {
    pub limit: Option<usize>,
    pub min_rating: Option<f32>,
    pub rating_range: Option<(f32, f32)>,
    /// Comma-separated genres to include
    pub genres: Option<String>,
    /// Comma-separated genres to exclude
    pub exclude: Option<String>,
    pub min_votes: Option<u64>,
}

/// Validated constraints for one query
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    /// Maximum number of results, always at least 1
    pub limit: usize,
    pub rating: RatingConstraint,
    /// Empty means no include filter
    pub include_genres: Vec<String>,
    /// Empty means no exclude filter
    pub exclude_genres: Vec<String>,
    pub min_votes: u64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            limit: DEFAULT_LIMIT,
            rating: RatingConstraint::default(),
            include_genres: Vec::new(),
            exclude_genres: Vec::new(),
            min_votes: DEFAULT_MIN_VOTES,
        }
    }
}

impl TryFrom<CriteriaOptions> for FilterCriteria {
    type Error = CriteriaError;

    fn try_from(options: CriteriaOptions) -> Result<Self, Self::Error> {
        let rating = match (options.min_rating, options.rating_range) {
            (Some(_), Some(_)) => return Err(CriteriaError::ConflictingRatingFilters),
            (Some(min), None) => RatingConstraint::AtLeast(min),
            (None, Some((low, high))) => {
                // also rejects NaN bounds
                if !(low <= high) {
                    return Err(CriteriaError::InvalidRatingRange { low, high });
                }
                RatingConstraint::Within { low, high }
            }
            (None, None) => RatingConstraint::default(),
        };

        let limit = options.limit.unwrap_or(DEFAULT_LIMIT);
        if limit == 0 {
            return Err(CriteriaError::ZeroLimit);
        }

        Ok(Self {
            limit,
            rating,
            include_genres: options.genres.as_deref().map(parse_genre_terms).unwrap_or_default(),
            exclude_genres: options.exclude.as_deref().map(parse_genre_terms).unwrap_or_default(),
            min_votes: options.min_votes.unwrap_or(DEFAULT_MIN_VOTES),
        })
    }
}
