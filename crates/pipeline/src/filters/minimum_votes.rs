//! Filter to drop movies with too few votes.
//!
//! Ratings backed by only a handful of votes are unreliable, and a high
//! threshold also steers results towards well-known titles.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies with at least `min_votes` votes.
///
/// Movies with an unknown vote count never match.
pub struct MinimumVotesFilter {
    min_votes: u64,
}

impl MinimumVotesFilter {
    pub fn new(min_votes: u64) -> Self {
        Self { min_votes }
    }
}

impl Filter for MinimumVotesFilter {
    fn name(&self) -> &str {
        "MinimumVotesFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie.num_votes.is_some_and(|votes| votes >= self.min_votes)
    }
}
