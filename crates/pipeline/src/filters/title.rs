//! Title lookup on the normalized (lowercased) title column.

use crate::traits::Filter;
use data_loader::Movie;

/// Keeps movies whose title contains the query, ignoring case.
///
/// Uses the stored `lowerTitle` and falls back to lowercasing the primary
/// title when that cell is missing.
pub struct TitleFilter {
    query: String,
}

impl TitleFilter {
    pub fn new(query: &str) -> Self {
        Self {
            query: query.trim().to_lowercase(),
        }
    }
}

impl Filter for TitleFilter {
    fn name(&self) -> &str {
        "TitleFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        if let Some(lower) = &movie.lower_title {
            return lower.contains(&self.query);
        }
        movie
            .title
            .as_ref()
            .is_some_and(|title| title.to_lowercase().contains(&self.query))
    }
}
