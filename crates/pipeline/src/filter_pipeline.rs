//! The FilterPipeline orchestrates multiple filters.
//!
//! This module provides the main FilterPipeline struct that chains
//! multiple filters together using the builder pattern.

use crate::criteria::FilterCriteria;
use crate::filters::{GenreFilter, MinimumVotesFilter, RatingFilter};
use crate::traits::Filter;
use data_loader::Movie;

/// Chains multiple filters together into a processing pipeline.
///
/// ## Usage
/// ```ignore
/// let pipeline = FilterPipeline::new()
///     .add_filter(RatingFilter::new(RatingConstraint::AtLeast(7.0)))
///     .add_filter(GenreFilter::include(&["Action"]))
///     .add_filter(MinimumVotesFilter::new(500_000));
///
/// let filtered = pipeline.apply(table.movies().iter().collect());
/// ```
pub struct FilterPipeline {
    filters: Vec<Box<dyn Filter>>,
}

impl FilterPipeline {
    /// Create a new empty FilterPipeline.
    pub fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// The standard chain for one set of criteria:
    /// rating, included genres, excluded genres, minimum votes.
    pub fn from_criteria(criteria: &FilterCriteria) -> Self {
        let mut pipeline = Self::new().add_filter(RatingFilter::new(criteria.rating));

        if !criteria.include_genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::include(&criteria.include_genres));
        }
        if !criteria.exclude_genres.is_empty() {
            pipeline = pipeline.add_filter(GenreFilter::exclude(&criteria.exclude_genres));
        }

        pipeline.add_filter(MinimumVotesFilter::new(criteria.min_votes))
    }

    /// Add a filter to the pipeline (builder pattern).
    ///
    /// # Arguments
    /// * `filter` - Any type implementing the Filter trait
    ///
    /// # Returns
    /// Self for method chaining
    pub fn add_filter(mut self, filter: impl Filter + 'static) -> Self {
        self.filters.push(Box::new(filter));
        self
    }

    /// Number of filters in the chain
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Apply all filters in sequence.
    ///
    /// Each stage logs its name with input and output counts at debug level.
    pub fn apply<'a>(&self, movies: Vec<&'a Movie>) -> Vec<&'a Movie> {
        let mut current = movies;
        for filter in &self.filters {
            tracing::debug!(
                "Applying filter: {} (input count: {})",
                filter.name(),
                current.len()
            );
            current = filter.apply(current);
            tracing::debug!(
                "Filter applied: {} (output count: {})",
                filter.name(),
                current.len()
            );
        }
        current
    }
}

impl Default for FilterPipeline {
    fn default() -> Self {
        Self::new()
    }
}
