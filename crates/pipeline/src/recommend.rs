//! Query entry points over a loaded `MovieTable`.
//!
//! The table is passed in explicitly and only borrowed; results point into
//! it and keep the table's order (rating descending for a built dataset).
//! The limit is applied after every filter.

use crate::criteria::FilterCriteria;
use crate::filter_pipeline::FilterPipeline;
use crate::filters::TitleFilter;
use data_loader::{Movie, MovieTable};

/// Recommend movies matching `criteria`.
///
/// Returns at most `criteria.limit` movies. No match is an empty list.
pub fn recommend<'a>(table: &'a MovieTable, criteria: &FilterCriteria) -> Vec<&'a Movie> {
    let pipeline = FilterPipeline::from_criteria(criteria);
    run(table, &pipeline, criteria.limit)
}

/// Like [`recommend`], restricted to titles containing `query` (case-insensitive)
pub fn search<'a>(table: &'a MovieTable, query: &str, criteria: &FilterCriteria) -> Vec<&'a Movie> {
    let pipeline = FilterPipeline::from_criteria(criteria).add_filter(TitleFilter::new(query));
    run(table, &pipeline, criteria.limit)
}

fn run<'a>(table: &'a MovieTable, pipeline: &FilterPipeline, limit: usize) -> Vec<&'a Movie> {
    let mut movies = pipeline.apply(table.movies().iter().collect());
    movies.truncate(limit);
    tracing::debug!("{} movies after limit {}", movies.len(), limit);
    movies
}
