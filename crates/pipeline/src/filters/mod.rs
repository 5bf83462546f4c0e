//! Filter implementations for the movie pipeline.
//!
//! This module contains all the concrete filter implementations
//! that can be composed into a FilterPipeline.

pub mod genre;
pub mod minimum_votes;
pub mod rating;
pub mod title;

// Re-export for convenience
pub use genre::{GenreFilter, GenreMode, parse_genre_terms};
pub use minimum_votes::MinimumVotesFilter;
pub use rating::{RATING_MAX, RATING_MIN, RatingConstraint, RatingFilter};
pub use title::TitleFilter;
