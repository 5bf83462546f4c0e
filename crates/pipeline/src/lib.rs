//! Filtering pipeline and query entry points for movie recommendations.
//!
//! This crate provides:
//! - Filter trait and implementations (rating, genre, votes, title)
//! - FilterPipeline for composing filters
//! - FilterCriteria, the validated options for one query
//! - `recommend` and `search` over a loaded `MovieTable`
//!
//! ## Architecture
//! A query runs in three stages:
//! 1. Raw options are validated into `FilterCriteria`
//! 2. The criteria become a `FilterPipeline` that is applied to the table
//! 3. The surviving rows are truncated to the limit, keeping table order
//!
//! ## Example Usage
//! ```ignore
//! use data_loader::MovieTable;
//! use pipeline::{CriteriaOptions, FilterCriteria, recommend};
//!
//! let table = MovieTable::load_from_csv(Path::new("data/movies.csv"))?;
//! let criteria = FilterCriteria::try_from(CriteriaOptions {
//!     min_rating: Some(8.0),
//!     genres: Some("Crime".to_string()),
//!     ..Default::default()
//! })?;
//!
//! for movie in recommend(&table, &criteria) {
//!     println!("{:?}", movie.title);
//! }
//! ```

pub mod criteria;
pub mod filter_pipeline;
pub mod filters;
pub mod recommend;
pub mod traits;

// Re-export main types
pub use criteria::{CriteriaError, CriteriaOptions, DEFAULT_LIMIT, DEFAULT_MIN_VOTES, FilterCriteria};
pub use filter_pipeline::FilterPipeline;
pub use filters::RatingConstraint;
pub use recommend::{recommend, search};
pub use traits::Filter;
