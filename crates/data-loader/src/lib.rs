//! # Data Loader Crate
//!
//! This crate owns the movie dataset: building it from the raw IMDb dumps
//! and loading the finished CSV back into memory.
//!
//! ## Main Components
//!
//! - **types**: Raw records, the merged `Movie` record, `MovieTable`
//! - **parser**: Parse the tab-separated IMDb files
//! - **builder**: Join, sort and prune into the final dataset
//! - **table**: Read and write the merged CSV
//! - **error**: Error types for data loading
//!
//! ## Example Usage
//!
//! ```ignore
//! use data_loader::{DatasetBuilder, MovieTable};
//! use std::path::Path;
//!
//! // Offline: merge the raw dumps
//! DatasetBuilder::new("title.basics.tsv", "title.ratings.tsv")
//!     .build_to(Path::new("data/movies.csv"))?;
//!
//! // Per invocation: load the merged table
//! let table = MovieTable::load_from_csv(Path::new("data/movies.csv"))?;
//! println!("{} movies", table.len());
//! ```

// Public modules
pub mod builder;
pub mod error;
pub mod parser;
pub mod table;
pub mod types;

// Re-export commonly used types for convenience
pub use builder::{BuildSummary, DEFAULT_VOTE_THRESHOLD, DatasetBuilder};
pub use error::{DataLoadError, Result};
pub use types::{MOVIE_COLUMNS, Movie, MovieTable, RawRating, RawTitle, TitleBasics, TitleId, TitleRating};
