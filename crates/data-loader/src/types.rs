//! Core domain types for the merged IMDb movie dataset.
//!
//! Three families of types live here:
//! - the raw records read from the two IMDb dumps (`RawTitle`, `RawRating`)
//! - the merged `Movie` record that gets persisted to CSV
//! - `MovieTable`, the in-memory table the recommender filters over

use serde::{Deserialize, Serialize};

// =============================================================================
// Type Aliases
// =============================================================================

/// IMDb title identifier (e.g. "tt0111161")
pub type TitleId = String;

/// Header of the persisted movies CSV, in column order
pub const MOVIE_COLUMNS: [&str; 8] = [
    "tconst",
    "primaryTitle",
    "lowerTitle",
    "genres",
    "averageRating",
    "numVotes",
    "runtimeMinutes",
    "startYear",
];

/// The only `titleType` value the builder keeps
pub const MOVIE_TITLE_TYPE: &str = "movie";

// =============================================================================
// Raw Records
// =============================================================================

/// One row of `title.basics.tsv`.
///
/// Only the columns the builder keeps are declared; `originalTitle`,
/// `isAdult` and `endYear` are skipped while reading.
///
/// Every column except the identifier may hold the `\N` null sentinel, so
/// they all come in as `Option<String>`. Numeric coercion happens later in
/// the parser, where an unparsable value simply becomes `None`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawTitle {
    pub tconst: TitleId,
    #[serde(rename = "titleType", deserialize_with = "crate::parser::nullable")]
    pub title_type: Option<String>,
    #[serde(rename = "primaryTitle", deserialize_with = "crate::parser::nullable")]
    pub primary_title: Option<String>,
    #[serde(rename = "startYear", deserialize_with = "crate::parser::nullable")]
    pub start_year: Option<String>,
    #[serde(rename = "runtimeMinutes", deserialize_with = "crate::parser::nullable")]
    pub runtime_minutes: Option<String>,
    #[serde(deserialize_with = "crate::parser::nullable")]
    pub genres: Option<String>,
}

/// One row of `title.ratings.tsv`, still unparsed
#[derive(Debug, Clone, Deserialize)]
pub struct RawRating {
    pub tconst: TitleId,
    #[serde(rename = "averageRating", deserialize_with = "crate::parser::nullable")]
    pub average_rating: Option<String>,
    #[serde(rename = "numVotes", deserialize_with = "crate::parser::nullable")]
    pub num_votes: Option<String>,
}

/// A cleaned title: a movie with a known year and genre list
#[derive(Debug, Clone, PartialEq)]
pub struct TitleBasics {
    pub id: TitleId,
    pub primary_title: Option<String>,
    pub genres: String,
    pub start_year: Option<i32>,
    pub runtime_minutes: Option<u32>,
}

/// A parsed rating row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleRating {
    /// Average rating, 0.0 to 10.0
    pub average_rating: f32,
    pub num_votes: Option<u64>,
}

// =============================================================================
// Movie Record
// =============================================================================

/// A merged movie record, as written by the builder and read by the CLI.
///
/// Column names and order match the persisted CSV header. When reading the
/// file back every cell besides the identifier is optional: an empty or
/// unparsable cell becomes `None` instead of failing the load, and the
/// renderer shows it as a placeholder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    #[serde(rename = "tconst")]
    pub id: TitleId,

    #[serde(rename = "primaryTitle", default, deserialize_with = "csv::invalid_option")]
    pub title: Option<String>,

    /// Lowercased `title`, used for case-insensitive title lookup
    #[serde(rename = "lowerTitle", default, deserialize_with = "csv::invalid_option")]
    pub lower_title: Option<String>,

    /// Comma-separated genre list, e.g. "Action,Adventure,Sci-Fi"
    #[serde(default, deserialize_with = "csv::invalid_option")]
    pub genres: Option<String>,

    #[serde(rename = "averageRating", default, deserialize_with = "csv::invalid_option")]
    pub rating: Option<f32>,

    #[serde(rename = "numVotes", default, deserialize_with = "csv::invalid_option")]
    pub num_votes: Option<u64>,

    #[serde(rename = "runtimeMinutes", default, deserialize_with = "csv::invalid_option")]
    pub runtime_minutes: Option<u32>,

    #[serde(rename = "startYear", default, deserialize_with = "csv::invalid_option")]
    pub year: Option<i32>,
}

impl Movie {
    /// Merge a cleaned title with its rating (one inner-join hit)
    pub fn from_parts(basics: TitleBasics, rating: TitleRating) -> Self {
        let lower_title = basics.primary_title.as_ref().map(|t| t.to_lowercase());
        Self {
            id: basics.id,
            title: basics.primary_title,
            lower_title,
            genres: Some(basics.genres),
            rating: Some(rating.average_rating),
            num_votes: rating.num_votes,
            runtime_minutes: basics.runtime_minutes,
            year: basics.start_year,
        }
    }
}

// =============================================================================
// MovieTable
// =============================================================================

/// The whole dataset held in memory, in on-disk order.
///
/// The builder persists rows sorted by rating (descending) and nothing here
/// reorders them, so consumers can rely on `movies()` being rating-sorted
/// when the table came from a builder-produced file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MovieTable {
    pub(crate) movies: Vec<Movie>,
}

impl MovieTable {
    /// Creates an empty table
    pub fn new() -> Self {
        Self { movies: Vec::new() }
    }

    /// Wrap already-ordered records
    pub fn from_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// All records, in table order
    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Look a record up by identifier (linear scan)
    pub fn get_movie(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    pub fn into_movies(self) -> Vec<Movie> {
        self.movies
    }
}

impl FromIterator<Movie> for MovieTable {
    fn from_iter<I: IntoIterator<Item = Movie>>(iter: I) -> Self {
        Self {
            movies: iter.into_iter().collect(),
        }
    }
}
