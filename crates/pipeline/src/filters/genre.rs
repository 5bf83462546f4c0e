//! Include/exclude filter on the genre list.
//!
//! Matching is a case-insensitive substring test against the raw
//! comma-separated genre field, so "action" matches "Action,Adventure".

use crate::traits::Filter;
use data_loader::Movie;

/// Split a user-supplied comma list into trimmed, non-empty terms
pub fn parse_genre_terms(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .map(str::to_string)
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenreMode {
    /// Keep movies matching any term
    Include,
    /// Drop movies matching any term
    Exclude,
}

/// Keeps or drops movies by genre.
///
/// A movie with no genre list matches no term: `Include` drops it and
/// `Exclude` keeps it.
pub struct GenreFilter {
    mode: GenreMode,
    /// Lowercased terms
    terms: Vec<String>,
}

impl GenreFilter {
    pub fn new<S: AsRef<str>>(mode: GenreMode, terms: &[S]) -> Self {
        Self {
            mode,
            terms: terms.iter().map(|t| t.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn include<S: AsRef<str>>(terms: &[S]) -> Self {
        Self::new(GenreMode::Include, terms)
    }

    pub fn exclude<S: AsRef<str>>(terms: &[S]) -> Self {
        Self::new(GenreMode::Exclude, terms)
    }

    fn matches_any(&self, movie: &Movie) -> bool {
        match &movie.genres {
            Some(genres) => {
                let genres = genres.to_lowercase();
                self.terms.iter().any(|term| genres.contains(term.as_str()))
            }
            None => false,
        }
    }
}

impl Filter for GenreFilter {
    fn name(&self) -> &str {
        match self.mode {
            GenreMode::Include => "GenreIncludeFilter",
            GenreMode::Exclude => "GenreExcludeFilter",
        }
    }

    fn matches(&self, movie: &Movie) -> bool {
        match self.mode {
            GenreMode::Include => self.matches_any(movie),
            GenreMode::Exclude => !self.matches_any(movie),
        }
    }
}
