//! Error types for the data-loader crate.
//!
//! Everything that can go wrong while reading the raw IMDb dumps, building
//! the merged dataset, or loading it back lives in [`DataLoadError`].

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while building or loading the movie dataset
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// Input file does not exist
    #[error("Failed to open file: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// I/O error occurred while reading or writing a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The csv reader/writer rejected a record
    #[error("CSV error in {file}: {source}")]
    Csv {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// A required field couldn't be parsed
    ///
    /// `line` is 1-based and counts the header row.
    #[error("Parse error at line {line} in {file}: {reason}")]
    ParseError {
        file: String,
        line: usize,
        reason: String,
    },

    /// The finished dataset couldn't be moved into its final location
    #[error("Failed to persist dataset to {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DataLoadError {
    pub(crate) fn csv(file: &str, source: csv::Error) -> Self {
        DataLoadError::Csv {
            file: file.to_string(),
            source,
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, DataLoadError>;
