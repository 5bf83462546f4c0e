//! Reading and writing the merged movies CSV.
//!
//! The persisted file is plain comma-separated text with a header row and
//! no index column. Missing values are empty cells.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use std::path::Path;
use tempfile::NamedTempFile;

impl MovieTable {
    /// Load the prebuilt dataset from a CSV file.
    ///
    /// Rows are kept in file order. Cells that are empty or don't parse
    /// become `None`; only structural CSV problems are errors.
    pub fn load_from_csv(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(DataLoadError::FileNotFound {
                path: path.to_path_buf(),
            });
        }
        let file = path.display().to_string();

        let mut reader = csv::Reader::from_path(path).map_err(|e| DataLoadError::csv(&file, e))?;
        let movies = reader
            .deserialize::<Movie>()
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| DataLoadError::csv(&file, e))?;

        tracing::debug!("Loaded {} movies from {}", movies.len(), file);
        Ok(Self { movies })
    }

    /// Write the table as CSV.
    ///
    /// The rows go to a temporary file next to `path` which is renamed over
    /// `path` only once everything has been flushed, so a failed write never
    /// leaves a truncated dataset behind. The header is always written, even
    /// for an empty table.
    pub fn write_csv(&self, path: &Path) -> Result<()> {
        let file = path.display().to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let tmp = NamedTempFile::new_in(dir)?;
        {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(tmp.as_file());
            writer
                .write_record(MOVIE_COLUMNS)
                .map_err(|e| DataLoadError::csv(&file, e))?;
            for movie in &self.movies {
                writer
                    .serialize(movie)
                    .map_err(|e| DataLoadError::csv(&file, e))?;
            }
            writer.flush()?;
        }

        tmp.persist(path).map_err(|e| DataLoadError::Persist {
            path: path.to_path_buf(),
            source: e.error,
        })?;

        tracing::debug!("Wrote {} movies to {}", self.movies.len(), file);
        Ok(())
    }
}
