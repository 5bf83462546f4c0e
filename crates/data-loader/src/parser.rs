//! Parser for the raw IMDb TSV dumps.
//!
//! This module handles the two files the builder merges:
//! - title.basics.tsv: tconst, titleType, primaryTitle, originalTitle,
//!   isAdult, startYear, endYear, runtimeMinutes, genres
//! - title.ratings.tsv: tconst, averageRating, numVotes
//!
//! Columns are matched by header name. Both files use `\N` for missing
//! values and contain bare `"` characters inside titles, so quote handling
//! is turned off.

use crate::error::{DataLoadError, Result};
use crate::types::*;
use serde::{Deserialize, Deserializer};
use std::fs::File;
use std::path::Path;
use std::str::FromStr;

/// Null sentinel used by the IMDb dumps
pub const NULL_SENTINEL: &str = "\\N";

/// Records read from one raw file, plus how many rows were seen in total
#[derive(Debug)]
pub struct Parsed<T> {
    pub records: Vec<T>,
    pub rows_read: usize,
}

/// serde helper: `\N` and empty cells become `None`
pub(crate) fn nullable<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    if value.is_empty() || value == NULL_SENTINEL {
        Ok(None)
    } else {
        Ok(Some(value))
    }
}

/// Parse an optional numeric cell, turning anything unparsable into `None`
pub fn coerce_numeric<T: FromStr>(value: Option<&str>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn file_label(path: &Path) -> String {
    path.display().to_string()
}

/// Open a tab-separated file with a header row
fn open_tsv(path: &Path) -> Result<csv::Reader<File>> {
    if !path.exists() {
        return Err(DataLoadError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .quoting(false)
        .has_headers(true)
        .from_path(path)
        .map_err(|e| DataLoadError::csv(&file_label(path), e))
}

/// Clean one raw title row.
///
/// Returns `None` for anything that is not a movie, or that lacks a start
/// year or genre list. A present but unparsable year or runtime survives
/// with the numeric field set to `None`.
pub fn clean_title(raw: RawTitle) -> Option<TitleBasics> {
    if raw.title_type.as_deref() != Some(MOVIE_TITLE_TYPE) {
        return None;
    }
    let start_year = raw.start_year?;
    let genres = raw.genres?;

    Some(TitleBasics {
        id: raw.tconst,
        primary_title: raw.primary_title,
        genres,
        start_year: coerce_numeric(Some(&start_year)),
        runtime_minutes: coerce_numeric(raw.runtime_minutes.as_deref()),
    })
}

/// Parse the title.basics.tsv file, keeping only cleaned movies
pub fn parse_titles(path: &Path) -> Result<Parsed<TitleBasics>> {
    let file = file_label(path);
    let mut reader = open_tsv(path)?;
    let mut records = Vec::new();
    let mut rows_read = 0;

    for result in reader.deserialize::<RawTitle>() {
        let raw = result.map_err(|e| DataLoadError::csv(&file, e))?;
        rows_read += 1;
        if let Some(title) = clean_title(raw) {
            records.push(title);
        }
    }

    tracing::debug!("{}: {} rows, {} movies kept", file, rows_read, records.len());
    Ok(Parsed { records, rows_read })
}

/// Parse one raw rating row.
///
/// `averageRating` is required: a missing or unparsable value is an error
/// carrying the line number. `numVotes` is coerced like the title numerics.
pub fn parse_rating(raw: RawRating, file: &str, line: usize) -> Result<(TitleId, TitleRating)> {
    let rating_str = raw.average_rating.ok_or_else(|| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: "Missing averageRating".to_string(),
    })?;

    let average_rating: f32 = rating_str.trim().parse().map_err(|e| DataLoadError::ParseError {
        file: file.to_string(),
        line,
        reason: format!("Invalid averageRating {:?}: {}", rating_str, e),
    })?;

    if !average_rating.is_finite() || !(0.0..=10.0).contains(&average_rating) {
        return Err(DataLoadError::ParseError {
            file: file.to_string(),
            line,
            reason: format!("averageRating {:?} is outside 0-10", rating_str),
        });
    }

    let rating = TitleRating {
        average_rating,
        num_votes: coerce_numeric(raw.num_votes.as_deref()),
    };
    Ok((raw.tconst, rating))
}

/// Parse the title.ratings.tsv file
pub fn parse_ratings(path: &Path) -> Result<Parsed<(TitleId, TitleRating)>> {
    let file = file_label(path);
    let mut reader = open_tsv(path)?;
    let mut records = Vec::new();

    for (idx, result) in reader.deserialize::<RawRating>().enumerate() {
        // +1 for 1-based lines, +1 for the header row
        let line_no = idx + 2;
        let raw = result.map_err(|e| DataLoadError::csv(&file, e))?;
        records.push(parse_rating(raw, &file, line_no)?);
    }

    let rows_read = records.len();
    tracing::debug!("{}: {} ratings", file, rows_read);
    Ok(Parsed { records, rows_read })
}
