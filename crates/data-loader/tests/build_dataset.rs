//! End-to-end tests for the dataset builder.
//!
//! Small raw TSV fixtures are written to a temp dir, merged, and the
//! resulting CSV is read back.

use data_loader::{DataLoadError, DatasetBuilder, MovieTable};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const BASICS: &str = "\
tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres
tt0000001\tmovie\tThe Shawshank Redemption\tThe Shawshank Redemption\t0\t1994\t\\N\t142\tDrama
tt0000002\tmovie\tThe \"Great\" Escape\tThe Great Escape\t0\t1963\t\\N\t\\N\tAdventure,Drama,History
tt0000003\ttvSeries\tBreaking Bad\tBreaking Bad\t0\t2008\t2013\t49\tCrime,Drama,Thriller
tt0000004\tmovie\tNo Year\tNo Year\t0\t\\N\t\\N\t90\tComedy
tt0000005\tmovie\tNo Genres\tNo Genres\t0\t2001\t\\N\t90\t\\N
tt0000006\tmovie\tUnrated Movie\tUnrated Movie\t0\t2010\t\\N\t100\tHorror
tt0000007\tmovie\tObscure Gem\tObscure Gem\t0\t2015\t\\N\t88\tDocumentary
tt0000008\tmovie\tHeat\tHeat\t0\t1995\t\\N\t170\tAction,Crime,Drama
";

const RATINGS: &str = "\
tconst\taverageRating\tnumVotes
tt0000001\t9.3\t2900000
tt0000002\t8.2\t260000
tt0000003\t9.5\t2100000
tt0000004\t7.0\t5000
tt0000005\t7.0\t5000
tt0000007\t9.9\t120
tt0000008\t8.3\t700000
tt0000099\t8.8\t50000
";

fn write_fixtures(basics: &str, ratings: &str) -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("title.basics.tsv"), basics).unwrap();
    fs::write(dir.path().join("title.ratings.tsv"), ratings).unwrap();
    dir
}

fn builder_for(dir: &Path) -> DatasetBuilder {
    DatasetBuilder::new(
        dir.join("title.basics.tsv"),
        dir.join("title.ratings.tsv"),
    )
}

#[test]
fn test_build_merges_filters_and_sorts() {
    let dir = write_fixtures(BASICS, RATINGS);
    let output = dir.path().join("movies.csv");

    let summary = builder_for(dir.path()).build_to(&output).unwrap();

    assert_eq!(summary.titles_read, 8);
    assert_eq!(summary.movies_kept, 5);
    assert_eq!(summary.ratings_read, 8);
    assert_eq!(summary.joined, 4);
    assert_eq!(summary.pruned_low_votes, 1);
    assert_eq!(summary.written, 3);

    let table = MovieTable::load_from_csv(&output).unwrap();
    let ids: Vec<_> = table.movies().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["tt0000001", "tt0000008", "tt0000002"]);

    // Ratings are non-increasing
    let ratings: Vec<f32> = table.movies().iter().map(|m| m.rating.unwrap()).collect();
    assert!(ratings.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_build_keeps_quotes_and_missing_runtime() {
    let dir = write_fixtures(BASICS, RATINGS);
    let output = dir.path().join("movies.csv");
    builder_for(dir.path()).build_to(&output).unwrap();

    let table = MovieTable::load_from_csv(&output).unwrap();
    let escape = table.get_movie("tt0000002").unwrap();

    assert_eq!(escape.title.as_deref(), Some("The \"Great\" Escape"));
    assert_eq!(escape.lower_title.as_deref(), Some("the \"great\" escape"));
    assert_eq!(escape.genres.as_deref(), Some("Adventure,Drama,History"));
    assert_eq!(escape.runtime_minutes, None);
    assert_eq!(escape.year, Some(1963));
}

#[test]
fn test_build_custom_vote_threshold() {
    let dir = write_fixtures(BASICS, RATINGS);

    let (table, summary) = builder_for(dir.path()).min_votes(100).build().unwrap();

    assert_eq!(summary.written, 4);
    assert_eq!(table.movies()[0].id, "tt0000007");
}

#[test]
fn test_build_fails_on_missing_input() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("title.basics.tsv"), BASICS).unwrap();
    let output = dir.path().join("movies.csv");

    let err = builder_for(dir.path()).build_to(&output).unwrap_err();

    assert!(matches!(err, DataLoadError::FileNotFound { .. }));
    assert!(!output.exists());
}

#[test]
fn test_build_fails_on_bad_rating_without_output() {
    let bad_ratings = "\
tconst\taverageRating\tnumVotes
tt0000001\t9.3\t2900000
tt0000008\tnot-a-number\t700000
";
    let dir = write_fixtures(BASICS, bad_ratings);
    let output = dir.path().join("movies.csv");

    let err = builder_for(dir.path()).build_to(&output).unwrap_err();

    match err {
        DataLoadError::ParseError { line, .. } => assert_eq!(line, 3),
        other => panic!("unexpected error: {other}"),
    }
    assert!(!output.exists());
}

#[test]
fn test_build_all_below_threshold_writes_header_only() {
    let dir = write_fixtures(BASICS, RATINGS);
    let output = dir.path().join("movies.csv");

    let summary = builder_for(dir.path())
        .min_votes(10_000_000)
        .build_to(&output)
        .unwrap();

    assert_eq!(summary.written, 0);
    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content.trim_end(),
        "tconst,primaryTitle,lowerTitle,genres,averageRating,numVotes,runtimeMinutes,startYear"
    );
    assert!(MovieTable::load_from_csv(&output).unwrap().is_empty());
}
