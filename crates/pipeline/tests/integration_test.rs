//! Integration tests for the recommendation pipeline.
//!
//! These tests run `recommend` against a realistic table and check the
//! properties every result set must satisfy, plus the full round trip from
//! raw IMDb dumps through the builder and back.

use data_loader::{DatasetBuilder, Movie, MovieTable};
use pipeline::{CriteriaOptions, FilterCriteria, RatingConstraint, recommend};
use std::fs;

fn movie(id: &str, title: &str, rating: f32, votes: u64, genres: Option<&str>) -> Movie {
    Movie {
        id: id.to_string(),
        title: Some(title.to_string()),
        lower_title: Some(title.to_lowercase()),
        genres: genres.map(str::to_string),
        rating: Some(rating),
        num_votes: Some(votes),
        runtime_minutes: Some(120),
        year: Some(2000),
    }
}

/// Already sorted by rating, highest first, like a built dataset
fn create_test_table() -> MovieTable {
    MovieTable::from_movies(vec![
        movie("tt01", "The Shawshank Redemption", 9.3, 2_900_000, Some("Drama")),
        movie("tt02", "The Godfather", 9.2, 2_000_000, Some("Crime,Drama")),
        movie("tt03", "The Dark Knight", 9.0, 2_800_000, Some("Action,Crime,Drama")),
        movie("tt04", "Obscure Festival Film", 8.9, 1_500, Some("Drama")),
        movie("tt05", "Pulp Fiction", 8.9, 2_200_000, Some("Crime,Drama")),
        movie("tt06", "Inception", 8.8, 2_500_000, Some("Action,Adventure,Sci-Fi")),
        movie("tt07", "Spirited Away", 8.6, 850_000, Some("Adventure,Animation,Family")),
        movie("tt08", "Mystery Genres", 8.5, 900_000, None),
        movie("tt09", "Alien", 8.5, 950_000, Some("Horror,Sci-Fi")),
        movie("tt10", "Die Hard", 8.2, 950_000, Some("Action,Thriller")),
        movie("tt11", "Shaun of the Dead", 7.9, 600_000, Some("Comedy,Horror")),
        movie("tt12", "Paddington 2", 7.8, 90_000, Some("Adventure,Comedy,Family")),
        movie("tt13", "Mamma Mia!", 6.5, 260_000, Some("Comedy,Musical,Romance")),
        movie("tt14", "The Room", 3.6, 100_000, Some("Drama")),
    ])
}

fn criteria(options: CriteriaOptions) -> FilterCriteria {
    FilterCriteria::try_from(options).unwrap()
}

fn ids(movies: &[&Movie]) -> Vec<String> {
    movies.iter().map(|m| m.id.clone()).collect()
}

#[test]
fn test_defaults_return_top_five_popular() {
    let table = create_test_table();
    let result = recommend(&table, &FilterCriteria::default());

    assert_eq!(ids(&result), vec!["tt01", "tt02", "tt03", "tt05", "tt06"]);
}

#[test]
fn test_results_satisfy_every_constraint() {
    let table = create_test_table();
    let cases = vec![
        CriteriaOptions {
            limit: Some(3),
            min_rating: Some(8.0),
            min_votes: Some(0),
            ..Default::default()
        },
        CriteriaOptions {
            limit: Some(50),
            rating_range: Some((6.0, 8.6)),
            min_votes: Some(100_000),
            ..Default::default()
        },
        CriteriaOptions {
            limit: Some(2),
            genres: Some("drama".to_string()),
            min_votes: Some(1),
            ..Default::default()
        },
    ];

    for options in cases {
        let criteria = criteria(options);
        let result = recommend(&table, &criteria);

        assert!(result.len() <= criteria.limit);
        for movie in &result {
            assert!(criteria.rating.allows(movie.rating.unwrap()));
            assert!(movie.num_votes.unwrap() >= criteria.min_votes);
        }
    }
}

#[test]
fn test_rating_range_is_inclusive_and_ordered() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            limit: Some(50),
            rating_range: Some((7.8, 8.5)),
            min_votes: Some(0),
            ..Default::default()
        }),
    );

    assert_eq!(ids(&result), vec!["tt08", "tt09", "tt10", "tt11", "tt12"]);
    assert_eq!(
        criteria(CriteriaOptions {
            rating_range: Some((7.8, 8.5)),
            ..Default::default()
        })
        .rating,
        RatingConstraint::Within { low: 7.8, high: 8.5 }
    );
}

#[test]
fn test_include_genres_substring_any() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            limit: Some(50),
            genres: Some("sci, Musical".to_string()),
            min_votes: Some(0),
            ..Default::default()
        }),
    );

    assert_eq!(ids(&result), vec!["tt06", "tt09", "tt13"]);
}

#[test]
fn test_exclusion_wins_over_inclusion() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            limit: Some(50),
            genres: Some("Horror,Comedy".to_string()),
            exclude: Some("horror".to_string()),
            min_votes: Some(0),
            ..Default::default()
        }),
    );

    assert_eq!(ids(&result), vec!["tt12", "tt13"]);
}

#[test]
fn test_exclude_keeps_movies_without_genres() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            limit: Some(50),
            exclude: Some("Drama,Action,Adventure,Comedy,Horror".to_string()),
            min_votes: Some(0),
            ..Default::default()
        }),
    );

    assert_eq!(ids(&result), vec!["tt08"]);
}

#[test]
fn test_no_matches_is_empty_not_error() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            genres: Some("Western".to_string()),
            ..Default::default()
        }),
    );

    assert!(result.is_empty());
}

#[test]
fn test_limit_applies_after_filters() {
    let table = create_test_table();
    let result = recommend(
        &table,
        &criteria(CriteriaOptions {
            limit: Some(2),
            genres: Some("Comedy".to_string()),
            min_votes: Some(0),
            ..Default::default()
        }),
    );

    assert_eq!(ids(&result), vec!["tt11", "tt12"]);
}

#[test]
fn test_round_trip_from_raw_dumps() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("title.basics.tsv"),
        "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres\n\
         tt1\tmovie\tLow\tLow\t0\t2001\t\\N\t90\tDrama\n\
         tt2\tmovie\tHigh\tHigh\t0\t2002\t\\N\t\\N\tAction,Comedy\n\
         tt3\tmovie\tMiddle\tMiddle\t0\t2003\t\\N\t110\tHorror\n\
         tt4\tmovie\tFew Votes\tFew Votes\t0\t2004\t\\N\t95\tDrama\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("title.ratings.tsv"),
        "tconst\taverageRating\tnumVotes\n\
         tt1\t5.5\t1200\n\
         tt2\t8.7\t45000\n\
         tt3\t7.1\t3000\n\
         tt4\t9.9\t12\n",
    )
    .unwrap();
    let output = dir.path().join("movies.csv");

    DatasetBuilder::new(
        dir.path().join("title.basics.tsv"),
        dir.path().join("title.ratings.tsv"),
    )
    .build_to(&output)
    .unwrap();

    let table = MovieTable::load_from_csv(&output).unwrap();
    let everything = criteria(CriteriaOptions {
        limit: Some(table.len()),
        min_votes: Some(0),
        ..Default::default()
    });
    let result = recommend(&table, &everything);

    assert_eq!(result.len(), table.len());
    assert!(result.iter().zip(table.movies()).all(|(a, b)| *a == b));
    assert_eq!(ids(&result), vec!["tt2", "tt3", "tt1"]);
}
