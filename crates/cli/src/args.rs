//! Filter options shared by every query subcommand.
//!
//! Each subcommand flattens `FilterArgs` into its own arguments, so the
//! flags, defaults and help text are declared once.

use clap::{ArgAction, Args};
use pipeline::{CriteriaError, CriteriaOptions, FilterCriteria, DEFAULT_LIMIT, DEFAULT_MIN_VOTES};

#[derive(Args, Debug, Clone, PartialEq)]
pub struct FilterArgs {
    /// Limit the number of results
    #[arg(short, long, default_value_t = DEFAULT_LIMIT)]
    pub limit: usize,

    /// Set a minimum acceptable rating
    #[arg(short = 'm', long, conflicts_with = "rating_range")]
    pub min_rating: Option<f32>,

    /// Genres to get recommendations for, as a comma separated list
    #[arg(short, long)]
    pub genres: Option<String>,

    /// Genres you're sick of, as a comma separated list
    #[arg(short, long)]
    pub exclude: Option<String>,

    /// Minimum number of votes. Lower it to get lesser-known movies
    #[arg(short = 'v', long, default_value_t = DEFAULT_MIN_VOTES)]
    pub min_votes: u64,

    /// Only keep movies rated between LOW and HIGH, inclusive [default: 0.0 10.0]
    ///
    /// Given more than once, the last range wins.
    #[arg(
        short,
        long,
        action = ArgAction::Set,
        overrides_with = "rating_range",
        num_args = 2,
        value_names = ["LOW", "HIGH"],
        allow_negative_numbers = true
    )]
    pub rating_range: Option<Vec<f32>>,
}

impl FilterArgs {
    /// Raw options, keeping track of what was actually supplied
    pub fn to_options(&self) -> CriteriaOptions {
        CriteriaOptions {
            limit: Some(self.limit),
            min_rating: self.min_rating,
            rating_range: self.rating_range.as_deref().and_then(|range| match range {
                [low, high] => Some((*low, *high)),
                _ => None,
            }),
            genres: self.genres.clone(),
            exclude: self.exclude.clone(),
            min_votes: Some(self.min_votes),
        }
    }

    pub fn to_criteria(&self) -> Result<FilterCriteria, CriteriaError> {
        FilterCriteria::try_from(self.to_options())
    }
}
