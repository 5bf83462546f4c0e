//! Filter on the stored average rating.
//!
//! A rating constraint is either a lower bound or an inclusive range,
//! never both.

use crate::traits::Filter;
use data_loader::Movie;

/// Lowest possible IMDb rating
pub const RATING_MIN: f32 = 0.0;
/// Highest possible IMDb rating
pub const RATING_MAX: f32 = 10.0;

/// The active rating constraint for one query
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RatingConstraint {
    /// Keep `rating >= min`
    AtLeast(f32),
    /// Keep `low <= rating <= high`
    Within { low: f32, high: f32 },
}

impl RatingConstraint {
    pub fn allows(&self, rating: f32) -> bool {
        match *self {
            RatingConstraint::AtLeast(min) => rating >= min,
            RatingConstraint::Within { low, high } => rating >= low && rating <= high,
        }
    }
}

impl Default for RatingConstraint {
    /// The full scale, which lets every rated movie through
    fn default() -> Self {
        RatingConstraint::Within {
            low: RATING_MIN,
            high: RATING_MAX,
        }
    }
}

/// Removes movies whose rating falls outside the constraint.
///
/// Movies without a rating never match.
pub struct RatingFilter {
    constraint: RatingConstraint,
}

impl RatingFilter {
    pub fn new(constraint: RatingConstraint) -> Self {
        Self { constraint }
    }
}

impl Filter for RatingFilter {
    fn name(&self) -> &str {
        "RatingFilter"
    }

    fn matches(&self, movie: &Movie) -> bool {
        movie
            .rating
            .is_some_and(|rating| self.constraint.allows(rating))
    }
}
