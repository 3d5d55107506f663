//! Star rating value object for editor feedback (0 to 5 stars).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{QualityScore, ValidationError};

/// Coarse 0-5 view of a [`QualityScore`], shown next to drafts while editing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StarRating(u8);

impl StarRating {
    /// Highest rating.
    pub const MAX_STARS: u8 = 5;

    /// `round(score / 20)`, halves rounding up.
    pub fn from_score(score: QualityScore) -> Self {
        Self((score.value() + 10) / 20)
    }

    /// Creates a rating from a star count, returning error if out of range.
    pub fn try_from_stars(stars: u8) -> Result<Self, ValidationError> {
        if stars > Self::MAX_STARS {
            return Err(ValidationError::out_of_range(
                "rating",
                0,
                i32::from(Self::MAX_STARS),
                i32::from(stars),
            ));
        }
        Ok(Self(stars))
    }

    /// Returns the number of stars.
    pub fn stars(&self) -> u8 {
        self.0
    }

    /// Returns the display label.
    pub fn label(&self) -> &'static str {
        match self.0 {
            0 => "Needs work",
            1 => "Weak",
            2 => "Fair",
            3 => "Good",
            4 => "Strong",
            _ => "Excellent",
        }
    }
}

impl TryFrom<u8> for StarRating {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::try_from_stars(value)
    }
}

impl From<StarRating> for u8 {
    fn from(rating: StarRating) -> Self {
        rating.0
    }
}

impl fmt::Display for StarRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX_STARS)
    }
}
