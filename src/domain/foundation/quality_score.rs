//! Quality score value object (0-100 scale).

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{StarRating, ValidationError};

/// Engagement-quality estimate between 0 and 100 inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct QualityScore(u8);

impl QualityScore {
    /// Lowest possible score.
    pub const ZERO: Self = Self(0);

    /// Highest possible score.
    pub const MAX: Self = Self(100);

    /// Creates a score from a raw point total, clamping to 100.
    pub fn from_points(points: u32) -> Self {
        Self(points.min(100) as u8)
    }

    /// Creates a score, returning error if out of range.
    pub fn try_new(value: u32) -> Result<Self, ValidationError> {
        if value > 100 {
            return Err(ValidationError::out_of_range(
                "qualityScore",
                0,
                100,
                value as i32,
            ));
        }
        Ok(Self(value as u8))
    }

    /// Returns the value as u8.
    pub fn value(&self) -> u8 {
        self.0
    }

    /// Collapses the score onto the 0-5 editor scale.
    pub fn star_rating(&self) -> StarRating {
        StarRating::from_score(*self)
    }
}

impl Default for QualityScore {
    fn default() -> Self {
        Self::ZERO
    }
}

impl TryFrom<u32> for QualityScore {
    type Error = ValidationError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::try_new(value)
    }
}

impl From<QualityScore> for u32 {
    fn from(score: QualityScore) -> Self {
        u32::from(score.0)
    }
}

impl fmt::Display for QualityScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/100", self.0)
    }
}
