//! Generation limits

use serde::Deserialize;

use super::error::ValidationError;

const MAX_ITEMS_PER_PAIR_CEILING: usize = 50;
const MAX_BULK_DAYS_CEILING: u32 = 366;

/// Caps applied to generation requests
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationConfig {
    /// Most records generated per content type and platform pair
    #[serde(default = "default_max_items_per_pair")]
    pub max_items_per_pair: usize,

    /// Longest bulk calendar run, in days
    #[serde(default = "default_max_bulk_days")]
    pub max_bulk_days: u32,
}

impl GenerationConfig {
    /// Validate generation limits
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.max_items_per_pair == 0 || self.max_items_per_pair > MAX_ITEMS_PER_PAIR_CEILING {
            return Err(ValidationError::InvalidItemsPerPair);
        }
        if self.max_bulk_days == 0 || self.max_bulk_days > MAX_BULK_DAYS_CEILING {
            return Err(ValidationError::InvalidBulkDays);
        }
        Ok(())
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_items_per_pair: default_max_items_per_pair(),
            max_bulk_days: default_max_bulk_days(),
        }
    }
}

fn default_max_items_per_pair() -> usize {
    5
}

fn default_max_bulk_days() -> u32 {
    31
}
