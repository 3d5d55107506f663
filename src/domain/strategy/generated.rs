//! Persisted output of strategy-based content generation.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{Strategy, StrategyAnalysis};
use crate::domain::content::ContentRecord;
use crate::domain::foundation::{GeneratedContentId, StrategyId, Timestamp};

/// A generated [`ContentRecord`] tied to the strategy it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub id: GeneratedContentId,
    pub strategy_id: StrategyId,
    pub title: String,
    #[serde(flatten)]
    pub record: ContentRecord,
    pub generated_at: Timestamp,
}

impl GeneratedContent {
    pub fn new(strategy_id: StrategyId, record: ContentRecord) -> Self {
        Self {
            id: GeneratedContentId::new(),
            strategy_id,
            title: format!("{} for {}", record.content_type, record.platform),
            record,
            generated_at: Timestamp::now(),
        }
    }
}

/// Everything the strategy area persists, stored as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyData {
    #[serde(default)]
    pub strategies: Vec<Strategy>,
    #[serde(default)]
    pub analyses: BTreeMap<StrategyId, StrategyAnalysis>,
    #[serde(default)]
    pub generated_content: BTreeMap<StrategyId, Vec<GeneratedContent>>,
}

impl StrategyData {
    pub fn find_strategy(&self, id: StrategyId) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.id == id)
    }

    pub fn find_strategy_mut(&mut self, id: StrategyId) -> Option<&mut Strategy> {
        self.strategies.iter_mut().find(|s| s.id == id)
    }

    /// Removes a strategy with its analysis and generated content.
    pub fn remove_strategy(&mut self, id: StrategyId) -> Option<Strategy> {
        let index = self.strategies.iter().position(|s| s.id == id)?;
        self.analyses.remove(&id);
        self.generated_content.remove(&id);
        Some(self.strategies.remove(index))
    }
}
