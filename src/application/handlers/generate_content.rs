//! GenerateContentHandler - strategy-based content generation.

use std::sync::Arc;

use crate::application::Dataset;
use crate::domain::content::{generate_batch, ContentType, Platform};
use crate::domain::foundation::StrategyId;
use crate::domain::strategy::{GeneratedContent, StrategyAnalysis, StrategyData, StrategyError};

/// Command to generate content for a strategy.
#[derive(Debug, Clone)]
pub struct GenerateContentCommand {
    pub strategy_id: StrategyId,
    pub analysis: StrategyAnalysis,
    pub content_types: Vec<ContentType>,
    pub platforms: Vec<Platform>,
    pub quantity: usize,
    /// Informational only; generation does not depend on it.
    pub timeframe: Option<String>,
}

/// Handler for generating and retrieving strategy content.
pub struct GenerateContentHandler {
    dataset: Arc<Dataset<StrategyData>>,
    max_items_per_pair: usize,
}

impl GenerateContentHandler {
    pub fn new(dataset: Arc<Dataset<StrategyData>>, max_items_per_pair: usize) -> Self {
        Self {
            dataset,
            max_items_per_pair,
        }
    }

    /// Generates `min(quantity, max)` records per type and platform and
    /// appends them to the strategy's generated collection.
    pub async fn handle(
        &self,
        cmd: GenerateContentCommand,
    ) -> Result<Vec<GeneratedContent>, StrategyError> {
        let generated: Vec<GeneratedContent> = generate_batch(
            &cmd.content_types,
            &cmd.platforms,
            cmd.quantity,
            self.max_items_per_pair,
            &cmd.analysis,
        )
        .into_iter()
        .map(|record| GeneratedContent::new(cmd.strategy_id, record))
        .collect();

        let stored = generated.clone();
        let strategy_id = cmd.strategy_id;
        self.dataset
            .update(move |data| {
                data.generated_content
                    .entry(strategy_id)
                    .or_default()
                    .extend(stored);
                Ok::<_, StrategyError>(())
            })
            .await?;

        tracing::info!(
            strategy_id = %strategy_id,
            count = generated.len(),
            timeframe = cmd.timeframe.as_deref().unwrap_or("unspecified"),
            "Generated strategy content"
        );
        Ok(generated)
    }

    /// Everything generated for a strategy so far, oldest first.
    pub async fn generated(&self, strategy_id: StrategyId) -> Vec<GeneratedContent> {
        self.dataset
            .read(|data| {
                data.generated_content
                    .get(&strategy_id)
                    .cloned()
                    .unwrap_or_default()
            })
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::content::scorer;
    use crate::domain::strategy::ContentPillar;

    fn handler(max: usize) -> GenerateContentHandler {
        let store: Arc<InMemoryStore<StrategyData>> = Arc::new(InMemoryStore::new());
        let dataset = Dataset::with_records(StrategyData::default(), store);
        GenerateContentHandler::new(Arc::new(dataset), max)
    }

    fn command(strategy_id: StrategyId, quantity: usize) -> GenerateContentCommand {
        GenerateContentCommand {
            strategy_id,
            analysis: StrategyAnalysis {
                content_pillars: vec![ContentPillar::named("Craft")],
                ..Default::default()
            },
            content_types: vec![ContentType::Post, ContentType::Email],
            platforms: vec![Platform::Facebook, Platform::Linkedin],
            quantity,
            timeframe: Some("month".to_string()),
        }
    }

    #[tokio::test]
    async fn generates_one_record_per_type_platform_and_index() {
        let handler = handler(5);
        let id = StrategyId::new();

        let generated = handler.handle(command(id, 2)).await.unwrap();

        assert_eq!(generated.len(), 8);
        assert!(generated.iter().all(|g| g.strategy_id == id));
        assert_eq!(generated[0].title, "post for facebook");
        assert_eq!(generated[7].title, "email for linkedin");
        for g in &generated {
            assert_eq!(g.record.quality_score, scorer::score(&g.record.content));
        }
    }

    #[tokio::test]
    async fn quantity_is_capped_by_configuration() {
        let handler = handler(3);
        let generated = handler.handle(command(StrategyId::new(), 10)).await.unwrap();
        assert_eq!(generated.len(), 2 * 2 * 3);
    }

    #[tokio::test]
    async fn generated_content_accumulates_per_strategy() {
        let handler = handler(5);
        let id = StrategyId::new();

        handler.handle(command(id, 1)).await.unwrap();
        handler.handle(command(id, 1)).await.unwrap();

        assert_eq!(handler.generated(id).await.len(), 8);
        assert!(handler.generated(StrategyId::new()).await.is_empty());
    }
}
