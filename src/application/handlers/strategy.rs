//! StrategyHandler - registry, analysis and deletion of strategies.

use std::sync::Arc;

use crate::application::Dataset;
use crate::domain::foundation::StrategyId;
use crate::domain::strategy::{NewStrategy, Strategy, StrategyAnalysis, StrategyData, StrategyError};
use crate::ports::StrategyAnalyzer;

/// Handler for the strategy registry.
pub struct StrategyHandler {
    dataset: Arc<Dataset<StrategyData>>,
    analyzer: Arc<dyn StrategyAnalyzer>,
}

impl StrategyHandler {
    pub fn new(dataset: Arc<Dataset<StrategyData>>, analyzer: Arc<dyn StrategyAnalyzer>) -> Self {
        Self { dataset, analyzer }
    }

    pub async fn list(&self) -> Vec<Strategy> {
        self.dataset.read(|data| data.strategies.clone()).await
    }

    pub async fn register(&self, new: NewStrategy) -> Result<Strategy, StrategyError> {
        let strategy = Strategy::register(new)?;
        let saved = strategy.clone();

        self.dataset
            .update(move |data| {
                data.strategies.push(saved);
                Ok::<_, StrategyError>(())
            })
            .await?;

        tracing::info!(
            strategy_id = %strategy.id,
            name = %strategy.name,
            size = strategy.file_size,
            "Strategy registered"
        );
        Ok(strategy)
    }

    /// Runs the analyzer, stores the analysis and marks the strategy analyzed.
    pub async fn analyze(&self, id: StrategyId) -> Result<StrategyAnalysis, StrategyError> {
        let strategy = self
            .dataset
            .read(|data| data.find_strategy(id).cloned())
            .await
            .ok_or(StrategyError::NotFound(id))?;

        let analysis = self.analyzer.analyze(&strategy).await.map_err(|e| {
            tracing::error!(strategy_id = %id, error = %e, "Strategy analysis failed");
            StrategyError::Analyzer(e.to_string())
        })?;
        let stored = analysis.clone();

        self.dataset
            .update(move |data| {
                let strategy = data
                    .find_strategy_mut(id)
                    .ok_or(StrategyError::NotFound(id))?;
                strategy.mark_analyzed();
                data.analyses.insert(id, stored);
                Ok::<_, StrategyError>(())
            })
            .await?;

        tracing::info!(strategy_id = %id, "Strategy analyzed");
        Ok(analysis)
    }

    pub async fn analysis(&self, id: StrategyId) -> Result<StrategyAnalysis, StrategyError> {
        self.dataset
            .read(|data| data.analyses.get(&id).cloned())
            .await
            .ok_or(StrategyError::AnalysisNotFound(id))
    }

    /// Removes the strategy with its analysis and generated content. The
    /// registered file is removed on a best-effort basis.
    pub async fn delete(&self, id: StrategyId) -> Result<(), StrategyError> {
        let removed = self
            .dataset
            .update(|data| {
                data.remove_strategy(id)
                    .ok_or(StrategyError::NotFound(id))
            })
            .await?;

        if let Some(path) = removed.file_path.as_deref() {
            if let Err(e) = tokio::fs::remove_file(path).await {
                tracing::warn!(strategy_id = %id, path, error = %e, "Could not delete strategy file");
            }
        }

        tracing::info!(strategy_id = %id, "Strategy deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::analysis::SampleStrategyAnalyzer;
    use crate::adapters::storage::InMemoryStore;
    use crate::domain::foundation::ErrorCode;
    use crate::domain::strategy::StrategyStatus;
    use crate::ports::{AnalyzerError, RecordStore};
    use async_trait::async_trait;
    use tempfile::TempDir;

    struct BrokenAnalyzer;

    #[async_trait]
    impl StrategyAnalyzer for BrokenAnalyzer {
        async fn analyze(&self, _strategy: &Strategy) -> Result<StrategyAnalysis, AnalyzerError> {
            Err(AnalyzerError::Failed("model offline".to_string()))
        }
    }

    fn handler_with(
        analyzer: Arc<dyn StrategyAnalyzer>,
    ) -> (StrategyHandler, Arc<InMemoryStore<StrategyData>>) {
        let store: Arc<InMemoryStore<StrategyData>> = Arc::new(InMemoryStore::new());
        let dataset = Dataset::with_records(StrategyData::default(), store.clone());
        (StrategyHandler::new(Arc::new(dataset), analyzer), store)
    }

    fn handler() -> (StrategyHandler, Arc<InMemoryStore<StrategyData>>) {
        handler_with(Arc::new(SampleStrategyAnalyzer::new()))
    }

    fn plan(name: &str) -> NewStrategy {
        NewStrategy {
            original_name: name.to_string(),
            file_size: 4096,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn register_lists_strategy() {
        let (handler, store) = handler();
        let strategy = handler.register(plan("Brand Plan.docx")).await.unwrap();

        assert_eq!(strategy.name, "Brand Plan");
        assert_eq!(handler.list().await, vec![strategy]);
        assert_eq!(store.load().await.unwrap().unwrap().strategies.len(), 1);
    }

    #[tokio::test]
    async fn register_rejects_unsupported_extension() {
        let (handler, _) = handler();
        let err = handler.register(plan("slides.pptx")).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::ValidationFailed);
    }

    #[tokio::test]
    async fn analyze_stores_analysis_and_marks_strategy() {
        let (handler, _) = handler();
        let strategy = handler.register(plan("plan.pdf")).await.unwrap();

        let analysis = handler.analyze(strategy.id).await.unwrap();

        assert_eq!(handler.analysis(strategy.id).await.unwrap(), analysis);
        assert_eq!(handler.list().await[0].status, StrategyStatus::Analyzed);
    }

    #[tokio::test]
    async fn analyze_unknown_strategy_is_not_found() {
        let (handler, _) = handler();
        let err = handler.analyze(StrategyId::new()).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::StrategyNotFound);
    }

    #[tokio::test]
    async fn analyzer_failure_leaves_strategy_uploaded() {
        let (handler, _) = handler_with(Arc::new(BrokenAnalyzer));
        let strategy = handler.register(plan("plan.txt")).await.unwrap();

        let err = handler.analyze(strategy.id).await.unwrap_err();

        assert_eq!(err.code(), ErrorCode::AnalyzerError);
        assert_eq!(handler.list().await[0].status, StrategyStatus::Uploaded);
    }

    #[tokio::test]
    async fn missing_analysis_is_not_found() {
        let (handler, _) = handler();
        let strategy = handler.register(plan("plan.txt")).await.unwrap();
        let err = handler.analysis(strategy.id).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::AnalysisNotFound);
    }

    #[tokio::test]
    async fn delete_removes_strategy_analysis_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("plan.txt");
        std::fs::write(&file, "grow").unwrap();

        let (handler, _) = handler();
        let strategy = handler
            .register(NewStrategy {
                file_path: Some(file.to_string_lossy().into_owned()),
                ..plan("plan.txt")
            })
            .await
            .unwrap();
        handler.analyze(strategy.id).await.unwrap();

        handler.delete(strategy.id).await.unwrap();

        assert!(handler.list().await.is_empty());
        assert!(handler.analysis(strategy.id).await.is_err());
        assert!(!file.exists());
    }

    #[tokio::test]
    async fn delete_tolerates_missing_file() {
        let (handler, _) = handler();
        let strategy = handler
            .register(NewStrategy {
                file_path: Some("/nonexistent/plan.txt".to_string()),
                ..plan("plan.txt")
            })
            .await
            .unwrap();

        assert!(handler.delete(strategy.id).await.is_ok());
        assert_eq!(
            handler.delete(strategy.id).await.unwrap_err().code(),
            ErrorCode::StrategyNotFound
        );
    }
}
