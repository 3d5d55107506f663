//! StrategyAnalyzer port for turning a registered strategy into an analysis

use async_trait::async_trait;

use crate::domain::strategy::{Strategy, StrategyAnalysis};

/// Errors raised while analyzing a strategy
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    #[error("Strategy document unavailable: {0}")]
    DocumentUnavailable(String),

    #[error("Analysis failed: {0}")]
    Failed(String),
}

/// Produces a structured analysis for a strategy document
#[async_trait]
pub trait StrategyAnalyzer: Send + Sync {
    /// Analyze a registered strategy.
    ///
    /// The returned analysis carries the strategy id and analysis time.
    async fn analyze(&self, strategy: &Strategy) -> Result<StrategyAnalysis, AnalyzerError>;
}
