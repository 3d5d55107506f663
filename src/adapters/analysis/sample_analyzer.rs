//! Sample Strategy Analyzer
//!
//! Returns a fixed sample analysis with randomised quality scores. Stands in
//! for a real document analyzer during development and demos.

use async_trait::async_trait;
use rand::Rng;
use std::ops::RangeInclusive;

use crate::domain::foundation::Timestamp;
use crate::domain::strategy::{ContentPillar, Recommendation, Strategy, StrategyAnalysis};
use crate::ports::{AnalyzerError, StrategyAnalyzer};

pub const CLARITY_RANGE: RangeInclusive<u8> = 70..=99;
pub const COMPLETENESS_RANGE: RangeInclusive<u8> = 75..=99;
pub const ACTIONABILITY_RANGE: RangeInclusive<u8> = 80..=99;

/// Analyzer that fabricates a plausible analysis without reading the document.
#[derive(Debug, Clone, Default)]
pub struct SampleStrategyAnalyzer;

impl SampleStrategyAnalyzer {
    pub fn new() -> Self {
        Self
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn recommendation(title: &str, description: &str, priority: &str) -> Recommendation {
    Recommendation {
        title: title.to_string(),
        description: description.to_string(),
        priority: priority.to_string(),
    }
}

/// The fixed part of every sample analysis.
pub fn sample_analysis() -> StrategyAnalysis {
    StrategyAnalysis {
        target_audience: strings(&[
            "Young professionals (25-35)",
            "Digital natives",
            "Health-conscious consumers",
            "Small business owners",
        ]),
        content_pillars: vec![
            ContentPillar::new("Educational", "Share knowledge and insights about your industry"),
            ContentPillar::new("Behind the Scenes", "Show the human side of your brand"),
            ContentPillar::new("User Generated Content", "Showcase customer success stories"),
            ContentPillar::new("Product Features", "Highlight key product benefits"),
        ],
        key_messages: strings(&[
            "Quality and reliability are our core values",
            "Innovation drives everything we do",
            "Customer success is our success",
            "Sustainability matters for the future",
        ]),
        goals: strings(&[
            "Increase brand awareness by 40%",
            "Generate 25% more qualified leads",
            "Improve customer engagement rates",
            "Build thought leadership in the industry",
        ]),
        brand_voice: Some(
            "Professional yet approachable, knowledgeable but not overwhelming".to_string(),
        ),
        recommendations: vec![
            recommendation(
                "Strengthen Call-to-Actions",
                "Include more specific CTAs to drive conversions",
                "high",
            ),
            recommendation(
                "Expand Content Variety",
                "Consider adding video content and interactive posts",
                "medium",
            ),
            recommendation(
                "Define Success Metrics",
                "Establish clear KPIs for measuring campaign success",
                "high",
            ),
        ],
        ..Default::default()
    }
}

#[async_trait]
impl StrategyAnalyzer for SampleStrategyAnalyzer {
    async fn analyze(&self, strategy: &Strategy) -> Result<StrategyAnalysis, AnalyzerError> {
        let mut rng = rand::thread_rng();

        let analysis = StrategyAnalysis {
            id: Some(format!("analysis_{}", strategy.id)),
            strategy_id: Some(strategy.id.to_string()),
            clarity_score: Some(rng.gen_range(CLARITY_RANGE)),
            completeness_score: Some(rng.gen_range(COMPLETENESS_RANGE)),
            actionability_score: Some(rng.gen_range(ACTIONABILITY_RANGE)),
            analyzed_at: Some(Timestamp::now()),
            ..sample_analysis()
        };

        tracing::debug!(strategy_id = %strategy.id, "Produced sample strategy analysis");
        Ok(analysis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::strategy::NewStrategy;

    fn strategy() -> Strategy {
        Strategy::register(NewStrategy {
            original_name: "q3-plan.pdf".to_string(),
            file_size: 2048,
            ..Default::default()
        })
        .unwrap()
    }

    #[test]
    fn sample_has_expected_shape() {
        let sample = sample_analysis();
        assert_eq!(sample.target_audience.len(), 4);
        assert_eq!(sample.content_pillars.len(), 4);
        assert_eq!(sample.key_messages.len(), 4);
        assert_eq!(sample.goals.len(), 4);
        assert_eq!(sample.recommendations.len(), 3);
        assert!(sample.brand_voice.is_some());
    }

    #[tokio::test]
    async fn analysis_is_tagged_with_strategy() {
        let strategy = strategy();
        let analysis = SampleStrategyAnalyzer::new().analyze(&strategy).await.unwrap();

        assert_eq!(analysis.strategy_id, Some(strategy.id.to_string()));
        assert!(analysis.analyzed_at.is_some());
        assert_eq!(analysis.first_pillar_name(), Some("Educational"));
    }

    #[tokio::test]
    async fn scores_stay_in_range() {
        let strategy = strategy();
        let analyzer = SampleStrategyAnalyzer::new();
        for _ in 0..50 {
            let analysis = analyzer.analyze(&strategy).await.unwrap();
            assert!(CLARITY_RANGE.contains(&analysis.clarity_score.unwrap()));
            assert!(COMPLETENESS_RANGE.contains(&analysis.completeness_score.unwrap()));
            assert!(ACTIONABILITY_RANGE.contains(&analysis.actionability_score.unwrap()));
        }
    }
}
