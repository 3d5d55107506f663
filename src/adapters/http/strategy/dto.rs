//! HTTP DTOs for strategy endpoints.

use serde::{Deserialize, Serialize};

use crate::adapters::http::extract::parse_id;
use crate::adapters::http::error::ApiError;
use crate::application::GenerateContentCommand;
use crate::domain::content::{ContentType, Platform};
use crate::domain::foundation::StrategyId;
use crate::domain::strategy::{NewStrategy, Strategy, StrategyAnalysis, StrategyError};

/// Content types generated when a request names none.
pub const DEFAULT_CONTENT_TYPES: [ContentType; 1] = [ContentType::Post];

/// Platforms targeted when a request names none.
pub const DEFAULT_PLATFORMS: [Platform; 1] = [Platform::Instagram];

/// Records per type and platform when a request names no quantity.
pub const DEFAULT_QUANTITY: usize = 1;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Metadata for a strategy document stored elsewhere.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterStrategyRequest {
    #[serde(default)]
    pub original_name: String,
    #[serde(default)]
    pub file_size: u64,
    pub mime_type: Option<String>,
    pub file_path: Option<String>,
}

impl From<RegisterStrategyRequest> for NewStrategy {
    fn from(req: RegisterStrategyRequest) -> Self {
        NewStrategy {
            original_name: req.original_name,
            file_size: req.file_size,
            mime_type: req.mime_type,
            file_path: req.file_path.filter(|p| !p.trim().is_empty()),
        }
    }
}

/// Generation options. Every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateOptions {
    pub content_types: Option<Vec<String>>,
    pub platforms: Option<Vec<String>>,
    pub quantity: Option<usize>,
    pub timeframe: Option<String>,
}

/// Request to generate content from an analysis.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub strategy_id: Option<String>,
    pub analysis: Option<StrategyAnalysis>,
    #[serde(default)]
    pub options: GenerateOptions,
}

impl TryFrom<GenerateContentRequest> for GenerateContentCommand {
    type Error = ApiError;

    fn try_from(req: GenerateContentRequest) -> Result<Self, Self::Error> {
        let (raw_id, analysis) = match (req.strategy_id, req.analysis) {
            (Some(id), Some(analysis)) if !id.trim().is_empty() => (id, analysis),
            _ => {
                return Err(StrategyError::validation(
                    "strategyId",
                    "Strategy ID and analysis are required",
                )
                .into())
            }
        };
        let strategy_id: StrategyId = parse_id("strategy", raw_id.trim())?;
        let options = req.options;

        Ok(GenerateContentCommand {
            strategy_id,
            analysis,
            content_types: parse_list(options.content_types, &DEFAULT_CONTENT_TYPES)?,
            platforms: parse_list(options.platforms, &DEFAULT_PLATFORMS)?,
            quantity: options.quantity.unwrap_or(DEFAULT_QUANTITY),
            timeframe: options.timeframe,
        })
    }
}

/// Parses a list of names, falling back to `defaults` when absent or empty.
fn parse_list<T>(names: Option<Vec<String>>, defaults: &[T]) -> Result<Vec<T>, StrategyError>
where
    T: std::str::FromStr + Copy,
    T::Err: Into<StrategyError>,
{
    match names {
        Some(names) if !names.is_empty() => names
            .iter()
            .map(|name| name.trim().parse::<T>().map_err(Into::into))
            .collect(),
        _ => Ok(defaults.to_vec()),
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Response for a registered strategy.
#[derive(Debug, Clone, Serialize)]
pub struct RegisterStrategyResponse {
    pub message: String,
    pub strategy: Strategy,
}
