//! Strategy analysis - the structured summary content generation reads from.
//!
//! Every field is optional. Payloads may use camelCase or snake_case keys. A
//! field of the wrong shape (`null`, a string where a list belongs, a score
//! outside 0..=100) reads as absent instead of rejecting the analysis.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::domain::foundation::Timestamp;

/// A named theme the strategy wants content organised around.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentPillar {
    #[serde(default, deserialize_with = "lenient")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
}

impl ContentPillar {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }

    /// Pillar with a name only.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, "")
    }

    /// `#` + lower-cased name with all whitespace removed, or `None` for a blank name.
    pub fn hashtag(&self) -> Option<String> {
        let compact: String = self
            .name
            .to_lowercase()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        if compact.is_empty() {
            None
        } else {
            Some(format!("#{}", compact))
        }
    }
}

/// Suggested improvement to the strategy itself.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    #[serde(default, deserialize_with = "lenient")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient")]
    pub priority: String,
}

/// Structured extraction of goals, messages and pillars from a strategy document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyAnalysis {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    #[serde(
        default,
        alias = "strategy_id",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub strategy_id: Option<String>,

    #[serde(
        default,
        alias = "clarity_score",
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub clarity_score: Option<u8>,

    #[serde(
        default,
        alias = "completeness_score",
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub completeness_score: Option<u8>,

    #[serde(
        default,
        alias = "actionability_score",
        deserialize_with = "lenient_score",
        skip_serializing_if = "Option::is_none"
    )]
    pub actionability_score: Option<u8>,

    #[serde(default, alias = "target_audience", deserialize_with = "lenient_list")]
    pub target_audience: Vec<String>,

    #[serde(default, alias = "content_pillars", deserialize_with = "lenient_list")]
    pub content_pillars: Vec<ContentPillar>,

    #[serde(default, alias = "key_messages", deserialize_with = "lenient_list")]
    pub key_messages: Vec<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub goals: Vec<String>,

    #[serde(
        default,
        alias = "brand_voice",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub brand_voice: Option<String>,

    #[serde(default, deserialize_with = "lenient_list")]
    pub recommendations: Vec<Recommendation>,

    #[serde(
        default,
        alias = "analyzed_at",
        deserialize_with = "lenient",
        skip_serializing_if = "Option::is_none"
    )]
    pub analyzed_at: Option<Timestamp>,
}

/// Any value that does not fit `T` becomes `T::default()`.
fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).unwrap_or_default())
}

/// Numeric scores in 0..=100, rounded. Anything else is absent.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: Deserializer<'de>,
{
    let score = Value::deserialize(deserializer)?
        .as_f64()
        .filter(|n| (0.0..=100.0).contains(n))
        .map(|n| n.round() as u8);
    Ok(score)
}

/// Arrays keep the items that fit `T`. Any other value is an empty list.
fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    };
    Ok(items)
}

fn non_blank(value: &str) -> Option<&str> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

impl StrategyAnalysis {
    /// Name of the first content pillar, if non-blank.
    pub fn first_pillar_name(&self) -> Option<&str> {
        self.content_pillars
            .first()
            .and_then(|p| non_blank(&p.name))
    }

    /// First key message, if non-blank.
    pub fn first_key_message(&self) -> Option<&str> {
        self.key_messages.first().and_then(|m| non_blank(m))
    }

    /// First goal, if non-blank.
    pub fn first_goal(&self) -> Option<&str> {
        self.goals.first().and_then(|g| non_blank(g))
    }

    /// Description of the first recommendation, if non-blank.
    pub fn first_recommendation_description(&self) -> Option<&str> {
        self.recommendations
            .first()
            .and_then(|r| non_blank(&r.description))
    }

    /// Hashtags derived from pillar names, in pillar order, at most `limit`.
    pub fn pillar_hashtags(&self, limit: usize) -> Vec<String> {
        self.content_pillars
            .iter()
            .filter_map(ContentPillar::hashtag)
            .take(limit)
            .collect()
    }
}
