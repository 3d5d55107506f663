//! Draft entity.
//!
//! Drafts hold editable content before it is scheduled or published. The
//! quality score always reflects the current content.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::content::{scorer, Platform};
use crate::domain::foundation::{DraftId, QualityScore, Timestamp, ValidationError};

/// Lifecycle status of a draft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DraftStatus {
    #[default]
    Draft,
    Approved,
    Rejected,
    Scheduled,
    Published,
}

impl DraftStatus {
    pub const ALL: [DraftStatus; 5] = [
        DraftStatus::Draft,
        DraftStatus::Approved,
        DraftStatus::Rejected,
        DraftStatus::Scheduled,
        DraftStatus::Published,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftStatus::Draft => "draft",
            DraftStatus::Approved => "approved",
            DraftStatus::Rejected => "rejected",
            DraftStatus::Scheduled => "scheduled",
            DraftStatus::Published => "published",
        }
    }
}

impl fmt::Display for DraftStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DraftStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DraftStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                ValidationError::invalid_format("status", format!("unknown draft status '{}'", s))
            })
    }
}

/// Input for creating a draft.
#[derive(Debug, Clone, Default)]
pub struct NewDraft {
    pub title: Option<String>,
    pub content: String,
    pub platform: Option<Platform>,
    pub status: Option<DraftStatus>,
    pub hashtags: Option<String>,
    pub tone: Option<String>,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct DraftUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<Platform>,
    pub status: Option<DraftStatus>,
    pub hashtags: Option<String>,
    pub tone: Option<String>,
}

/// A piece of content being worked on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub id: DraftId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(default)]
    pub status: DraftStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    pub quality_score: QualityScore,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Draft {
    /// Creates a draft. `existing` is the number of drafts already stored and
    /// only feeds the default title.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if content is blank
    pub fn create(new: NewDraft, existing: usize) -> Result<Self, ValidationError> {
        Self::validate_content(&new.content)?;

        let title = match new.title {
            Some(title) if !title.trim().is_empty() => title,
            _ => format!("Draft {}", existing + 1),
        };
        let now = Timestamp::now();

        Ok(Self {
            id: DraftId::new(),
            title,
            quality_score: scorer::score(&new.content),
            content: new.content,
            platform: new.platform,
            status: new.status.unwrap_or_default(),
            hashtags: new.hashtags,
            tone: new.tone,
            created_at: now,
            updated_at: now,
        })
    }

    /// Merges an update. The score is recomputed only when content is supplied.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if the new content is blank
    pub fn apply(&mut self, update: DraftUpdate) -> Result<(), ValidationError> {
        if let Some(content) = update.content {
            Self::validate_content(&content)?;
            self.quality_score = scorer::score(&content);
            self.content = content;
        }
        if let Some(title) = update.title {
            self.title = title;
        }
        if update.platform.is_some() {
            self.platform = update.platform;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        if update.hashtags.is_some() {
            self.hashtags = update.hashtags;
        }
        if update.tone.is_some() {
            self.tone = update.tone;
        }
        self.updated_at = Timestamp::now();
        Ok(())
    }

    /// Sets the status and refreshes `updated_at`.
    pub fn set_status(&mut self, status: DraftStatus) {
        self.status = status;
        self.updated_at = Timestamp::now();
    }

    fn validate_content(content: &str) -> Result<(), ValidationError> {
        if content.trim().is_empty() {
            return Err(ValidationError::empty_field("content"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_draft(content: &str) -> NewDraft {
        NewDraft {
            content: content.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn create_defaults_title_status_and_score() {
        let draft = Draft::create(new_draft("Follow us for weekly tips!"), 2).unwrap();
        assert_eq!(draft.title, "Draft 3");
        assert_eq!(draft.status, DraftStatus::Draft);
        assert_eq!(draft.quality_score, scorer::score("Follow us for weekly tips!"));
        assert_eq!(draft.created_at, draft.updated_at);
    }

    #[test]
    fn create_keeps_supplied_title() {
        let draft = Draft::create(
            NewDraft {
                title: Some("Launch teaser".to_string()),
                ..new_draft("Something big is coming")
            },
            0,
        )
        .unwrap();
        assert_eq!(draft.title, "Launch teaser");
    }

    #[test]
    fn create_rejects_blank_content() {
        let err = Draft::create(new_draft("  "), 0).unwrap_err();
        assert_eq!(err.field(), "content");
    }

    #[test]
    fn update_rescores_only_when_content_changes() {
        let mut draft = Draft::create(new_draft("short"), 0).unwrap();
        let before = draft.quality_score;

        draft
            .apply(DraftUpdate {
                title: Some("Renamed".to_string()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(draft.title, "Renamed");
        assert_eq!(draft.quality_score, before);

        let content = "Did you know? Learn more on our blog! #tips".to_string();
        draft
            .apply(DraftUpdate {
                content: Some(content.clone()),
                ..Default::default()
            })
            .unwrap();
        assert_eq!(draft.quality_score, scorer::score(&content));
        assert_eq!(draft.content, content);
    }

    #[test]
    fn update_rejects_blank_content_and_leaves_draft_unchanged() {
        let mut draft = Draft::create(new_draft("keep me"), 0).unwrap();
        let snapshot = draft.clone();
        assert!(draft
            .apply(DraftUpdate {
                content: Some(String::new()),
                ..Default::default()
            })
            .is_err());
        assert_eq!(draft, snapshot);
    }

    #[test]
    fn set_status_refreshes_updated_at() {
        let mut draft = Draft::create(new_draft("content here"), 0).unwrap();
        let created = draft.updated_at;
        draft.set_status(DraftStatus::Approved);
        assert_eq!(draft.status, DraftStatus::Approved);
        assert!(!draft.updated_at.is_before(&created));
    }

    #[test]
    fn status_parses_wire_names() {
        assert_eq!("published".parse::<DraftStatus>().unwrap(), DraftStatus::Published);
        assert!("archived".parse::<DraftStatus>().is_err());
    }

    #[test]
    fn json_uses_camel_case_and_skips_missing_optionals() {
        let draft = Draft::create(new_draft("Hello world, again"), 0).unwrap();
        let json = serde_json::to_value(&draft).unwrap();
        assert!(json.get("qualityScore").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "draft");
        assert!(json.get("tone").is_none());
    }
}
