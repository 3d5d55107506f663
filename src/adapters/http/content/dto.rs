//! HTTP DTOs for content endpoints.
//!
//! Requests arrive as loosely-typed JSON and are parsed into domain inputs
//! here, so unknown platforms and statuses are rejected at the boundary.

use serde::Deserialize;

use crate::adapters::http::extract::parse_optional;
use crate::domain::calendar::{
    parse_date, BulkSchedule, CalendarStatus, CalendarUpdate, NewCalendarEntry, DEFAULT_BULK_DAYS,
    DEFAULT_BULK_PLATFORMS,
};
use crate::domain::content::{ContentError, Platform, DEFAULT_KEYWORD_COUNT};
use crate::domain::drafts::{
    DraftQuery, DraftSort, DraftStatus, DraftUpdate, NewDraft, DEFAULT_LIMIT, DEFAULT_PAGE,
};
use crate::domain::foundation::ValidationError;

/// Platform used when a compose request names none.
pub const DEFAULT_COMPOSE_PLATFORM: Platform = Platform::Instagram;

// ════════════════════════════════════════════════════════════════════════════
// Draft requests
// ════════════════════════════════════════════════════════════════════════════

/// Query parameters for listing drafts.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListDraftsParams {
    pub status: Option<String>,
    pub search: Option<String>,
    pub sort: Option<String>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl TryFrom<ListDraftsParams> for DraftQuery {
    type Error = ContentError;

    fn try_from(params: ListDraftsParams) -> Result<Self, Self::Error> {
        let status = match params.status.as_deref().map(str::trim) {
            Some("all") => None,
            _ => parse_optional::<DraftStatus, ContentError>(params.status)?,
        };
        let sort = parse_optional::<DraftSort, ContentError>(params.sort)?.unwrap_or_default();

        Ok(DraftQuery {
            status,
            search: params.search.filter(|s| !s.trim().is_empty()),
            sort,
            page: params.page.unwrap_or(DEFAULT_PAGE),
            limit: params.limit.unwrap_or(DEFAULT_LIMIT),
        })
    }
}

/// Request to create a draft.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDraftRequest {
    pub title: Option<String>,
    #[serde(default)]
    pub content: String,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub hashtags: Option<String>,
    pub tone: Option<String>,
}

impl TryFrom<CreateDraftRequest> for NewDraft {
    type Error = ContentError;

    fn try_from(req: CreateDraftRequest) -> Result<Self, Self::Error> {
        Ok(NewDraft {
            title: req.title,
            content: req.content,
            platform: parse_optional::<Platform, ContentError>(req.platform)?,
            status: parse_optional::<DraftStatus, ContentError>(req.status)?,
            hashtags: req.hashtags,
            tone: req.tone,
        })
    }
}

/// Partial draft update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDraftRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    pub status: Option<String>,
    pub hashtags: Option<String>,
    pub tone: Option<String>,
}

impl TryFrom<UpdateDraftRequest> for DraftUpdate {
    type Error = ContentError;

    fn try_from(req: UpdateDraftRequest) -> Result<Self, Self::Error> {
        Ok(DraftUpdate {
            title: req.title,
            content: req.content,
            platform: parse_optional::<Platform, ContentError>(req.platform)?,
            status: parse_optional::<DraftStatus, ContentError>(req.status)?,
            hashtags: req.hashtags,
            tone: req.tone,
        })
    }
}

/// Request to change a draft's status.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateDraftStatusRequest {
    #[serde(default)]
    pub status: String,
}

impl TryFrom<UpdateDraftStatusRequest> for DraftStatus {
    type Error = ContentError;

    fn try_from(req: UpdateDraftStatusRequest) -> Result<Self, Self::Error> {
        parse_optional::<DraftStatus, ContentError>(Some(req.status))?
            .ok_or_else(|| ValidationError::empty_field("status").into())
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Calendar requests
// ════════════════════════════════════════════════════════════════════════════

/// Request to schedule a calendar entry.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCalendarEntryRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub platform: Option<String>,
    #[serde(default)]
    pub scheduled_date: String,
    pub scheduled_time: Option<String>,
    pub hashtags: Option<String>,
}

impl TryFrom<CreateCalendarEntryRequest> for NewCalendarEntry {
    type Error = ContentError;

    fn try_from(req: CreateCalendarEntryRequest) -> Result<Self, Self::Error> {
        Ok(NewCalendarEntry {
            title: req.title,
            content: req.content,
            platform: parse_optional::<Platform, ContentError>(req.platform)?,
            scheduled_date: req.scheduled_date,
            scheduled_time: req.scheduled_time.filter(|t| !t.trim().is_empty()),
            hashtags: req.hashtags,
        })
    }
}

/// Partial calendar entry update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCalendarEntryRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<String>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub hashtags: Option<String>,
    pub status: Option<String>,
}

impl TryFrom<UpdateCalendarEntryRequest> for CalendarUpdate {
    type Error = ContentError;

    fn try_from(req: UpdateCalendarEntryRequest) -> Result<Self, Self::Error> {
        Ok(CalendarUpdate {
            title: req.title,
            content: req.content,
            platform: parse_optional::<Platform, ContentError>(req.platform)?,
            scheduled_date: req.scheduled_date,
            scheduled_time: req.scheduled_time.filter(|t| !t.trim().is_empty()),
            hashtags: req.hashtags,
            status: parse_optional::<CalendarStatus, ContentError>(req.status)?,
        })
    }
}

/// Request to fill the calendar with themed posts.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkGenerateRequest {
    pub start_date: Option<String>,
    pub days: Option<u32>,
    pub platforms: Option<Vec<String>>,
}

impl TryFrom<BulkGenerateRequest> for BulkSchedule {
    type Error = ContentError;

    fn try_from(req: BulkGenerateRequest) -> Result<Self, Self::Error> {
        let raw_date = req
            .start_date
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ValidationError::empty_field("startDate"))?;
        let start_date = parse_date("startDate", &raw_date)?;

        let platforms = match req.platforms {
            Some(names) => names
                .iter()
                .map(|name| name.trim().parse::<Platform>())
                .collect::<Result<Vec<_>, _>>()?,
            None => DEFAULT_BULK_PLATFORMS.to_vec(),
        };

        Ok(BulkSchedule {
            start_date,
            days: req.days.unwrap_or(DEFAULT_BULK_DAYS),
            platforms,
        })
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Compose requests
// ════════════════════════════════════════════════════════════════════════════

/// Request to rewrite content. A `tone` field is accepted and ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegenerateRequest {
    #[serde(default)]
    pub original_content: String,
    pub platform: Option<String>,
}

impl RegenerateRequest {
    pub fn platform(&self) -> Result<Platform, ContentError> {
        Ok(parse_optional::<Platform, ContentError>(self.platform.clone())?
            .unwrap_or(DEFAULT_COMPOSE_PLATFORM))
    }
}

/// Request to score and validate content for a platform.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCheckRequest {
    #[serde(default)]
    pub content: String,
    pub platform: Option<String>,
    pub keyword_count: Option<usize>,
}

impl ContentCheckRequest {
    pub fn platform(&self) -> Result<Platform, ContentError> {
        Ok(parse_optional::<Platform, ContentError>(self.platform.clone())?
            .unwrap_or(DEFAULT_COMPOSE_PLATFORM))
    }

    pub fn keyword_count(&self) -> usize {
        self.keyword_count.unwrap_or(DEFAULT_KEYWORD_COUNT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn list_params_default_to_first_page_newest_first() {
        let query = DraftQuery::try_from(ListDraftsParams::default()).unwrap();
        assert_eq!(query, DraftQuery::default());
    }

    #[test]
    fn list_params_all_status_means_no_filter() {
        let params = ListDraftsParams {
            status: Some("all".to_string()),
            sort: Some("quality_desc".to_string()),
            page: Some(2),
            limit: Some(10),
            ..Default::default()
        };
        let query = DraftQuery::try_from(params).unwrap();
        assert_eq!(query.status, None);
        assert_eq!(query.sort, DraftSort::QualityDesc);
        assert_eq!(query.page, 2);
        assert_eq!(query.limit, 10);
    }

    #[test]
    fn list_params_reject_unknown_sort() {
        let params = ListDraftsParams {
            sort: Some("random".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            DraftQuery::try_from(params),
            Err(ContentError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn create_draft_request_deserializes_camel_case() {
        let json = r#"{"content": "Hello world", "platform": "twitter", "status": "approved"}"#;
        let req: CreateDraftRequest = serde_json::from_str(json).unwrap();
        let new = NewDraft::try_from(req).unwrap();
        assert_eq!(new.content, "Hello world");
        assert_eq!(new.platform, Some(Platform::Twitter));
        assert_eq!(new.status, Some(DraftStatus::Approved));
        assert!(new.title.is_none());
    }

    #[test]
    fn create_draft_request_rejects_unknown_platform() {
        let req = CreateDraftRequest {
            content: "Hello".to_string(),
            platform: Some("myspace".to_string()),
            ..Default::default()
        };
        assert!(matches!(
            NewDraft::try_from(req),
            Err(ContentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn status_request_requires_a_status() {
        let req = UpdateDraftStatusRequest::default();
        assert!(matches!(
            DraftStatus::try_from(req),
            Err(ContentError::ValidationFailed { .. })
        ));

        let req = UpdateDraftStatusRequest {
            status: "published".to_string(),
        };
        assert_eq!(DraftStatus::try_from(req).unwrap(), DraftStatus::Published);
    }

    #[test]
    fn calendar_request_reads_scheduled_fields() {
        let json = r#"{
            "title": "Launch",
            "content": "We launch tomorrow!",
            "platform": "facebook",
            "scheduledDate": "2025-03-10",
            "scheduledTime": "14:00"
        }"#;
        let req: CreateCalendarEntryRequest = serde_json::from_str(json).unwrap();
        let new = NewCalendarEntry::try_from(req).unwrap();
        assert_eq!(new.scheduled_date, "2025-03-10");
        assert_eq!(new.scheduled_time.as_deref(), Some("14:00"));
        assert_eq!(new.platform, Some(Platform::Facebook));
    }

    #[test]
    fn blank_scheduled_time_is_absent_on_update() {
        let req: UpdateCalendarEntryRequest =
            serde_json::from_str(r#"{"title": "Moved", "scheduledTime": "  "}"#).unwrap();
        let update = CalendarUpdate::try_from(req).unwrap();
        assert_eq!(update.title.as_deref(), Some("Moved"));
        assert_eq!(update.scheduled_time, None);
    }

    #[test]
    fn bulk_request_applies_defaults() {
        let req = BulkGenerateRequest {
            start_date: Some("2025-01-06".to_string()),
            ..Default::default()
        };
        let schedule = BulkSchedule::try_from(req).unwrap();
        assert_eq!(schedule.start_date, NaiveDate::from_ymd_opt(2025, 1, 6).unwrap());
        assert_eq!(schedule.days, DEFAULT_BULK_DAYS);
        assert_eq!(schedule.platforms, DEFAULT_BULK_PLATFORMS.to_vec());
    }

    #[test]
    fn bulk_request_requires_start_date() {
        let err = BulkSchedule::try_from(BulkGenerateRequest::default()).unwrap_err();
        assert!(matches!(err, ContentError::ValidationFailed { ref field, .. } if field == "startDate"));
    }

    #[test]
    fn bulk_request_rejects_unknown_platform() {
        let req = BulkGenerateRequest {
            start_date: Some("2025-01-06".to_string()),
            platforms: Some(vec!["facebook".to_string(), "orkut".to_string()]),
            ..Default::default()
        };
        assert!(matches!(
            BulkSchedule::try_from(req),
            Err(ContentError::InvalidArgument(_))
        ));
    }

    #[test]
    fn compose_requests_default_platform_and_keyword_count() {
        let req: ContentCheckRequest = serde_json::from_str(r#"{"content": "Hi"}"#).unwrap();
        assert_eq!(req.platform().unwrap(), DEFAULT_COMPOSE_PLATFORM);
        assert_eq!(req.keyword_count(), DEFAULT_KEYWORD_COUNT);

        let req: RegenerateRequest =
            serde_json::from_str(r#"{"originalContent": "Hi", "tone": "casual"}"#).unwrap();
        assert_eq!(req.original_content, "Hi");
        assert_eq!(req.platform().unwrap(), DEFAULT_COMPOSE_PLATFORM);
    }
}
