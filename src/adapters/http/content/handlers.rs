//! HTTP handlers for content endpoints.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::adapters::http::error::ApiError;
use crate::adapters::http::extract::{parse_id, ApiJson, ApiQuery};
use crate::adapters::http::MessageResponse;
use crate::application::{CalendarHandler, ComposeHandler, DraftHandler};
use crate::domain::calendar::{BulkSchedule, CalendarUpdate, NewCalendarEntry};
use crate::domain::drafts::{DraftQuery, DraftStatus, DraftUpdate, NewDraft};
use crate::domain::foundation::{CalendarEntryId, DraftId};

use super::dto::{
    BulkGenerateRequest, ContentCheckRequest, CreateCalendarEntryRequest, CreateDraftRequest,
    ListDraftsParams, RegenerateRequest, UpdateCalendarEntryRequest, UpdateDraftRequest,
    UpdateDraftStatusRequest,
};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct ContentHandlers {
    drafts: Arc<DraftHandler>,
    calendar: Arc<CalendarHandler>,
    compose: ComposeHandler,
}

impl ContentHandlers {
    pub fn new(drafts: Arc<DraftHandler>, calendar: Arc<CalendarHandler>) -> Self {
        Self {
            drafts,
            calendar,
            compose: ComposeHandler::new(),
        }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Stats and drafts
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/content/stats - Draft and calendar counters
pub async fn get_stats(State(handlers): State<ContentHandlers>) -> impl IntoResponse {
    Json(handlers.drafts.stats().await)
}

/// GET /api/content/drafts - Filtered, sorted, paginated drafts
pub async fn list_drafts(
    State(handlers): State<ContentHandlers>,
    ApiQuery(params): ApiQuery<ListDraftsParams>,
) -> Result<impl IntoResponse, ApiError> {
    let query = DraftQuery::try_from(params)?;
    let page = handlers.drafts.list(query).await?;
    Ok(Json(page))
}

/// POST /api/content/drafts - Create a draft
pub async fn create_draft(
    State(handlers): State<ContentHandlers>,
    ApiJson(req): ApiJson<CreateDraftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = handlers.drafts.create(NewDraft::try_from(req)?).await?;
    Ok((StatusCode::CREATED, Json(draft)))
}

/// PUT /api/content/drafts/:id - Partially update a draft
pub async fn update_draft(
    State(handlers): State<ContentHandlers>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateDraftRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DraftId = parse_id("draft", &id)?;
    let draft = handlers.drafts.update(id, DraftUpdate::try_from(req)?).await?;
    Ok(Json(draft))
}

/// PATCH /api/content/drafts/:id/status - Change a draft's status
pub async fn update_draft_status(
    State(handlers): State<ContentHandlers>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateDraftStatusRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DraftId = parse_id("draft", &id)?;
    let draft = handlers
        .drafts
        .set_status(id, DraftStatus::try_from(req)?)
        .await?;
    Ok(Json(draft))
}

/// DELETE /api/content/drafts/:id - Delete a draft
pub async fn delete_draft(
    State(handlers): State<ContentHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: DraftId = parse_id("draft", &id)?;
    handlers.drafts.delete(id).await?;
    Ok(Json(MessageResponse::new("Draft deleted successfully")))
}

// ════════════════════════════════════════════════════════════════════════════
// Calendar
// ════════════════════════════════════════════════════════════════════════════

/// GET /api/content/calendar - Every calendar entry
pub async fn list_calendar(State(handlers): State<ContentHandlers>) -> impl IntoResponse {
    Json(handlers.calendar.list().await)
}

/// POST /api/content/calendar - Schedule an entry
pub async fn create_calendar_entry(
    State(handlers): State<ContentHandlers>,
    ApiJson(req): ApiJson<CreateCalendarEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let entry = handlers
        .calendar
        .create(NewCalendarEntry::try_from(req)?)
        .await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// PUT /api/content/calendar/:id - Partially update an entry
pub async fn update_calendar_entry(
    State(handlers): State<ContentHandlers>,
    Path(id): Path<String>,
    ApiJson(req): ApiJson<UpdateCalendarEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CalendarEntryId = parse_id("calendar entry", &id)?;
    let entry = handlers
        .calendar
        .update(id, CalendarUpdate::try_from(req)?)
        .await?;
    Ok(Json(entry))
}

/// DELETE /api/content/calendar/:id - Remove an entry
pub async fn delete_calendar_entry(
    State(handlers): State<ContentHandlers>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let id: CalendarEntryId = parse_id("calendar entry", &id)?;
    handlers.calendar.delete(id).await?;
    Ok(Json(MessageResponse::new("Calendar event deleted successfully")))
}

/// POST /api/content/bulk-generate - Fill the calendar with themed posts
pub async fn bulk_generate(
    State(handlers): State<ContentHandlers>,
    ApiJson(req): ApiJson<BulkGenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let result = handlers
        .calendar
        .bulk_generate(BulkSchedule::try_from(req)?)
        .await?;
    Ok(Json(result))
}

// ════════════════════════════════════════════════════════════════════════════
// Compose
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/content/regenerate - Rewrite content in a random style
pub async fn regenerate(
    State(handlers): State<ContentHandlers>,
    ApiJson(req): ApiJson<RegenerateRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let platform = req.platform()?;
    let regenerated = handlers
        .compose
        .regenerate(&req.original_content, platform)?;
    Ok(Json(regenerated))
}

/// POST /api/content/check - Score and validate content for a platform
pub async fn check_content(
    State(handlers): State<ContentHandlers>,
    ApiJson(req): ApiJson<ContentCheckRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let platform = req.platform()?;
    let check = handlers
        .compose
        .check(&req.content, platform, req.keyword_count());
    Ok(Json(check))
}
