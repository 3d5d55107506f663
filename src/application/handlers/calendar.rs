//! CalendarHandler - scheduling commands and the calendar query.

use serde::Serialize;
use std::sync::Arc;

use crate::application::Dataset;
use crate::domain::calendar::{BulkSchedule, CalendarEntry, CalendarUpdate, NewCalendarEntry};
use crate::domain::content::ContentError;
use crate::domain::foundation::CalendarEntryId;
use crate::domain::library::ContentLibrary;

/// Result of a bulk scheduling run.
#[derive(Debug, Clone, Serialize)]
pub struct BulkGenerateResult {
    pub message: String,
    pub events: Vec<CalendarEntry>,
}

/// Handler for calendar operations.
pub struct CalendarHandler {
    dataset: Arc<Dataset<ContentLibrary>>,
    max_bulk_days: u32,
}

impl CalendarHandler {
    pub fn new(dataset: Arc<Dataset<ContentLibrary>>, max_bulk_days: u32) -> Self {
        Self {
            dataset,
            max_bulk_days,
        }
    }

    pub async fn list(&self) -> Vec<CalendarEntry> {
        self.dataset.read(|library| library.calendar.clone()).await
    }

    pub async fn create(&self, new: NewCalendarEntry) -> Result<CalendarEntry, ContentError> {
        let entry = CalendarEntry::create(new)?;
        let saved = entry.clone();

        self.dataset
            .update(move |library| {
                library.calendar.push(saved);
                Ok::<_, ContentError>(())
            })
            .await?;

        tracing::info!(entry_id = %entry.id, date = %entry.scheduled_date, "Calendar entry scheduled");
        Ok(entry)
    }

    pub async fn update(
        &self,
        id: CalendarEntryId,
        update: CalendarUpdate,
    ) -> Result<CalendarEntry, ContentError> {
        self.dataset
            .update(|library| {
                let entry = library
                    .calendar_entry_mut(id)
                    .ok_or(ContentError::CalendarEntryNotFound(id))?;
                entry.apply(update)?;
                Ok::<_, ContentError>(entry.clone())
            })
            .await
    }

    pub async fn delete(&self, id: CalendarEntryId) -> Result<(), ContentError> {
        self.dataset
            .update(|library| {
                library
                    .remove_calendar_entry(id)
                    .map(|_| ())
                    .ok_or(ContentError::CalendarEntryNotFound(id))
            })
            .await
    }

    pub async fn bulk_generate(
        &self,
        schedule: BulkSchedule,
    ) -> Result<BulkGenerateResult, ContentError> {
        schedule.validate(self.max_bulk_days)?;
        let events = schedule.generate();
        let saved = events.clone();

        self.dataset
            .update(move |library| {
                library.calendar.extend(saved);
                Ok::<_, ContentError>(())
            })
            .await?;

        tracing::info!(
            count = events.len(),
            start = %schedule.start_date,
            days = schedule.days,
            "Bulk generated calendar entries"
        );
        Ok(BulkGenerateResult {
            message: format!("Generated {} calendar events", events.len()),
            events,
        })
    }
}
