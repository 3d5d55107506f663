//! Content library - drafts and calendar entries persisted together.

use serde::{Deserialize, Serialize};

use super::calendar::CalendarEntry;
use super::drafts::{Draft, DraftStatus};
use super::foundation::{CalendarEntryId, DraftId};

/// Everything the content area persists, stored as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentLibrary {
    #[serde(default)]
    pub drafts: Vec<Draft>,
    #[serde(default)]
    pub calendar: Vec<CalendarEntry>,
}

/// Dashboard counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentStats {
    pub total_drafts: usize,
    pub published_posts: usize,
    pub scheduled_posts: usize,
}

impl ContentLibrary {
    pub fn draft_mut(&mut self, id: DraftId) -> Option<&mut Draft> {
        self.drafts.iter_mut().find(|d| d.id == id)
    }

    pub fn remove_draft(&mut self, id: DraftId) -> Option<Draft> {
        let index = self.drafts.iter().position(|d| d.id == id)?;
        Some(self.drafts.remove(index))
    }

    pub fn calendar_entry_mut(&mut self, id: CalendarEntryId) -> Option<&mut CalendarEntry> {
        self.calendar.iter_mut().find(|e| e.id == id)
    }

    pub fn remove_calendar_entry(&mut self, id: CalendarEntryId) -> Option<CalendarEntry> {
        let index = self.calendar.iter().position(|e| e.id == id)?;
        Some(self.calendar.remove(index))
    }

    /// Scheduled posts counts every calendar entry regardless of status.
    pub fn stats(&self) -> ContentStats {
        ContentStats {
            total_drafts: self.drafts.len(),
            published_posts: self
                .drafts
                .iter()
                .filter(|d| d.status == DraftStatus::Published)
                .count(),
            scheduled_posts: self.calendar.len(),
        }
    }
}
