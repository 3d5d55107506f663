//! Calendar entry entity.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::content::{scorer, Platform};
use crate::domain::foundation::{CalendarEntryId, QualityScore, Timestamp, ValidationError};

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";

/// Publication status of a scheduled entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarStatus {
    #[default]
    Scheduled,
    Published,
    Failed,
}

impl CalendarStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarStatus::Scheduled => "scheduled",
            CalendarStatus::Published => "published",
            CalendarStatus::Failed => "failed",
        }
    }
}

impl fmt::Display for CalendarStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalendarStatus {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scheduled" => Ok(CalendarStatus::Scheduled),
            "published" => Ok(CalendarStatus::Published),
            "failed" => Ok(CalendarStatus::Failed),
            other => Err(ValidationError::invalid_format(
                "status",
                format!("unknown calendar status '{}'", other),
            )),
        }
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| ValidationError::invalid_format(field, "expected YYYY-MM-DD"))
}

/// Normalises an `HH:MM` time, rejecting anything else.
pub fn parse_time(field: &str, value: &str) -> Result<String, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT)
        .map(|t| t.format(TIME_FORMAT).to_string())
        .map_err(|_| ValidationError::invalid_format(field, "expected HH:MM"))
}

/// Input for scheduling a new entry. Title, content and date are required.
#[derive(Debug, Clone, Default)]
pub struct NewCalendarEntry {
    pub title: String,
    pub content: String,
    pub platform: Option<Platform>,
    pub scheduled_date: String,
    pub scheduled_time: Option<String>,
    pub hashtags: Option<String>,
}

/// Partial update; `None` leaves a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CalendarUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
    pub platform: Option<Platform>,
    pub scheduled_date: Option<String>,
    pub scheduled_time: Option<String>,
    pub hashtags: Option<String>,
    pub status: Option<CalendarStatus>,
}

/// A piece of content scheduled for a day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
    pub id: CalendarEntryId,
    pub title: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    pub scheduled_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scheduled_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hashtags: Option<String>,
    #[serde(default)]
    pub status: CalendarStatus,
    pub quality_score: QualityScore,
    pub created_at: Timestamp,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<Timestamp>,
}

impl CalendarEntry {
    /// Schedules a new entry with status `scheduled`.
    ///
    /// # Errors
    ///
    /// - `EmptyField` if title or content is blank, or the date is missing
    /// - `InvalidFormat` if the date or time is malformed
    pub fn create(new: NewCalendarEntry) -> Result<Self, ValidationError> {
        require("title", &new.title)?;
        require("content", &new.content)?;
        require("scheduledDate", &new.scheduled_date)?;
        let scheduled_date = parse_date("scheduledDate", &new.scheduled_date)?;
        let scheduled_time = new
            .scheduled_time
            .as_deref()
            .map(|t| parse_time("scheduledTime", t))
            .transpose()?;

        Ok(Self {
            id: CalendarEntryId::new(),
            title: new.title,
            quality_score: scorer::score(&new.content),
            content: new.content,
            platform: new.platform,
            scheduled_date,
            scheduled_time,
            hashtags: new.hashtags,
            status: CalendarStatus::Scheduled,
            created_at: Timestamp::now(),
            updated_at: None,
        })
    }

    /// Merges an update and stamps `updated_at`. Nothing changes on error.
    pub fn apply(&mut self, update: CalendarUpdate) -> Result<(), ValidationError> {
        if let Some(title) = &update.title {
            require("title", title)?;
        }
        if let Some(content) = &update.content {
            require("content", content)?;
        }
        let scheduled_date = update
            .scheduled_date
            .as_deref()
            .map(|d| parse_date("scheduledDate", d))
            .transpose()?;
        let scheduled_time = update
            .scheduled_time
            .as_deref()
            .map(|t| parse_time("scheduledTime", t))
            .transpose()?;

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(content) = update.content {
            self.quality_score = scorer::score(&content);
            self.content = content;
        }
        if update.platform.is_some() {
            self.platform = update.platform;
        }
        if let Some(date) = scheduled_date {
            self.scheduled_date = date;
        }
        if scheduled_time.is_some() {
            self.scheduled_time = scheduled_time;
        }
        if update.hashtags.is_some() {
            self.hashtags = update.hashtags;
        }
        if let Some(status) = update.status {
            self.status = status;
        }
        self.updated_at = Some(Timestamp::now());
        Ok(())
    }
}

fn require(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::empty_field(field));
    }
    Ok(())
}
