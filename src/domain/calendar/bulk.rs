//! Weekly-theme bulk scheduling.

use chrono::{Days, NaiveDate};

use super::{CalendarEntry, CalendarStatus};
use crate::domain::content::{scorer, Platform};
use crate::domain::foundation::{CalendarEntryId, Timestamp, ValidationError};

pub const DEFAULT_BULK_DAYS: u32 = 7;
pub const DEFAULT_BULK_PLATFORMS: [Platform; 2] = [Platform::Facebook, Platform::Instagram];

/// Time every bulk-generated entry is scheduled at.
pub const BULK_POST_TIME: &str = "09:00";

/// A weekday theme and the phrase that fills its single placeholder.
struct Theme {
    template: &'static str,
    placeholder: &'static str,
    phrase: &'static str,
}

const WEEKLY_THEMES: [Theme; 5] = [
    Theme {
        template: "🌟 Monday Motivation: {topic} #MondayMotivation #Inspiration",
        placeholder: "{topic}",
        phrase: "your success journey",
    },
    Theme {
        template: "📝 Tip Tuesday: Did you know {tip}? #TipTuesday #Knowledge",
        placeholder: "{tip}",
        phrase: "consistency beats perfection",
    },
    Theme {
        template: "💡 Wisdom Wednesday: {quote} #WisdomWednesday #Success",
        placeholder: "{quote}",
        phrase: "Success is a journey, not a destination",
    },
    Theme {
        template: "🎯 Thursday Thoughts: {insight} #ThursdayThoughts #Growth",
        placeholder: "{insight}",
        phrase: "small steps lead to big changes",
    },
    Theme {
        template: "🎉 Friday Feature: Celebrating {achievement} #FridayFeature #Celebration",
        placeholder: "{achievement}",
        phrase: "another milestone reached",
    },
];

/// Themed content for day offset `day`, rotating through the five themes.
pub fn themed_content(day: u32) -> String {
    let theme = &WEEKLY_THEMES[day as usize % WEEKLY_THEMES.len()];
    theme.template.replacen(theme.placeholder, theme.phrase, 1)
}

/// Bulk request after defaults are applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkSchedule {
    pub start_date: NaiveDate,
    pub days: u32,
    pub platforms: Vec<Platform>,
}

impl BulkSchedule {
    /// # Errors
    ///
    /// - `OutOfRange` if `days` is zero or above `max_days`
    /// - `EmptyField` if no platforms are given
    pub fn validate(&self, max_days: u32) -> Result<(), ValidationError> {
        if self.days == 0 || self.days > max_days {
            return Err(ValidationError::out_of_range(
                "days",
                1,
                i32::try_from(max_days).unwrap_or(i32::MAX),
                i32::try_from(self.days).unwrap_or(i32::MAX),
            ));
        }
        if self.platforms.is_empty() {
            return Err(ValidationError::empty_field("platforms"));
        }
        Ok(())
    }

    /// One entry per day and platform, days outer, at [`BULK_POST_TIME`].
    pub fn generate(&self) -> Vec<CalendarEntry> {
        let created_at = Timestamp::now();
        let mut entries = Vec::with_capacity(self.days as usize * self.platforms.len());

        for day in 0..self.days {
            let Some(date) = self.start_date.checked_add_days(Days::new(u64::from(day))) else {
                break;
            };
            let content = themed_content(day);
            let quality_score = scorer::score(&content);

            for &platform in &self.platforms {
                entries.push(CalendarEntry {
                    id: CalendarEntryId::new(),
                    title: format!("Auto-generated {} post", platform),
                    content: content.clone(),
                    platform: Some(platform),
                    scheduled_date: date,
                    scheduled_time: Some(BULK_POST_TIME.to_string()),
                    hashtags: None,
                    status: CalendarStatus::Scheduled,
                    quality_score,
                    created_at,
                    updated_at: None,
                });
            }
        }

        entries
    }
}
