//! Calendar module - scheduled content and weekly bulk scheduling.

mod bulk;
mod entry;

pub use bulk::{
    themed_content, BulkSchedule, BULK_POST_TIME, DEFAULT_BULK_DAYS, DEFAULT_BULK_PLATFORMS,
};
pub use entry::{
    parse_date, parse_time, CalendarEntry, CalendarStatus, CalendarUpdate, NewCalendarEntry,
};
