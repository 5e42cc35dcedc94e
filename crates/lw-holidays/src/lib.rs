//! # lw-holidays
//!
//! Annually recurring holidays: the holiday model, the read-only
//! [`HolidayStore`], the CSV holiday feed and a [`Calendar`](lw_time::Calendar)
//! that observes gazetted holidays.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// CSV holiday feed reader.
pub mod feed;

/// `Holiday` and `HolidayType`.
pub mod holiday;

/// Calendar observing the holidays of a store.
pub mod holiday_calendar;

/// `HolidayStore`.
pub mod store;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use feed::{
    parse_holiday_feed, read_holiday_feed, read_holiday_feed_from_path, DropReason, DroppedRow,
    FeedReport,
};
pub use holiday::{Holiday, HolidayType};
pub use holiday_calendar::HolidayCalendar;
pub use store::HolidayStore;
