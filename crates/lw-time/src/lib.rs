//! # lw-time
//!
//! Calendar-date value types and the off-day `Calendar` trait.
//!
//! Dates here are plain calendar dates: no time of day and no time zone.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Calendar` trait and the weekend-only calendar.
pub mod calendar;

/// `Date` type.
pub mod date;

/// `DateRange`: inclusive span of dates.
pub mod date_range;

/// `Month`: month of the year.
pub mod month;

/// `MonthDay`: year-independent recurrence key.
pub mod month_day;

/// `Weekday`: day of the week.
pub mod weekday;

/// `WeekendSet`: configurable weekly rest days.
pub mod weekend;

/// `YearMonth`: a month of a specific year.
pub mod year_month;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{Calendar, WeekendsOnly};
pub use date::Date;
pub use date_range::DateRange;
pub use month::Month;
pub use month_day::MonthDay;
pub use weekday::Weekday;
pub use weekend::WeekendSet;
pub use year_month::YearMonth;
