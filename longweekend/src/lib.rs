//! # longweekend
//!
//! Long weekends and bridge days for a month, from a list of annually
//! recurring holidays.
//!
//! This crate is a **façade** that re-exports the workspace crates, plus the
//! command-line front end in [`cli`].
//!
//! ```rust
//! use longweekend::holidays::parse_holiday_feed;
//! use longweekend::scan::{describe, LongWeekendPlanner, ScanConfig};
//! use longweekend::time::YearMonth;
//!
//! let feed = parse_holiday_feed("Date,Name,Type\n15 Aug,Independence Day,Gazetted Holiday\n")?;
//! let planner = LongWeekendPlanner::new(feed.store, ScanConfig::default())?;
//! let runs = planner.runs(YearMonth::new(2025, 8)?)?;
//! assert_eq!(describe(&runs[0]).lines().next(), Some("August 15 - August 17"));
//! # Ok::<(), longweekend::core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Error types and text parsers.
pub use lw_core as core;

/// Calendar-date types and the `Calendar` trait.
pub use lw_time as time;

/// Holidays, the holiday store and the CSV feed.
pub use lw_holidays as holidays;

/// Classification, bridge days and the long-weekend scan.
pub use lw_scan as scan;

/// Command-line front end.
pub mod cli;
