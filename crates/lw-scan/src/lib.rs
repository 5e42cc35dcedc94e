//! # lw-scan
//!
//! Long-weekend detection over a [`HolidayStore`](lw_holidays::HolidayStore):
//! off-day classification, bridge days, the padded month scan, and the data
//! presentation code needs (descriptions, month grid, day details).
//!
//! ```
//! use lw_holidays::{Holiday, HolidayStore};
//! use lw_scan::{describe, LongWeekendScanner, ScanConfig};
//! use lw_time::{MonthDay, YearMonth};
//!
//! let store = HolidayStore::new([Holiday::gazetted(MonthDay::new(10, 2)?, "Gandhi Jayanti")]);
//! let config = ScanConfig::default();
//! let scanner = LongWeekendScanner::new(&store, &config)?;
//! let runs = scanner.find_long_weekends(YearMonth::new(2025, 10)?)?;
//! assert_eq!(runs.len(), 1);
//! assert!(describe(&runs[0]).starts_with("October 2 - October 5\n4 days off"));
//! # Ok::<(), lw_core::Error>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Bridge-day detection.
pub mod bridge;

/// Single-day classification.
pub mod classify;

/// Scanner settings.
pub mod config;

/// Run descriptions.
pub mod describe;

/// Cached planner.
pub mod planner;

/// Runs and membership queries.
pub mod run;

/// The month scan.
pub mod scanner;

/// Month grid and day details.
pub mod view;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use bridge::{BridgeDayDetector, BridgeKind};
pub use classify::{DayKind, OffDayClassifier};
pub use config::{DetectionMode, ScanConfig};
pub use describe::{describe, describe_all};
pub use planner::LongWeekendPlanner;
pub use run::{is_part_of_long_weekend, run_containing, Run, RunDay, RunSummary};
pub use scanner::LongWeekendScanner;
pub use view::{DayCell, DayDetails, DayFlags, MonthView};
