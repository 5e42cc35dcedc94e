//! `Run`: a long-weekend candidate, and the membership queries over runs.

use serde::{Deserialize, Serialize};

use lw_holidays::Holiday;
use lw_time::{Date, DateRange, YearMonth};

use crate::classify::DayKind;

/// One day of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunDay {
    /// The date.
    pub date: Date,
    /// Its classification; never [`DayKind::Workday`].
    pub kind: DayKind,
    /// Holiday recorded for the date, confirmed or not.
    pub holiday: Option<Holiday>,
}

impl RunDay {
    /// Return `true` if this day is a suggested day off.
    pub fn is_suggested(&self) -> bool {
        self.kind == DayKind::SuggestedDayOff
    }
}

/// Consecutive days off (weekend, holiday or suggested), in date order.
///
/// Runs are produced by the scanner and are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Run {
    days: Vec<RunDay>,
}

impl Run {
    pub(crate) fn from_days(days: Vec<RunDay>) -> Self {
        debug_assert!(!days.is_empty());
        debug_assert!(days.windows(2).all(|w| w[1].date - w[0].date == 1));
        Self { days }
    }

    /// Extend with the days of `other` that come after this run's end.
    /// `other` must start no later than the day after this run's end.
    pub(crate) fn absorb(&mut self, other: Run) {
        let end = self.end();
        self.days
            .extend(other.days.into_iter().filter(|d| d.date > end));
    }

    pub(crate) fn into_days(self) -> Vec<RunDay> {
        self.days
    }

    /// Member days.
    pub fn days(&self) -> &[RunDay] {
        &self.days
    }

    /// First day.
    pub fn start(&self) -> Date {
        self.days[0].date
    }

    /// Last day.
    pub fn end(&self) -> Date {
        self.days[self.days.len() - 1].date
    }

    /// Number of days.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always `false`.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// The covered dates.
    pub fn range(&self) -> DateRange {
        DateRange::new(self.start(), self.end())
    }

    /// Return `true` if `date` is a member.
    pub fn contains(&self, date: Date) -> bool {
        self.start() <= date && date <= self.end()
    }

    /// Return `true` if some member falls in `month`.
    pub fn overlaps_month(&self, month: YearMonth) -> bool {
        self.days.iter().any(|d| month.contains(d.date))
    }

    /// Members carrying a holiday, with their dates.
    pub fn holidays(&self) -> impl Iterator<Item = (Date, &Holiday)> + '_ {
        self.days
            .iter()
            .filter_map(|d| d.holiday.as_ref().map(|h| (d.date, h)))
    }

    /// Dates of suggested days off.
    pub fn suggested_days(&self) -> impl Iterator<Item = Date> + '_ {
        self.days.iter().filter(|d| d.is_suggested()).map(|d| d.date)
    }

    /// Plain-data summary of the run.
    pub fn summary(&self) -> RunSummary {
        RunSummary {
            start: self.start(),
            end: self.end(),
            days: self.len(),
            holidays: self
                .holidays()
                .map(|(date, h)| (date, h.name().to_owned()))
                .collect(),
            suggested_days: self.suggested_days().collect(),
        }
    }
}

/// Per-run data handed to presentation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunSummary {
    /// First day.
    pub start: Date,
    /// Last day.
    pub end: Date,
    /// Number of days off.
    pub days: usize,
    /// Holidays within the run, by date.
    pub holidays: Vec<(Date, String)>,
    /// Days to take as leave.
    pub suggested_days: Vec<Date>,
}

/// Return `true` if `date` belongs to any of `runs`.
pub fn is_part_of_long_weekend(date: Date, runs: &[Run]) -> bool {
    runs.iter().any(|r| r.contains(date))
}

/// The first of `runs` containing `date`.
pub fn run_containing(date: Date, runs: &[Run]) -> Option<&Run> {
    runs.iter().find(|r| r.contains(date))
}
