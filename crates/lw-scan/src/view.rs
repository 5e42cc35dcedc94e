//! Per-day data for presentation: the month grid and day details.

use serde::Serialize;

use lw_core::errors::Result;
use lw_holidays::Holiday;
use lw_time::{Calendar, Date, DateRange, Weekday, YearMonth};

use crate::classify::OffDayClassifier;
use crate::run::{is_part_of_long_weekend, run_containing, Run, RunSummary};

/// Styling flags of one grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DayFlags {
    /// The weekday is a weekend day.
    pub is_weekend: bool,
    /// A confirmed holiday falls on the date.
    pub is_holiday: bool,
    /// The date is a suggested day off in one of the month's runs.
    pub is_suggested: bool,
    /// The date belongs to one of the month's runs.
    pub is_long_weekend: bool,
}

/// One cell of the month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    /// The date.
    pub date: Date,
    /// `false` for the leading and trailing days of neighbouring months.
    pub in_month: bool,
    /// Styling flags.
    pub flags: DayFlags,
    /// First holiday recorded for the date, of any type.
    pub holiday: Option<Holiday>,
}

/// Whole weeks covering a month, with the month's runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthView {
    month: YearMonth,
    week_start: Weekday,
    cells: Vec<DayCell>,
    runs: Vec<RunSummary>,
}

impl MonthView {
    /// Lay out `month` in weeks starting on `week_start`.
    ///
    /// # Errors
    /// Fails if the first or last week leaves the supported date range.
    pub fn build(
        classifier: &OffDayClassifier<'_>,
        month: YearMonth,
        week_start: Weekday,
        runs: &[Run],
    ) -> Result<Self> {
        let first = month.first_day().start_of_week(week_start)?;
        let last = month.last_day().end_of_week(week_start)?;
        let store = classifier.store();
        let weekend = classifier.weekend();

        let cells = DateRange::new(first, last)
            .iter()
            .map(|date| DayCell {
                date,
                in_month: month.contains(date),
                flags: DayFlags {
                    is_weekend: weekend.is_weekend(date),
                    is_holiday: store.is_confirmed_holiday(date),
                    is_suggested: runs
                        .iter()
                        .flat_map(|r| r.days())
                        .any(|d| d.date == date && d.is_suggested()),
                    is_long_weekend: is_part_of_long_weekend(date, runs),
                },
                holiday: store.holiday_on(date).cloned(),
            })
            .collect();

        Ok(Self {
            month,
            week_start,
            cells,
            runs: runs.iter().map(Run::summary).collect(),
        })
    }

    /// The displayed month.
    pub fn month(&self) -> YearMonth {
        self.month
    }

    /// First column of the grid.
    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// All cells, row by row.
    pub fn cells(&self) -> &[DayCell] {
        &self.cells
    }

    /// Rows of seven cells.
    pub fn weeks(&self) -> impl Iterator<Item = &[DayCell]> + '_ {
        self.cells.chunks(7)
    }

    /// The cell of `date`, if shown.
    pub fn cell(&self, date: Date) -> Option<&DayCell> {
        let first = self.cells.first()?.date;
        let idx = usize::try_from(date - first).ok()?;
        self.cells.get(idx)
    }

    /// Summaries of the month's runs.
    pub fn runs(&self) -> &[RunSummary] {
        &self.runs
    }
}

/// What there is to say about a single day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayDetails {
    /// The date.
    pub date: Date,
    /// First holiday recorded for the date, of any type.
    pub holiday: Option<Holiday>,
    /// The weekday is a weekend day.
    pub is_weekend: bool,
    /// The run containing the date.
    pub run: Option<RunSummary>,
}

impl DayDetails {
    /// Details of `date`, or `None` when it has neither a holiday nor a run.
    pub fn for_date(classifier: &OffDayClassifier<'_>, date: Date, runs: &[Run]) -> Option<Self> {
        let holiday = classifier.store().holiday_on(date).cloned();
        let run = run_containing(date, runs).map(Run::summary);
        if holiday.is_none() && run.is_none() {
            return None;
        }
        Some(Self {
            date,
            holiday,
            is_weekend: classifier.weekend().is_weekend(date),
            run,
        })
    }

    /// Render as lines of text.
    pub fn to_text(&self) -> String {
        let mut lines = vec![self.date.format_full()];
        if let Some(h) = &self.holiday {
            lines.push(h.name().to_owned());
            lines.push(h.kind().label().to_owned());
        }
        if self.is_weekend {
            lines.push(format!("{} - Weekend", self.date.weekday().long_name()));
        }
        if let Some(run) = &self.run {
            lines.push("Long Weekend Opportunity!".to_owned());
            lines.push(format!(
                "{} - {}",
                run.start.format_short(),
                run.end.format_short()
            ));
            lines.push(format!("{} days off", run.days));
        }
        lines.join("\n")
    }
}
