//! `LongWeekendScanner`: finds long-weekend runs around a month.
//!
//! The scan covers the target month widened by `padding_days` on each side.
//! Every day of that window is tried as a start: days are collected forward
//! while they are off or suggested, for at most `look_ahead_days` days and
//! never past the window. A collection is a detection when it has at least
//! `min_run_length` days and holds at least one holiday or suggested day off.
//!
//! [`DetectionMode::Overlapping`] returns the detections that touch the
//! target month. [`DetectionMode::Maximal`] merges all detections that
//! overlap or touch, widens each merged run to its whole cluster of
//! consecutive off and suggested days (the window does not clip it), and
//! returns the clusters that touch the target month. A cluster is therefore
//! reported with the same span from every month it touches.

use lw_core::errors::Result;
use lw_holidays::HolidayStore;
use lw_time::{Date, DateRange, YearMonth};
use tracing::debug;

use crate::classify::{DayKind, OffDayClassifier};
use crate::config::{DetectionMode, ScanConfig};
use crate::run::{Run, RunDay};

/// Long-weekend scanner.
#[derive(Debug, Clone)]
pub struct LongWeekendScanner<'a> {
    classifier: OffDayClassifier<'a>,
    config: &'a ScanConfig,
}

impl<'a> LongWeekendScanner<'a> {
    /// Scanner over `store` using `config`'s weekend.
    ///
    /// # Errors
    /// Fails if `config` does not validate.
    pub fn new(store: &'a HolidayStore, config: &'a ScanConfig) -> Result<Self> {
        Self::with_classifier(OffDayClassifier::new(store, config.weekend), config)
    }

    /// Scanner over an existing classifier. The classifier's weekend wins
    /// over `config.weekend`.
    pub fn with_classifier(classifier: OffDayClassifier<'a>, config: &'a ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { classifier, config })
    }

    /// The classifier in use.
    pub fn classifier(&self) -> &OffDayClassifier<'a> {
        &self.classifier
    }

    /// The settings in use.
    pub fn config(&self) -> &ScanConfig {
        self.config
    }

    /// The padded window scanned for `month`.
    ///
    /// # Errors
    /// Fails if the window leaves the supported date range.
    pub fn search_window(&self, month: YearMonth) -> Result<DateRange> {
        // `validate` bounds both spans by `MAX_SPAN_DAYS`.
        let padding = self.config.padding_days as i32;
        let start = month.first_day().add_days(-padding)?;
        let end = month.last_day().add_days(padding)?;
        Ok(DateRange::new(start, end))
    }

    /// Find the long weekends of `month`, ordered by start date.
    pub fn find_long_weekends(&self, month: YearMonth) -> Result<Vec<Run>> {
        let detections = self.detect(month)?;
        let runs: Vec<Run> = match self.config.mode {
            DetectionMode::Overlapping => detections,
            DetectionMode::Maximal => {
                let clusters = merge_runs(detections)
                    .into_iter()
                    .map(|run| self.widen_to_cluster(run))
                    .collect();
                merge_runs(clusters)
            }
        };
        let runs: Vec<Run> = runs
            .into_iter()
            .filter(|run| run.overlaps_month(month))
            .collect();
        debug!(%month, mode = ?self.config.mode, runs = runs.len(), "long weekends found");
        Ok(runs)
    }

    /// Detections in the window of `month`, one per qualifying start day,
    /// whether or not they reach the month itself.
    fn detect(&self, month: YearMonth) -> Result<Vec<Run>> {
        let window = self.search_window(month)?;
        let mut detections = Vec::new();
        for start in window {
            let days = self.collect_from(start, window.end());
            if self.qualifies(&days) {
                detections.push(Run::from_days(days));
            }
        }
        debug!(
            %month,
            window_start = %window.start(),
            window_end = %window.end(),
            detections = detections.len(),
            "scanned window"
        );
        Ok(detections)
    }

    /// Consecutive run members from `start`, stopping at the first working
    /// day, after `look_ahead_days` days, or past `last`.
    fn collect_from(&self, start: Date, last: Date) -> Vec<RunDay> {
        let mut days = Vec::new();
        for offset in 0..self.config.look_ahead_days {
            let date = match start.add_days(offset as i32) {
                Ok(date) if date <= last => date,
                _ => break,
            };
            match self.member(date) {
                Some(day) => days.push(day),
                None => break,
            }
        }
        days
    }

    fn member(&self, date: Date) -> Option<RunDay> {
        let kind = self.classifier.classify(date);
        if kind == DayKind::Workday {
            return None;
        }
        Some(RunDay {
            date,
            kind,
            holiday: self.classifier.holiday_for(date).cloned(),
        })
    }

    fn qualifies(&self, days: &[RunDay]) -> bool {
        days.len() >= self.config.min_run_length && days.iter().any(|d| d.kind.is_notable())
    }

    /// Days a maximal run may grow on each side. Weekends that leave no
    /// working day unbridged make every day a member.
    const MAX_WIDENING: usize = ScanConfig::MAX_SPAN_DAYS as usize;

    /// Extend `run` backwards and forwards over every adjacent run member.
    fn widen_to_cluster(&self, run: Run) -> Run {
        let mut before = Vec::new();
        let mut date = run.start();
        while before.len() < Self::MAX_WIDENING {
            match date.add_days(-1).ok().and_then(|d| self.member(d)) {
                Some(day) => {
                    date = day.date;
                    before.push(day);
                }
                None => break,
            }
        }
        before.reverse();

        let mut after = Vec::new();
        let mut date = run.end();
        while after.len() < Self::MAX_WIDENING {
            match date.add_days(1).ok().and_then(|d| self.member(d)) {
                Some(day) => {
                    date = day.date;
                    after.push(day);
                }
                None => break,
            }
        }

        if before.is_empty() && after.is_empty() {
            return run;
        }
        before.extend(run.into_days());
        before.extend(after);
        Run::from_days(before)
    }
}

/// Merge detections that overlap or touch. `runs` must be ordered by start
/// date; so is the result.
fn merge_runs(runs: Vec<Run>) -> Vec<Run> {
    let mut merged: Vec<Run> = Vec::with_capacity(runs.len());
    for run in runs {
        match merged.last_mut() {
            Some(last) if run.start() - last.end() <= 1 => last.absorb(run),
            _ => merged.push(run),
        }
    }
    merged
}
