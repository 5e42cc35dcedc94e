//! `LongWeekendPlanner`: the scanner behind a month-keyed cache.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use lw_core::errors::Result;
use lw_holidays::{HolidayCalendar, HolidayStore};
use lw_time::{Date, YearMonth};
use tracing::debug;

use crate::classify::OffDayClassifier;
use crate::config::ScanConfig;
use crate::run::Run;
use crate::scanner::LongWeekendScanner;
use crate::view::{DayDetails, MonthView};

/// Owns the holidays and settings, and remembers the runs of every month
/// it has scanned.
///
/// The cache is only invalidated by [`replace_holidays`](Self::replace_holidays);
/// scans are pure, so a cached result is always the one a fresh scan would
/// give.
#[derive(Debug)]
pub struct LongWeekendPlanner {
    calendar: HolidayCalendar,
    config: ScanConfig,
    cache: RefCell<HashMap<YearMonth, Rc<[Run]>>>,
}

impl LongWeekendPlanner {
    /// Planner over `store`.
    ///
    /// # Errors
    /// Fails if `config` does not validate.
    pub fn new(store: HolidayStore, config: ScanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            calendar: HolidayCalendar::new("holidays", store, config.weekend),
            config,
            cache: RefCell::new(HashMap::new()),
        })
    }

    /// The holiday calendar.
    pub fn calendar(&self) -> &HolidayCalendar {
        &self.calendar
    }

    /// The settings.
    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    /// Swap in a new holiday list and forget every cached month.
    pub fn replace_holidays(&mut self, store: HolidayStore) {
        self.calendar.set_store(store);
        self.cache.get_mut().clear();
    }

    /// Number of months currently cached.
    pub fn cached_months(&self) -> usize {
        self.cache.borrow().len()
    }

    fn classifier(&self) -> OffDayClassifier<'_> {
        OffDayClassifier::from_calendar(&self.calendar)
    }

    /// Runs of `month`, scanning on first use.
    pub fn runs(&self, month: YearMonth) -> Result<Rc<[Run]>> {
        if let Some(runs) = self.cache.borrow().get(&month) {
            return Ok(Rc::clone(runs));
        }
        debug!(%month, "scanning month");
        let scanner = LongWeekendScanner::with_classifier(self.classifier(), &self.config)?;
        let runs: Rc<[Run]> = scanner.find_long_weekends(month)?.into();
        self.cache.borrow_mut().insert(month, Rc::clone(&runs));
        Ok(runs)
    }

    /// Grid of `month` with its runs.
    pub fn month_view(&self, month: YearMonth) -> Result<MonthView> {
        let runs = self.runs(month)?;
        MonthView::build(&self.classifier(), month, self.config.week_start, &runs)
    }

    /// Details of `date` as shown in `month`.
    pub fn day_details(&self, date: Date, month: YearMonth) -> Result<Option<DayDetails>> {
        let runs = self.runs(month)?;
        Ok(DayDetails::for_date(&self.classifier(), date, &runs))
    }

    /// Return `true` if `date` belongs to one of `month`'s runs.
    pub fn is_part_of_long_weekend(&self, date: Date, month: YearMonth) -> Result<bool> {
        let runs = self.runs(month)?;
        Ok(crate::run::is_part_of_long_weekend(date, &runs))
    }
}
