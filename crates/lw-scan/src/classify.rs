//! `OffDayClassifier`: weekend and holiday classification of single dates.

use serde::{Deserialize, Serialize};

use lw_holidays::{Holiday, HolidayCalendar, HolidayStore};
use lw_time::{Calendar, Date, WeekendSet};

use crate::bridge::BridgeDayDetector;

/// Classification of one calendar day.
///
/// When several apply, the first listed wins: a confirmed holiday on a
/// weekend day is a `Holiday`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKind {
    /// Confirmed (gazetted) holiday.
    Holiday,
    /// Weekend day.
    Weekend,
    /// Working day that bridges two off periods.
    SuggestedDayOff,
    /// Regular working day.
    Workday,
}

impl DayKind {
    /// Weekend or confirmed holiday.
    pub fn is_off(&self) -> bool {
        matches!(self, DayKind::Holiday | DayKind::Weekend)
    }

    /// Anything but a regular working day.
    pub fn is_run_member(&self) -> bool {
        !matches!(self, DayKind::Workday)
    }

    /// Holiday or suggested day off: what makes a run more than a weekend.
    pub fn is_notable(&self) -> bool {
        matches!(self, DayKind::Holiday | DayKind::SuggestedDayOff)
    }
}

/// Classifies dates against a holiday store and a weekend set.
#[derive(Debug, Clone, Copy)]
pub struct OffDayClassifier<'a> {
    store: &'a HolidayStore,
    weekend: WeekendSet,
}

impl<'a> OffDayClassifier<'a> {
    /// Classifier over `store` with the given weekly rest days.
    pub fn new(store: &'a HolidayStore, weekend: WeekendSet) -> Self {
        Self { store, weekend }
    }

    /// Classifier over the store and weekend of a holiday calendar.
    pub fn from_calendar(calendar: &'a HolidayCalendar) -> Self {
        Self::new(calendar.store(), calendar.weekend())
    }

    /// The underlying holiday store.
    pub fn store(&self) -> &'a HolidayStore {
        self.store
    }

    /// Return `true` if `date` is a weekend day or a confirmed holiday.
    pub fn is_off_day(&self, date: Date) -> bool {
        Calendar::is_off_day(self, date)
    }

    /// Return `true` if `date` is a working day that bridges two off
    /// periods.
    pub fn is_suggested_day_off(&self, date: Date) -> bool {
        BridgeDayDetector::new(self).is_suggested_day_off(date)
    }

    /// Classify `date`.
    pub fn classify(&self, date: Date) -> DayKind {
        if self.store.is_confirmed_holiday(date) {
            DayKind::Holiday
        } else if self.weekend.is_weekend(date) {
            DayKind::Weekend
        } else if self.is_suggested_day_off(date) {
            DayKind::SuggestedDayOff
        } else {
            DayKind::Workday
        }
    }

    /// The holiday to show for `date`: the confirmed one if any, otherwise
    /// the first restricted one.
    pub fn holiday_for(&self, date: Date) -> Option<&'a Holiday> {
        self.store.primary_holiday_on(date)
    }
}

impl Calendar for OffDayClassifier<'_> {
    fn name(&self) -> &str {
        "off days"
    }

    fn weekend(&self) -> WeekendSet {
        self.weekend
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.store.is_confirmed_holiday(date)
    }
}
