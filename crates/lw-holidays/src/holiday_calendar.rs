//! `HolidayCalendar`: a holiday store observed over a weekend set.

use lw_time::{Calendar, Date, WeekendSet};

use crate::store::HolidayStore;

/// A calendar whose off days are the weekend days of a [`WeekendSet`] plus
/// the confirmed holidays of a [`HolidayStore`].
#[derive(Debug, Clone)]
pub struct HolidayCalendar {
    name: String,
    store: HolidayStore,
    weekend: WeekendSet,
}

impl HolidayCalendar {
    /// Create a calendar from a store and a weekend set.
    pub fn new(name: impl Into<String>, store: HolidayStore, weekend: WeekendSet) -> Self {
        Self {
            name: name.into(),
            store,
            weekend,
        }
    }

    /// A calendar with no holidays (weekend days only).
    pub fn weekends_only(weekend: WeekendSet) -> Self {
        Self::new("Weekends Only", HolidayStore::empty(), weekend)
    }

    /// The underlying holiday list.
    pub fn store(&self) -> &HolidayStore {
        &self.store
    }

    /// Replace the holiday list, keeping name and weekend set.
    pub fn set_store(&mut self, store: HolidayStore) {
        self.store = store;
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn weekend(&self) -> WeekendSet {
        self.weekend
    }

    fn is_holiday(&self, date: Date) -> bool {
        self.store.is_confirmed_holiday(date)
    }
}
