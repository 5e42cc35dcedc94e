//! `Calendar` trait and the weekend-only calendar.
//!
//! A calendar knows which dates are off days: weekend days from its
//! [`WeekendSet`] plus whatever holidays the implementation observes.

use crate::date::Date;
use crate::weekend::WeekendSet;

/// A calendar of off days.
pub trait Calendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"India (gazetted)"`).
    fn name(&self) -> &str;

    /// The weekly rest days of this calendar.
    fn weekend(&self) -> WeekendSet;

    /// Return `true` if `date` is an observed holiday.
    ///
    /// Only holidays that actually give the day off count here; a holiday
    /// that falls on a weekend day is still reported.
    fn is_holiday(&self, date: Date) -> bool;

    /// Return `true` if `date` falls on a weekend day.
    fn is_weekend(&self, date: Date) -> bool {
        self.weekend().is_weekend(date)
    }

    /// Return `true` if `date` is a weekend day or an observed holiday.
    fn is_off_day(&self, date: Date) -> bool {
        self.is_weekend(date) || self.is_holiday(date)
    }

    /// Return `true` if `date` is a regular working day.
    fn is_workday(&self, date: Date) -> bool {
        !self.is_off_day(date)
    }
}

/// A calendar whose only off days are weekend days.
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendsOnly {
    weekend: WeekendSet,
}

impl WeekendsOnly {
    /// Create a weekend-only calendar over a custom weekend set.
    pub fn new(weekend: WeekendSet) -> Self {
        Self { weekend }
    }
}

impl Calendar for WeekendsOnly {
    fn name(&self) -> &str {
        "Weekends Only"
    }

    fn weekend(&self) -> WeekendSet {
        self.weekend
    }

    fn is_holiday(&self, _date: Date) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weekday::Weekday;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn weekends_only_saturday() {
        let cal = WeekendsOnly::default();
        // 2023-09-02 is a Saturday
        let sat = date(2023, 9, 2);
        assert!(cal.is_off_day(sat));
        assert!(!cal.is_holiday(sat));
        let mon = date(2023, 9, 4);
        assert!(cal.is_workday(mon));
    }

    #[test]
    fn custom_weekend() {
        let cal = WeekendsOnly::new(WeekendSet::new([Weekday::Friday, Weekday::Saturday]));
        assert!(cal.is_off_day(date(2023, 9, 1))); // Friday
        assert!(cal.is_workday(date(2023, 9, 3))); // Sunday
    }
}
