//! `HolidayStore`: the normalized, read-only holiday list.

use std::collections::HashMap;

use lw_time::{Date, MonthDay, YearMonth};

use crate::holiday::Holiday;

/// An immutable list of annually recurring holidays, indexed by month and
/// day.
///
/// Populated once from the feed and only read afterwards. Several holidays
/// may share a date; lookups that return a single holiday return the first
/// one in feed order.
#[derive(Debug, Clone, Default)]
pub struct HolidayStore {
    holidays: Vec<Holiday>,
    index: HashMap<MonthDay, Vec<usize>>,
}

impl HolidayStore {
    /// Build a store from holidays in feed order.
    pub fn new<I: IntoIterator<Item = Holiday>>(holidays: I) -> Self {
        let holidays: Vec<Holiday> = holidays.into_iter().collect();
        let mut index: HashMap<MonthDay, Vec<usize>> = HashMap::new();
        for (i, h) in holidays.iter().enumerate() {
            index.entry(h.date()).or_default().push(i);
        }
        Self { holidays, index }
    }

    /// A store with no holidays.
    pub fn empty() -> Self {
        Self::default()
    }

    /// All holidays in feed order.
    pub fn holidays(&self) -> &[Holiday] {
        &self.holidays
    }

    /// Number of holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// Return `true` if the store holds no holidays.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }

    /// Every holiday (of any type) recurring on `date`'s month and day.
    pub fn holidays_on(&self, date: Date) -> impl Iterator<Item = &Holiday> + '_ {
        self.index
            .get(&date.month_day())
            .into_iter()
            .flatten()
            .map(move |&i| &self.holidays[i])
    }

    /// The first holiday of any type recurring on `date`.
    pub fn holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.holidays_on(date).next()
    }

    /// The first confirmed holiday recurring on `date`.
    pub fn confirmed_holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.holidays_on(date).find(|h| h.is_confirmed())
    }

    /// The holiday to report for `date`: the confirmed one when there is
    /// one, otherwise the first restricted one.
    pub fn primary_holiday_on(&self, date: Date) -> Option<&Holiday> {
        self.confirmed_holiday_on(date)
            .or_else(|| self.holiday_on(date))
    }

    /// Return `true` if a confirmed holiday recurs on `date`.
    pub fn is_confirmed_holiday(&self, date: Date) -> bool {
        self.confirmed_holiday_on(date).is_some()
    }

    /// Holidays occurring in `month`, by date then feed order.
    pub fn in_month(&self, month: YearMonth) -> Vec<(Date, &Holiday)> {
        let mut found: Vec<(Date, &Holiday)> = self
            .holidays
            .iter()
            .filter_map(|h| {
                let md = h.date();
                if md.month() != month.month() {
                    return None;
                }
                md.in_year(month.year()).map(|d| (d, h))
            })
            .collect();
        // Stable sort keeps feed order among same-day holidays.
        found.sort_by_key(|(d, _)| *d);
        found
    }
}

impl FromIterator<Holiday> for HolidayStore {
    fn from_iter<I: IntoIterator<Item = Holiday>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn md(s: &str) -> MonthDay {
        MonthDay::parse(s).unwrap()
    }

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn sample() -> HolidayStore {
        HolidayStore::new([
            Holiday::gazetted(md("26 Jan"), "Republic Day"),
            Holiday::restricted(md("14 Jan"), "Makar Sankranti"),
            Holiday::restricted(md("15 Aug"), "Parsi New Year"),
            Holiday::gazetted(md("15 Aug"), "Independence Day"),
        ])
    }

    #[test]
    fn lookups() {
        let store = sample();
        assert_eq!(store.len(), 4);
        let aug15 = date(2025, 8, 15);
        assert_eq!(store.holiday_on(aug15).unwrap().name(), "Parsi New Year");
        assert_eq!(store.confirmed_holiday_on(aug15).unwrap().name(), "Independence Day");
        assert_eq!(store.primary_holiday_on(aug15).unwrap().name(), "Independence Day");
        assert_eq!(store.holidays_on(aug15).count(), 2);
        assert!(store.is_confirmed_holiday(aug15));
    }

    #[test]
    fn restricted_is_not_confirmed() {
        let store = sample();
        let jan14 = date(2025, 1, 14);
        assert!(store.holiday_on(jan14).is_some());
        assert!(!store.is_confirmed_holiday(jan14));
        assert_eq!(store.primary_holiday_on(jan14).unwrap().name(), "Makar Sankranti");
    }

    #[test]
    fn empty_store() {
        let store = HolidayStore::empty();
        assert!(store.is_empty());
        assert!(store.holiday_on(date(2025, 1, 26)).is_none());
        assert!(!store.is_confirmed_holiday(date(2025, 1, 26)));
    }

    #[test]
    fn holidays_in_month() {
        let store = sample();
        let jan = store.in_month(YearMonth::new(2025, 1).unwrap());
        let names: Vec<&str> = jan.iter().map(|(_, h)| h.name()).collect();
        assert_eq!(names, ["Makar Sankranti", "Republic Day"]);
        assert_eq!(jan[1].0, date(2025, 1, 26));
        assert!(store.in_month(YearMonth::new(2025, 3).unwrap()).is_empty());
    }

    #[test]
    fn leap_day_holiday_skipped_in_common_year() {
        let store = HolidayStore::new([Holiday::gazetted(md("29 Feb"), "Leap Day")]);
        assert_eq!(store.in_month(YearMonth::new(2024, 2).unwrap()).len(), 1);
        assert!(store.in_month(YearMonth::new(2025, 2).unwrap()).is_empty());
    }
}
