//! `WeekendSet`: the configurable set of weekly rest days.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::Date;
use crate::weekday::Weekday;

/// A set of weekdays stored as a bitmask.
///
/// Bit *i* is set when the weekday `i` days after Monday is a weekend day.
/// The default set is {Saturday, Sunday}.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekendSet(u8);

impl WeekendSet {
    /// The empty set (no weekend days).
    pub const NONE: WeekendSet = WeekendSet(0);

    /// Saturday and Sunday.
    pub const SATURDAY_SUNDAY: WeekendSet = WeekendSet((1 << 5) | (1 << 6));

    /// Build a set from any collection of weekdays.
    pub fn new<I: IntoIterator<Item = Weekday>>(days: I) -> Self {
        days.into_iter().fold(Self::NONE, |set, day| set.with(day))
    }

    /// Return a copy of the set with `day` added.
    pub fn with(self, day: Weekday) -> Self {
        WeekendSet(self.0 | bit(day))
    }

    /// Return `true` if `day` is a weekend day.
    #[inline]
    pub fn contains(&self, day: Weekday) -> bool {
        self.0 & bit(day) != 0
    }

    /// Return `true` if `date` falls on a weekend day.
    #[inline]
    pub fn is_weekend(&self, date: Date) -> bool {
        self.contains(date.weekday())
    }

    /// Number of weekend days per week.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` if the set has no weekend days.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The weekend days, Monday first.
    pub fn days(&self) -> Vec<Weekday> {
        Weekday::ALL
            .iter()
            .copied()
            .filter(|d| self.contains(*d))
            .collect()
    }
}

#[inline]
fn bit(day: Weekday) -> u8 {
    1u8 << day.days_from_monday()
}

impl Default for WeekendSet {
    fn default() -> Self {
        Self::SATURDAY_SUNDAY
    }
}

impl FromIterator<Weekday> for WeekendSet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl std::fmt::Debug for WeekendSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.days()).finish()
    }
}

impl Serialize for WeekendSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.days().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for WeekendSet {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(Self::new(days))
    }
}
