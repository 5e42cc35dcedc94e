//! `MonthDay`: a year-independent (month, day) pair.
//!
//! Holidays in the feed recur annually, so they are keyed by month and day
//! only. February 29 is a valid key; it matches nothing in common years.

use std::str::FromStr;

use lw_core::errors::{Error, Result};
use lw_core::utilities::data_parsers::parse_day_month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{days_in_month, Date};
use crate::month::Month;

/// An annually recurring calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthDay {
    month: u8,
    day: u8,
}

impl MonthDay {
    /// Create a month-day, validating the day against the longest version of
    /// the month (so `29 Feb` is accepted).
    pub fn new(month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        // 2000 is a leap year, which gives February its 29th.
        let longest = days_in_month(2000, month);
        if day == 0 || day > longest {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {longest}] for month {month}"
            )));
        }
        Ok(Self { month, day })
    }

    pub(crate) fn from_parts_unchecked(month: u8, day: u8) -> Self {
        debug_assert!(Self::new(month, day).is_ok());
        Self { month, day }
    }

    /// Parse a year-less date such as `"26 Jan"` or `"15 August"`.
    pub fn parse(s: &str) -> Result<Self> {
        let (month, day) = parse_day_month(s)
            .ok_or_else(|| Error::Date(format!("cannot parse day and month from {s:?}")))?;
        Self::new(month, day)
    }

    /// Month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Day of month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return `true` if `date` falls on this month and day, in any year.
    pub fn matches(&self, date: Date) -> bool {
        date.month_day() == *self
    }

    /// The occurrence of this month-day in `year`, if it exists (29 Feb
    /// does not exist in common years).
    pub fn in_year(&self, year: u16) -> Option<Date> {
        Date::from_ymd(year, self.month, self.day).ok()
    }
}

impl std::fmt::Display for MonthDay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let month = Month::from_number(self.month).ok_or(std::fmt::Error)?;
        write!(f, "{} {}", self.day, month.short_name())
    }
}

impl FromStr for MonthDay {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for MonthDay {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthDay {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        MonthDay::parse(&s).map_err(serde::de::Error::custom)
    }
}
