//! `YearMonth`: identifies the displayed month.

use std::str::FromStr;

use lw_core::errors::{Error, Result};
use lw_core::utilities::data_parsers::parse_year_month;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::date::{days_in_month, serial_from_ymd, Date};
use crate::month::Month;

/// A month of a specific year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: u16,
    month: u8,
}

impl YearMonth {
    /// Create a year-month; the year must be within the supported date range.
    pub fn new(year: u16, month: u8) -> Result<Self> {
        if !(Date::MIN_YEAR..=Date::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Date::MIN_YEAR,
                Date::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        Ok(Self { year, month })
    }

    pub(crate) fn from_parts_unchecked(year: u16, month: u8) -> Self {
        Self { year, month }
    }

    /// Parse `YYYY-MM`.
    pub fn parse(s: &str) -> Result<Self> {
        let (year, month) = parse_year_month(s)
            .ok_or_else(|| Error::Date(format!("cannot parse year-month from {s:?}")))?;
        Self::new(year, month)
    }

    /// The year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// The month number (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// The month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month) {
            Some(m) => m,
            None => unreachable!("validated on construction"),
        }
    }

    /// First calendar day of the month.
    pub fn first_day(&self) -> Date {
        Date::from_serial(serial_from_ymd(self.year, self.month, 1))
            .unwrap_or(Date::MIN)
    }

    /// Last calendar day of the month.
    pub fn last_day(&self) -> Date {
        let last = days_in_month(self.year, self.month);
        Date::from_serial(serial_from_ymd(self.year, self.month, last))
            .unwrap_or(Date::MAX)
    }

    /// Number of days in the month.
    pub fn len_days(&self) -> u8 {
        days_in_month(self.year, self.month)
    }

    /// Return `true` if `date` falls within this month.
    pub fn contains(&self, date: Date) -> bool {
        date.year_month() == *self
    }

    /// The following month.
    pub fn next(&self) -> Result<Self> {
        if self.month == 12 {
            Self::new(self.year + 1, 1)
        } else {
            Self::new(self.year, self.month + 1)
        }
    }

    /// The preceding month.
    pub fn prev(&self) -> Result<Self> {
        if self.month == 1 {
            Self::new(self.year.saturating_sub(1), 12)
        } else {
            Self::new(self.year, self.month - 1)
        }
    }
}

impl std::fmt::Display for YearMonth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.month_of_year().long_name(), self.year)
    }
}

impl FromStr for YearMonth {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl Serialize for YearMonth {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&format!("{:04}-{:02}", self.year, self.month))
    }
}

impl<'de> Deserialize<'de> for YearMonth {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        YearMonth::parse(&s).map_err(serde::de::Error::custom)
    }
}
