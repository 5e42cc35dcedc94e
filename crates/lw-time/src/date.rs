//! `Date` type.
//!
//! Dates are calendar dates only (no time of day, no time zone) stored as a
//! serial number of days.
//!
//! # Serial number convention
//! * Serial 1 = January 1, 1900 (a Monday).
//! * The valid date range is 1900-01-01 to 2199-12-31.

use std::str::FromStr;

use lw_core::errors::{Error, Result};
use lw_core::utilities::data_parsers::parse_iso_date;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::month::Month;
use crate::month_day::MonthDay;
use crate::weekday::Weekday;
use crate::year_month::YearMonth;

/// A calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 1900.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 2199.
    pub const MAX: Date = Date(109_573);

    /// Smallest supported year.
    pub const MIN_YEAR: u16 = 1900;

    /// Largest supported year.
    pub const MAX_YEAR: u16 = 2199;

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside `[MIN, MAX]`.
    pub fn from_serial(serial: i32) -> Result<Self> {
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year, month (1–12), and day-of-month (1–31).
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(Self::MIN_YEAR..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{}, {}]",
                Self::MIN_YEAR,
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year, month, day)))
    }

    /// Parse an ISO 8601 date (`YYYY-MM-DD`).
    pub fn parse_iso(s: &str) -> Result<Self> {
        let (y, m, d) =
            parse_iso_date(s).ok_or_else(|| Error::Date(format!("cannot parse date {s:?}")))?;
        Self::from_ymd(y, m, d)
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1900–2199).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month number (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the month as a [`Month`].
    pub fn month_of_year(&self) -> Month {
        match Month::from_number(self.month()) {
            Some(m) => m,
            None => unreachable!("month numbers are always 1..=12"),
        }
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        // Serial 1 (1900-01-01) is a Monday.
        Weekday::ALL[(self.0 - 1).rem_euclid(7) as usize]
    }

    /// Year-independent (month, day) key used to match recurring holidays.
    pub fn month_day(&self) -> MonthDay {
        let (_, m, d) = ymd_from_serial(self.0);
        MonthDay::from_parts_unchecked(m, d)
    }

    /// The (year, month) this date falls in.
    pub fn year_month(&self) -> YearMonth {
        let (y, m, _) = ymd_from_serial(self.0);
        YearMonth::from_parts_unchecked(y, m)
    }

    /// Return `true` if both dates fall in the same month of the same year.
    pub fn is_same_month(&self, other: Date) -> bool {
        self.year_month() == other.year_month()
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        let serial = self.0.checked_add(n).ok_or_else(|| {
            Error::Date(format!("date arithmetic: {self} + {n} days overflows"))
        })?;
        if serial < Self::MIN.0 || serial > Self::MAX.0 {
            return Err(Error::Date(format!(
                "date arithmetic: {self} + {n} days is out of range"
            )));
        }
        Ok(Date(serial))
    }

    /// Return the number of calendar days between `self` and `other`.
    /// Positive if `other > self`.
    pub fn days_between(self, other: Date) -> i32 {
        other.0 - self.0
    }

    /// Return the first day of the month containing this date.
    pub fn start_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, 1))
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        let (y, m, _) = ymd_from_serial(self.0);
        Date(serial_from_ymd(y, m, days_in_month(y, m)))
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self == self.end_of_month()
    }

    /// First day of the week containing this date, for weeks starting on
    /// `first_day`.
    pub fn start_of_week(self, first_day: Weekday) -> Result<Self> {
        let back = (self.weekday().days_from_monday() as i32
            - first_day.days_from_monday() as i32)
            .rem_euclid(7);
        self.add_days(-back)
    }

    /// Last day of the week containing this date, for weeks starting on
    /// `first_day`.
    pub fn end_of_week(self, first_day: Weekday) -> Result<Self> {
        self.start_of_week(first_day)?.add_days(6)
    }

    // ── Formatting ────────────────────────────────────────────────────────────

    /// `YYYY-MM-DD`.
    pub fn to_iso_string(&self) -> String {
        let (y, m, d) = ymd_from_serial(self.0);
        format!("{y:04}-{m:02}-{d:02}")
    }

    /// `"MMMM D"`, e.g. `"January 26"`.
    pub fn format_long(&self) -> String {
        format!("{} {}", self.month_of_year().long_name(), self.day_of_month())
    }

    /// `"MMM D"`, e.g. `"Jan 26"`.
    pub fn format_short(&self) -> String {
        format!("{} {}", self.month_of_year().short_name(), self.day_of_month())
    }

    /// `"dddd, MMMM D"`, e.g. `"Friday, January 26"`.
    pub fn format_with_weekday(&self) -> String {
        format!("{}, {}", self.weekday().long_name(), self.format_long())
    }

    /// `"MMMM D, YYYY"`, e.g. `"January 26, 2024"`.
    pub fn format_full(&self) -> String {
        format!("{}, {}", self.format_long(), self.year())
    }
}

// ── Arithmetic operators ──────────────────────────────────────────────────────

impl std::ops::Add<i32> for Date {
    type Output = Self;
    fn add(self, rhs: i32) -> Self {
        self.add_days(rhs).expect("date addition overflow")
    }
}

impl std::ops::Sub<i32> for Date {
    type Output = Self;
    fn sub(self, rhs: i32) -> Self {
        self.add_days(-rhs).expect("date subtraction underflow")
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display / parsing / serde ─────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_iso_string())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.to_iso_string())
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_iso(s)
    }
}

impl Serialize for Date {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Date::parse_iso(&s).map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a serial number.
///
/// Serial 1 = 1900-01-01.
pub(crate) fn serial_from_ymd(year: u16, month: u8, day: u8) -> i32 {
    let y = year as i32;
    let m = month as i32;
    let d = day as i32;

    // Days in whole years 1900..year, plus the leap days among them
    // (1900 itself is not a leap year).
    let mut serial = (y - 1900) * 365;
    serial += (y - 1901) / 4 - (y - 1901) / 100 + (y - 1601) / 400;
    serial += MONTH_OFFSET[m as usize - 1] as i32;
    if m > 2 && is_leap_year(year) {
        serial += 1;
    }
    serial + d
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    let mut y = (serial / 365 + 1900) as u16;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(y, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (y, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
