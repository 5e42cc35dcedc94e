//! `Weekday`: day-of-week enum.

use serde::{Deserialize, Serialize};

/// Day of the week.
///
/// Variants are numbered 1–7 (Monday = 1, Sunday = 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
    /// Sunday (7).
    Sunday = 7,
}

impl Weekday {
    /// All weekdays, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Construct from the ordinal (1 = Monday … 7 = Sunday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1..=7 => Some(Self::ALL[n as usize - 1]),
            _ => None,
        }
    }

    /// Return the ordinal (1 = Monday … 7 = Sunday).
    pub fn ordinal(&self) -> u8 {
        *self as u8
    }

    /// Zero-based offset from Monday (Monday = 0 … Sunday = 6).
    pub fn days_from_monday(&self) -> u8 {
        self.ordinal() - 1
    }

    /// The following day of the week (Sunday wraps to Monday).
    pub fn succ(&self) -> Self {
        Self::ALL[(self.days_from_monday() as usize + 1) % 7]
    }

    /// The preceding day of the week (Monday wraps to Sunday).
    pub fn pred(&self) -> Self {
        Self::ALL[(self.days_from_monday() as usize + 6) % 7]
    }

    /// Full English name (`"Monday"`).
    pub fn long_name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Three-letter abbreviation (`"Mon"`), as used for grid headers.
    pub fn short_name(&self) -> &'static str {
        &self.long_name()[..3]
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.long_name())
    }
}
