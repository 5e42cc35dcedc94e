//! `Holiday` and `HolidayType`.

use serde::{Deserialize, Serialize};

use lw_time::{Date, MonthDay};

/// Whether a holiday is an actual day off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HolidayType {
    /// A gazetted holiday: everyone gets the day off.
    Gazetted,
    /// A restricted (optional) holiday: listed, but not a day off.
    Restricted,
}

impl HolidayType {
    /// Feed label of gazetted holidays.
    pub const GAZETTED_LABEL: &'static str = "Gazetted Holiday";

    /// Feed label of restricted holidays.
    pub const RESTRICTED_LABEL: &'static str = "Restricted Holiday";

    /// Interpret a feed label.
    ///
    /// Only a gazetted label makes a holiday a day off; every other
    /// non-empty label is read as restricted. Returns `None` for a blank
    /// label.
    pub fn from_label(label: &str) -> Option<Self> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        if label.eq_ignore_ascii_case(Self::GAZETTED_LABEL) || label.eq_ignore_ascii_case("Gazetted")
        {
            Some(HolidayType::Gazetted)
        } else {
            Some(HolidayType::Restricted)
        }
    }

    /// The feed label for this type.
    pub fn label(&self) -> &'static str {
        match self {
            HolidayType::Gazetted => Self::GAZETTED_LABEL,
            HolidayType::Restricted => Self::RESTRICTED_LABEL,
        }
    }
}

impl std::fmt::Display for HolidayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// An annually recurring holiday.
///
/// Immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Holiday {
    date: MonthDay,
    name: String,
    kind: HolidayType,
}

impl Holiday {
    /// Create a holiday; surrounding whitespace is trimmed from `name`.
    pub fn new(date: MonthDay, name: impl AsRef<str>, kind: HolidayType) -> Self {
        Self {
            date,
            name: name.as_ref().trim().to_owned(),
            kind,
        }
    }

    /// Shorthand for a gazetted holiday.
    pub fn gazetted(date: MonthDay, name: impl AsRef<str>) -> Self {
        Self::new(date, name, HolidayType::Gazetted)
    }

    /// Shorthand for a restricted holiday.
    pub fn restricted(date: MonthDay, name: impl AsRef<str>) -> Self {
        Self::new(date, name, HolidayType::Restricted)
    }

    /// The recurring month and day.
    pub fn date(&self) -> MonthDay {
        self.date
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gazetted or restricted.
    pub fn kind(&self) -> HolidayType {
        self.kind
    }

    /// `true` iff the holiday is gazetted, i.e. an actual day off.
    pub fn is_confirmed(&self) -> bool {
        self.kind == HolidayType::Gazetted
    }

    /// Return `true` if the holiday recurs on `date`.
    pub fn falls_on(&self, date: Date) -> bool {
        self.date.matches(date)
    }
}
