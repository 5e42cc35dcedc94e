//! `BridgeDayDetector`: working days worth taking off.
//!
//! A bridge day is a working day that, taken as leave, joins two off
//! periods. Only bridges of one or two working days are recognised; a
//! longer gap is never bridged.

use serde::{Deserialize, Serialize};

use lw_time::{Calendar, Date};

/// Which bridge rule a suggested day satisfies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BridgeKind {
    /// The day before and the day after are off.
    Single,
    /// First of two working days between off periods: the day before and
    /// the day after next are off.
    FirstOfTwo,
    /// Second of two working days between off periods: the day before
    /// yesterday and the day after are off.
    SecondOfTwo,
}

/// Detects bridge days on any [`Calendar`].
#[derive(Debug, Clone, Copy)]
pub struct BridgeDayDetector<'a> {
    calendar: &'a dyn Calendar,
}

impl<'a> BridgeDayDetector<'a> {
    /// Detector over `calendar`'s off days.
    pub fn new(calendar: &'a dyn Calendar) -> Self {
        Self { calendar }
    }

    /// Off-day test `offset` days away from `date`. Dates outside the
    /// supported range are not off.
    fn off(&self, date: Date, offset: i32) -> bool {
        date.add_days(offset)
            .map(|d| self.calendar.is_off_day(d))
            .unwrap_or(false)
    }

    /// The bridge rule `date` satisfies, if any. Always `None` for an off
    /// day.
    pub fn bridge_kind(&self, date: Date) -> Option<BridgeKind> {
        if self.calendar.is_off_day(date) {
            return None;
        }
        let before = self.off(date, -1);
        let after = self.off(date, 1);
        if before && after {
            Some(BridgeKind::Single)
        } else if before && self.off(date, 2) {
            Some(BridgeKind::FirstOfTwo)
        } else if after && self.off(date, -2) {
            Some(BridgeKind::SecondOfTwo)
        } else {
            None
        }
    }

    /// Return `true` if `date` is a suggested day off.
    pub fn is_suggested_day_off(&self, date: Date) -> bool {
        self.bridge_kind(date).is_some()
    }
}
