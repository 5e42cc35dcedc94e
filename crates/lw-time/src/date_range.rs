//! `DateRange`: an inclusive span of consecutive calendar dates.

use crate::date::Date;

/// The inclusive range `[start, end]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    start: Date,
    end: Date,
}

impl DateRange {
    /// Create a range; the endpoints are swapped if given in reverse order.
    pub fn new(d1: Date, d2: Date) -> Self {
        if d1 > d2 {
            DateRange { start: d2, end: d1 }
        } else {
            DateRange { start: d1, end: d2 }
        }
    }

    /// First date of the range.
    pub fn start(&self) -> Date {
        self.start
    }

    /// Last date of the range.
    pub fn end(&self) -> Date {
        self.end
    }

    /// Number of dates in the range (always at least 1).
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    /// Always `false`: a range holds at least its start date.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Return `true` if `date` lies within the range.
    pub fn contains(&self, date: Date) -> bool {
        date >= self.start && date <= self.end
    }

    /// Iterate over the dates of the range in order.
    pub fn iter(&self) -> DateRangeIter {
        DateRangeIter {
            next: Some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = Date;
    type IntoIter = DateRangeIter;

    fn into_iter(self) -> DateRangeIter {
        self.iter()
    }
}

/// Iterator over the dates of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct DateRangeIter {
    next: Option<Date>,
    end: Date,
}

impl Iterator for DateRangeIter {
    type Item = Date;

    fn next(&mut self) -> Option<Date> {
        let current = self.next?;
        if current > self.end {
            self.next = None;
            return None;
        }
        // `add_days` fails only past Date::MAX, which also ends the range.
        self.next = current.add_days(1).ok();
        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn iterates_inclusively() {
        let range = DateRange::new(date(2024, 2, 27), date(2024, 3, 2));
        let dates: Vec<Date> = range.iter().collect();
        assert_eq!(dates.len(), 5);
        assert_eq!(range.len(), 5);
        assert_eq!(dates[2], date(2024, 2, 29));
        assert_eq!(dates[4], date(2024, 3, 2));
    }

    #[test]
    fn reversed_endpoints() {
        let range = DateRange::new(date(2024, 3, 2), date(2024, 3, 1));
        assert_eq!(range.start(), date(2024, 3, 1));
        assert!(range.contains(date(2024, 3, 2)));
        assert!(!range.contains(date(2024, 3, 3)));
    }

    #[test]
    fn ends_at_max_date() {
        let range = DateRange::new(Date::MAX - 1, Date::MAX);
        assert_eq!(range.iter().count(), 2);
    }
}
