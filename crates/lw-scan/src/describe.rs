//! Plain-text descriptions of runs.

use crate::run::Run;

/// Describe a run:
///
/// ```text
/// October 2 - October 5
/// 4 days off
///
/// Holidays:
/// October 2 - Gandhi Jayanti
///
/// Suggested days to take off:
/// Friday, October 3
/// ```
///
/// The holiday and suggested-day sections are left out when empty.
pub fn describe(run: &Run) -> String {
    let mut text = format!(
        "{} - {}\n{} days off",
        run.start().format_long(),
        run.end().format_long(),
        run.len()
    );

    let mut holidays = run.holidays().peekable();
    if holidays.peek().is_some() {
        text.push_str("\n\nHolidays:");
        for (date, holiday) in holidays {
            text.push_str(&format!("\n{} - {}", date.format_long(), holiday.name()));
        }
    }

    let mut suggested = run.suggested_days().peekable();
    if suggested.peek().is_some() {
        text.push_str("\n\nSuggested days to take off:");
        for date in suggested {
            text.push('\n');
            text.push_str(&date.format_with_weekday());
        }
    }

    text
}

/// Describe several runs, separated by blank lines.
pub fn describe_all(runs: &[Run]) -> String {
    runs.iter().map(describe).collect::<Vec<_>>().join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ScanConfig;
    use crate::scanner::LongWeekendScanner;
    use lw_holidays::{Holiday, HolidayStore};
    use lw_time::{MonthDay, YearMonth};

    fn runs_for(store: &HolidayStore, year: u16, month: u8) -> Vec<Run> {
        let cfg = ScanConfig::default();
        LongWeekendScanner::new(store, &cfg)
            .unwrap()
            .find_long_weekends(YearMonth::new(year, month).unwrap())
            .unwrap()
    }

    #[test]
    fn holiday_and_bridge() {
        let store = HolidayStore::new([Holiday::gazetted(
            MonthDay::new(10, 2).unwrap(),
            "Gandhi Jayanti",
        )]);
        let runs = runs_for(&store, 2025, 10);
        assert_eq!(
            describe(&runs[0]),
            "October 2 - October 5\n\
             4 days off\n\
             \n\
             Holidays:\n\
             October 2 - Gandhi Jayanti\n\
             \n\
             Suggested days to take off:\n\
             Friday, October 3"
        );
    }

    #[test]
    fn no_suggested_section() {
        // Friday holiday: Fri..Sun without leave.
        let store = HolidayStore::new([Holiday::gazetted(
            MonthDay::new(8, 15).unwrap(),
            "Independence Day",
        )]);
        let runs = runs_for(&store, 2025, 8);
        assert_eq!(
            describe(&runs[0]),
            "August 15 - August 17\n3 days off\n\nHolidays:\nAugust 15 - Independence Day"
        );
    }

    #[test]
    fn restricted_holidays_are_listed() {
        let store = HolidayStore::new([
            Holiday::gazetted(MonthDay::new(8, 15).unwrap(), "Independence Day"),
            Holiday::restricted(MonthDay::new(8, 16).unwrap(), "Janmashtami"),
        ]);
        let runs = runs_for(&store, 2025, 8);
        let text = describe(&runs[0]);
        assert!(text.ends_with("August 15 - Independence Day\nAugust 16 - Janmashtami"));
    }

    #[test]
    fn several_runs() {
        let store = HolidayStore::new([
            Holiday::gazetted(MonthDay::new(8, 15).unwrap(), "Independence Day"),
            Holiday::gazetted(MonthDay::new(8, 25).unwrap(), "Onam"),
        ]);
        let runs = runs_for(&store, 2025, 8);
        assert_eq!(runs.len(), 2);
        let text = describe_all(&runs);
        assert!(text.starts_with("August 15 - August 17\n"));
        assert!(text.contains("\n\nAugust 23 - August 25\n3 days off"));
    }
}
