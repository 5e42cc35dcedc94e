//! Holiday feed integration tests.

use lw_holidays::{parse_holiday_feed, DropReason, HolidayCalendar, HolidayType};
use lw_time::{Calendar, Date, WeekendSet, YearMonth};

const INDIA_2025: &str = "\
Date,Name,Type
26 Jan,Republic Day,Gazetted Holiday
14 Jan,Makar Sankranti,Restricted Holiday
14 Mar,Holi,Gazetted Holiday
15 Aug,Independence Day,Gazetted Holiday
16 Aug,Janmashtami,Restricted Holiday
2 Oct,Gandhi Jayanti,Gazetted Holiday
2 Oct,Dussehra,Gazetted Holiday
25 Dec,Christmas,Gazetted Holiday
29 Feb,Leap Day Fair,Restricted Holiday
";

fn ymd(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn full_feed_loads() {
    let report = parse_holiday_feed(INDIA_2025).unwrap();
    assert_eq!(report.accepted(), 9);
    assert!(report.dropped.is_empty());

    let store = &report.store;
    assert!(store.is_confirmed_holiday(ymd(2025, 8, 15)));
    assert!(store.is_confirmed_holiday(ymd(2031, 8, 15)));
    assert!(!store.is_confirmed_holiday(ymd(2025, 8, 16)));
    assert_eq!(
        store.holiday_on(ymd(2025, 8, 16)).map(|h| h.kind()),
        Some(HolidayType::Restricted)
    );
}

#[test]
fn shared_dates_keep_feed_order() {
    let report = parse_holiday_feed(INDIA_2025).unwrap();
    let names: Vec<&str> = report
        .store
        .holidays_on(ymd(2025, 10, 2))
        .map(|h| h.name())
        .collect();
    assert_eq!(names, vec!["Gandhi Jayanti", "Dussehra"]);
}

#[test]
fn leap_day_holiday_only_in_leap_years() {
    let report = parse_holiday_feed(INDIA_2025).unwrap();
    assert!(report.store.holiday_on(ymd(2024, 2, 29)).is_some());
    assert!(report.store.holiday_on(ymd(2025, 2, 28)).is_none());
    assert!(report.store.holiday_on(ymd(2025, 3, 1)).is_none());
}

#[test]
fn month_listing() {
    let report = parse_holiday_feed(INDIA_2025).unwrap();
    let august = YearMonth::new(2025, 8).unwrap();
    let listed: Vec<(Date, &str)> = report
        .store
        .in_month(august)
        .into_iter()
        .map(|(d, h)| (d, h.name()))
        .collect();
    assert_eq!(
        listed,
        vec![
            (ymd(2025, 8, 15), "Independence Day"),
            (ymd(2025, 8, 16), "Janmashtami"),
        ]
    );
}

#[test]
fn unknown_labels_are_not_days_off() {
    let report = parse_holiday_feed(
        "Date,Name,Type\n\
         1 May,Labour Day,Bank Holiday\n\
         1 Jun,Founders Day, gazetted holiday \n",
    )
    .unwrap();
    assert!(!report.store.is_confirmed_holiday(ymd(2025, 5, 1)));
    assert!(report.store.is_confirmed_holiday(ymd(2025, 6, 1)));
}

#[test]
fn names_and_dates_are_trimmed() {
    let report = parse_holiday_feed("Date,Name,Type\n  15 Aug ,  Independence Day  ,Gazetted Holiday\n")
        .unwrap();
    assert_eq!(report.store.holidays()[0].name(), "Independence Day");
}

#[test]
fn bad_rows_are_reported_with_lines() {
    let report = parse_holiday_feed(
        "Date,Name,Type\n\
         26 Jan,Republic Day,Gazetted Holiday\n\
         1 May,,Gazetted Holiday\n\
         31 Feb,Impossible,Gazetted Holiday\n",
    )
    .unwrap();
    assert_eq!(report.accepted(), 1);
    assert_eq!(report.dropped.len(), 2);
    assert_eq!(report.dropped[0].line, 3);
    assert_eq!(report.dropped[1].line, 4);
    assert_eq!(
        report.dropped[1].reason,
        DropReason::UnparsableDate("31 Feb".into())
    );
}

#[test]
fn calendar_over_feed() {
    let report = parse_holiday_feed(INDIA_2025).unwrap();
    let cal = HolidayCalendar::new("India", report.store, WeekendSet::SATURDAY_SUNDAY);
    // Friday, gazetted.
    assert!(cal.is_off_day(ymd(2025, 8, 15)));
    // Saturday, restricted: off as a weekend only.
    assert!(cal.is_off_day(ymd(2025, 8, 16)));
    assert!(!cal.is_holiday(ymd(2025, 8, 16)));
    // Thursday with two gazetted holidays.
    assert!(cal.is_holiday(ymd(2025, 10, 2)));
    assert!(cal.is_workday(ymd(2025, 10, 3)));
}

mod properties {
    use super::*;
    use proptest::prelude::*;

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    proptest! {
        #[test]
        fn valid_rows_are_kept(
            rows in prop::collection::vec(
                (0usize..12, 1u8..=28, "[A-Za-z][A-Za-z ]{0,20}", any::<bool>()),
                0..20,
            )
        ) {
            let mut text = String::from("Date,Name,Type\n");
            for (m, d, name, gazetted) in &rows {
                let label = if *gazetted { "Gazetted Holiday" } else { "Restricted Holiday" };
                text.push_str(&format!("{d} {},{name},{label}\n", MONTHS[*m]));
            }
            let report = parse_holiday_feed(&text).unwrap();
            prop_assert_eq!(report.accepted(), rows.len());
            prop_assert!(report.dropped.is_empty());
            for (h, (m, d, name, gazetted)) in report.store.holidays().iter().zip(&rows) {
                prop_assert_eq!(h.date().month(), *m as u8 + 1);
                prop_assert_eq!(h.date().day(), *d);
                prop_assert_eq!(h.name(), name.trim());
                prop_assert_eq!(h.is_confirmed(), *gazetted);
            }
        }
    }
}
