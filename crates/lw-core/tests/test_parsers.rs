//! Integration tests for the text parsers used by holiday feeds and the
//! command-line front end.

use lw_core::utilities::data_parsers::{parse_day_month, parse_month_name, parse_year_month};
use proptest::prelude::*;

const SHORT: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[test]
fn feed_style_dates() {
    // Shapes seen in published gazetted holiday lists.
    let cases = [
        ("26 Jan", (1, 26)),
        ("14 Apr", (4, 14)),
        ("1 May", (5, 1)),
        ("15 Aug", (8, 15)),
        ("2 Oct", (10, 2)),
        ("25 Dec", (12, 25)),
    ];
    for (text, expected) in cases {
        assert_eq!(parse_day_month(text), Some(expected), "parsing {text:?}");
    }
}

#[test]
fn every_short_month_name_parses() {
    for (idx, name) in SHORT.iter().enumerate() {
        assert_eq!(parse_month_name(name), Some(idx as u8 + 1));
        assert_eq!(parse_month_name(&name.to_uppercase()), Some(idx as u8 + 1));
    }
}

proptest! {
    #[test]
    fn day_month_parser_never_panics(s in "\\PC{0,24}") {
        let _ = parse_day_month(&s);
        let _ = parse_year_month(&s);
    }

    #[test]
    fn parsed_day_month_is_in_range(s in "[0-9]{1,2} [A-Za-z]{3,9}") {
        if let Some((month, day)) = parse_day_month(&s) {
            prop_assert!((1..=12).contains(&month));
            prop_assert!((1..=31).contains(&day));
        }
    }
}
