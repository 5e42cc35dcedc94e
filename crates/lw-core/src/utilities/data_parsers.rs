//! Data parsing helpers.
//!
//! Small, allocation-light parsers for the date shapes that reach the
//! library as text: recurring `"26 Jan"` style holiday dates, `YYYY-MM`
//! month identifiers, and ISO `YYYY-MM-DD` dates. They return `None` on
//! anything they do not understand; callers decide whether that is fatal.

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// Parse an English month name into its number (1–12).
///
/// Matching is case-insensitive and accepts the full name or any prefix of
/// at least three letters (`"Jan"`, `"Sept"`, `"december"`).
pub fn parse_month_name(s: &str) -> Option<u8> {
    let s = s.trim().trim_end_matches('.').to_ascii_lowercase();
    if s.len() < 3 {
        return None;
    }
    MONTH_NAMES
        .iter()
        .position(|name| name.starts_with(&s))
        .map(|idx| idx as u8 + 1)
}

/// Parse a year-less day-and-month string such as `"26 Jan"`,
/// `"26 January"`, `"26-Jan"` or `"Jan 26"`.
///
/// A trailing four-digit year (`"26 Jan 2025"`) is accepted and ignored: the
/// value describes an annually recurring date. The day is only checked to be
/// in `1..=31`.
///
/// Returns `(month, day)` on success.
pub fn parse_day_month(s: &str) -> Option<(u8, u8)> {
    let tokens: Vec<&str> = s
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/' || c == ',')
        .filter(|t| !t.is_empty())
        .collect();
    if !(2..=3).contains(&tokens.len()) {
        return None;
    }
    if let Some(year) = tokens.get(2) {
        if year.len() != 4 || !year.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
    }
    let (day, month) = match tokens[0].parse::<u8>() {
        Ok(day) => (day, parse_month_name(tokens[1])?),
        Err(_) => (tokens[1].parse::<u8>().ok()?, parse_month_name(tokens[0])?),
    };
    if !(1..=31).contains(&day) {
        return None;
    }
    Some((month, day))
}

/// Parse a month identifier in `YYYY-MM` format.
///
/// Returns `(year, month)` on success.
pub fn parse_year_month(s: &str) -> Option<(u16, u8)> {
    let (year, month) = s.trim().split_once('-')?;
    if year.len() != 4 || month.is_empty() || month.len() > 2 {
        return None;
    }
    let year: u16 = year.parse().ok()?;
    let month: u8 = month.parse().ok()?;
    if !(1..=12).contains(&month) {
        return None;
    }
    Some((year, month))
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    let s = s.trim();
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parts[0].parse().ok()?;
    let month: u8 = parts[1].parse().ok()?;
    let day: u8 = parts[2].parse().ok()?;
    Some((year, month, day))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_month_name() {
        assert_eq!(parse_month_name("Jan"), Some(1));
        assert_eq!(parse_month_name("january"), Some(1));
        assert_eq!(parse_month_name("SEPT"), Some(9));
        assert_eq!(parse_month_name("Dec."), Some(12));
        assert_eq!(parse_month_name("Ju"), None);
        assert_eq!(parse_month_name("Juno"), None);
    }

    #[test]
    fn test_parse_day_month() {
        assert_eq!(parse_day_month("26 Jan"), Some((1, 26)));
        assert_eq!(parse_day_month(" 15 August "), Some((8, 15)));
        assert_eq!(parse_day_month("2-Oct"), Some((10, 2)));
        assert_eq!(parse_day_month("Dec 25"), Some((12, 25)));
        assert_eq!(parse_day_month("25 Dec 2024"), Some((12, 25)));
        assert_eq!(parse_day_month("29 Feb"), Some((2, 29)));
    }

    #[test]
    fn test_parse_day_month_rejects_garbage() {
        assert_eq!(parse_day_month(""), None);
        assert_eq!(parse_day_month("26"), None);
        assert_eq!(parse_day_month("0 Jan"), None);
        assert_eq!(parse_day_month("32 Jan"), None);
        assert_eq!(parse_day_month("26 Foo"), None);
        assert_eq!(parse_day_month("26 Jan twenty"), None);
        assert_eq!(parse_day_month("TBD"), None);
    }

    #[test]
    fn test_parse_year_month() {
        assert_eq!(parse_year_month("2025-03"), Some((2025, 3)));
        assert_eq!(parse_year_month("2025-3"), Some((2025, 3)));
        assert_eq!(parse_year_month("2025-13"), None);
        assert_eq!(parse_year_month("25-03"), None);
        assert_eq!(parse_year_month("2025"), None);
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2023-06-15"), Some((2023, 6, 15)));
        assert_eq!(parse_iso_date("bad"), None);
    }
}
