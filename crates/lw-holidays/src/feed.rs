//! CSV holiday feed reader.
//!
//! The feed is a table with a header row naming (at least) the columns
//! `Date`, `Name` and `Type`, e.g.
//!
//! ```text
//! Date,Name,Type
//! 26 Jan,Republic Day,Gazetted Holiday
//! 14 Jan,Makar Sankranti,Restricted Holiday
//! ```
//!
//! Dates carry no year: every holiday recurs annually. Individual bad rows
//! are dropped and reported; only a feed that cannot be read as a whole is
//! an error.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use lw_core::errors::{Error, Result};
use lw_time::MonthDay;
use tracing::{debug, info, warn};

use crate::holiday::{Holiday, HolidayType};
use crate::store::HolidayStore;

/// Why a feed row was dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropReason {
    /// A required column is absent or blank in this row.
    MissingField(&'static str),
    /// The `Date` value is not a day and month.
    UnparsableDate(String),
}

impl std::fmt::Display for DropReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DropReason::MissingField(column) => write!(f, "missing {column}"),
            DropReason::UnparsableDate(value) => write!(f, "unparsable date {value:?}"),
        }
    }
}

/// A row that did not make it into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedRow {
    /// 1-based line number in the input.
    pub line: u64,
    /// Why it was dropped.
    pub reason: DropReason,
}

/// Outcome of reading a feed.
#[derive(Debug, Clone)]
pub struct FeedReport {
    /// The accepted holidays.
    pub store: HolidayStore,
    /// Rows that were dropped, in input order.
    pub dropped: Vec<DroppedRow>,
}

impl FeedReport {
    /// Number of accepted holidays.
    pub fn accepted(&self) -> usize {
        self.store.len()
    }
}

/// Positions of the required columns in the header row.
struct Columns {
    date: usize,
    name: usize,
    kind: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self> {
        let find = |wanted: &'static str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(wanted))
                .ok_or_else(|| Error::Feed(format!("header row has no `{wanted}` column")))
        };
        Ok(Columns {
            date: find("Date")?,
            name: find("Name")?,
            kind: find("Type")?,
        })
    }

    fn holiday(&self, record: &csv::StringRecord) -> std::result::Result<Holiday, DropReason> {
        let field = |idx: usize, column: &'static str| {
            record
                .get(idx)
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .ok_or(DropReason::MissingField(column))
        };
        let date = field(self.date, "Date")?;
        let name = field(self.name, "Name")?;
        let label = field(self.kind, "Type")?;

        let date = MonthDay::parse(date).map_err(|_| DropReason::UnparsableDate(date.to_owned()))?;
        let kind = HolidayType::from_label(label).ok_or(DropReason::MissingField("Type"))?;
        Ok(Holiday::new(date, name, kind))
    }
}

fn feed_error(err: csv::Error) -> Error {
    Error::Feed(err.to_string())
}

/// Read a holiday feed from any reader.
///
/// # Errors
/// Returns [`Error::Feed`] if the input cannot be read, is not valid CSV or
/// UTF-8, or its header row lacks one of the required columns. An empty
/// input yields an empty store.
pub fn read_holiday_feed<R: Read>(reader: R) -> Result<FeedReport> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = rdr.headers().map_err(feed_error)?.clone();
    if headers.iter().all(|h| h.trim().is_empty()) {
        warn!("holiday feed is empty");
        return Ok(FeedReport {
            store: HolidayStore::empty(),
            dropped: Vec::new(),
        });
    }
    let columns = Columns::locate(&headers)?;

    let mut holidays = Vec::new();
    let mut dropped = Vec::new();
    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(feed_error)?;
        // Header is line 1; fall back to the record count if the reader has
        // no position information.
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(i as u64 + 2);
        match columns.holiday(&record) {
            Ok(holiday) => holidays.push(holiday),
            Err(reason) => {
                debug!(line, %reason, "dropping holiday row");
                dropped.push(DroppedRow { line, reason });
            }
        }
    }

    if holidays.is_empty() {
        warn!(dropped = dropped.len(), "holiday feed has no usable rows");
    } else {
        info!(
            accepted = holidays.len(),
            dropped = dropped.len(),
            "holiday feed loaded"
        );
    }

    Ok(FeedReport {
        store: HolidayStore::new(holidays),
        dropped,
    })
}

/// Read a holiday feed from an in-memory string.
pub fn parse_holiday_feed(text: &str) -> Result<FeedReport> {
    read_holiday_feed(text.as_bytes())
}

/// Read a holiday feed from a file.
pub fn read_holiday_feed_from_path<P: AsRef<Path>>(path: P) -> Result<FeedReport> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|err| Error::Feed(format!("cannot open {}: {err}", path.display())))?;
    read_holiday_feed(file)
}
