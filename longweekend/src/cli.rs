//! Argument handling and output of the `longweekend` binary.

use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use lw_holidays::read_holiday_feed_from_path;
use lw_scan::{describe_all, LongWeekendPlanner, ScanConfig};
use lw_time::YearMonth;

/// Find long weekends and the days worth taking off around them.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Holiday feed (CSV with Date, Name and Type columns)
    pub feed: PathBuf,

    /// Month to scan, as YYYY-MM
    #[arg(value_parser = parse_month)]
    pub month: YearMonth,

    /// JSON file with scanner settings
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print run summaries as JSON
    #[arg(long)]
    pub json: bool,
}

fn parse_month(s: &str) -> Result<YearMonth, String> {
    YearMonth::parse(s).map_err(|e| e.to_string())
}

/// Load the settings named on the command line, or the defaults.
pub fn load_config(args: &Args) -> anyhow::Result<ScanConfig> {
    let Some(path) = &args.config else {
        return Ok(ScanConfig::default());
    };
    let file = File::open(path).with_context(|| format!("cannot open {}", path.display()))?;
    ScanConfig::from_json_reader(file).with_context(|| format!("loading {}", path.display()))
}

/// Write the long weekends of `month` to `out`.
pub fn render<W: Write>(
    planner: &LongWeekendPlanner,
    month: YearMonth,
    json: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if json {
        let view = planner.month_view(month)?;
        serde_json::to_writer_pretty(&mut *out, view.runs())?;
        writeln!(out)?;
        return Ok(());
    }

    let runs = planner.runs(month)?;
    if runs.is_empty() {
        writeln!(out, "No long weekends in {month}")?;
    } else {
        writeln!(out, "{}", describe_all(&runs))?;
    }
    Ok(())
}

/// Run the whole program.
pub fn run<W: Write>(args: &Args, out: &mut W) -> anyhow::Result<()> {
    let config = load_config(args)?;
    let report = read_holiday_feed_from_path(&args.feed)
        .with_context(|| format!("loading holidays from {}", args.feed.display()))?;
    tracing::info!(
        accepted = report.accepted(),
        dropped = report.dropped.len(),
        month = %args.month,
        "scanning"
    );
    let planner = LongWeekendPlanner::new(report.store, config)?;
    render(&planner, args.month, args.json, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lw_holidays::parse_holiday_feed;

    fn args(list: &[&str]) -> Result<Args, clap::Error> {
        Args::try_parse_from(std::iter::once("longweekend").chain(list.iter().copied()))
    }

    fn planner(rows: &str) -> LongWeekendPlanner {
        let feed = parse_holiday_feed(&format!("Date,Name,Type\n{rows}")).unwrap();
        LongWeekendPlanner::new(feed.store, ScanConfig::default()).unwrap()
    }

    fn rendered(planner: &LongWeekendPlanner, month: &str, json: bool) -> String {
        let mut out = Vec::new();
        render(planner, YearMonth::parse(month).unwrap(), json, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parses_arguments() {
        let a = args(&["holidays.csv", "2025-10"]).unwrap();
        assert_eq!(a.feed, PathBuf::from("holidays.csv"));
        assert_eq!(a.month, YearMonth::new(2025, 10).unwrap());
        assert_eq!(a.config, None);
        assert!(!a.json);

        let a = args(&["--json", "h.csv", "--config", "cfg.json", "2025-1"]).unwrap();
        assert!(a.json);
        assert_eq!(a.config, Some(PathBuf::from("cfg.json")));
        assert_eq!(a.month, YearMonth::new(2025, 1).unwrap());
    }

    #[test]
    fn rejects_bad_arguments() {
        assert!(args(&["h.csv"]).is_err());
        assert!(args(&["h.csv", "2025-10", "extra"]).is_err());
        assert!(args(&["h.csv", "October"]).is_err());
        assert!(args(&["h.csv", "2025-10", "--config"]).is_err());
        assert!(args(&["h.csv", "2025-10", "--verbose"]).is_err());
        assert!(args(&["h.csv", "2025-13"]).is_err());
        assert!(args(&[]).is_err());
    }

    #[test]
    fn help_and_version_are_reported_as_errors() {
        let err = args(&["--help"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
        let err = args(&["--version"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn text_output() {
        let p = planner("2 Oct,Gandhi Jayanti,Gazetted Holiday\n");
        let text = rendered(&p, "2025-10", false);
        assert!(text.starts_with("October 2 - October 5\n4 days off\n"));
        assert!(text.ends_with("Friday, October 3\n"));
        assert_eq!(rendered(&p, "2025-03", false), "No long weekends in March 2025\n");
    }

    #[test]
    fn json_output() {
        let p = planner("2 Oct,Gandhi Jayanti,Gazetted Holiday\n");
        let value: serde_json::Value = serde_json::from_str(&rendered(&p, "2025-10", true)).unwrap();
        assert_eq!(value[0]["start"], "2025-10-02");
        assert_eq!(value[0]["end"], "2025-10-05");
        assert_eq!(value[0]["days"], 4);
        assert_eq!(value[0]["holidays"][0][1], "Gandhi Jayanti");
        assert_eq!(value[0]["suggested_days"][0], "2025-10-03");
        assert_eq!(rendered(&p, "2025-03", true).trim(), "[]");
    }

    #[test]
    fn missing_feed_fails() {
        let a = args(&["/nonexistent/holidays.csv", "2025-10"]).unwrap();
        let mut out = Vec::new();
        assert!(run(&a, &mut out).is_err());
        assert!(out.is_empty());
    }
}
