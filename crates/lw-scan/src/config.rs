//! `ScanConfig`: explicit scanner settings.

use std::io::Read;

use serde::{Deserialize, Serialize};

use lw_core::ensure;
use lw_core::errors::{Error, Result};
use lw_time::{Weekday, WeekendSet};

/// How raw detections are turned into the returned runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DetectionMode {
    /// Collapse overlapping or touching detections into one maximal run.
    #[default]
    Maximal,
    /// Return every detection, one per qualifying start day. A single
    /// cluster of off days may show up several times.
    Overlapping,
}

/// Settings of a long-weekend scan.
///
/// Every field has a default, so a JSON document only needs the fields it
/// changes:
///
/// ```
/// use lw_scan::{DetectionMode, ScanConfig};
/// let cfg = ScanConfig::from_json_str(r#"{ "weekend": ["Friday", "Saturday"] }"#).unwrap();
/// assert_eq!(cfg.min_run_length, 3);
/// assert_eq!(cfg.mode, DetectionMode::Maximal);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Weekly rest days.
    pub weekend: WeekendSet,
    /// Minimum number of consecutive days off for a run to count.
    pub min_run_length: usize,
    /// Maximum number of days examined forward from each start day.
    pub look_ahead_days: u32,
    /// Days scanned before the first and after the last day of the month.
    pub padding_days: u32,
    /// First column of the month view.
    pub week_start: Weekday,
    /// Detection mode.
    pub mode: DetectionMode,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            weekend: WeekendSet::SATURDAY_SUNDAY,
            min_run_length: 3,
            look_ahead_days: 7,
            padding_days: 7,
            week_start: Weekday::Monday,
            mode: DetectionMode::Maximal,
        }
    }
}

impl ScanConfig {
    /// Upper bound of `look_ahead_days` and `padding_days`.
    pub const MAX_SPAN_DAYS: u32 = 366;

    /// Check the settings for consistency.
    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.min_run_length >= 1,
            "min_run_length must be at least 1"
        );
        ensure!(
            self.look_ahead_days >= 1,
            "look_ahead_days must be at least 1"
        );
        ensure!(
            self.look_ahead_days <= Self::MAX_SPAN_DAYS,
            "look_ahead_days must be at most {}, got {}",
            Self::MAX_SPAN_DAYS,
            self.look_ahead_days
        );
        ensure!(
            self.padding_days <= Self::MAX_SPAN_DAYS,
            "padding_days must be at most {}, got {}",
            Self::MAX_SPAN_DAYS,
            self.padding_days
        );
        ensure!(
            self.weekend.len() < 7,
            "weekend cannot cover the whole week"
        );
        Ok(())
    }

    /// Same settings with another detection mode.
    pub fn with_mode(mut self, mode: DetectionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Same settings with another weekend.
    pub fn with_weekend(mut self, weekend: WeekendSet) -> Self {
        self.weekend = weekend;
        self
    }

    /// Load and validate a JSON configuration document.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let config: ScanConfig =
            serde_json::from_reader(reader).map_err(|e| Error::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration string.
    pub fn from_json_str(text: &str) -> Result<Self> {
        Self::from_json_reader(text.as_bytes())
    }
}
