//! Timestamp helpers for the search form and descriptor rendering

use std::str::FromStr;

use chrono::{DateTime, Local, NaiveDateTime, TimeZone, Utc};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::shared::constants::{INVALID_DATE, TIMESTAMP_FORMAT, UTC_DATE_FORMAT};
use crate::shared::errors::{BrowserError, Result};

static TIMESTAMP_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}$").expect("timestamp pattern is valid"));

/// Timezone in which form timestamps are written and read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeBasis {
    #[default]
    Local,
    Utc,
}

impl TimeBasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeBasis::Local => "local",
            TimeBasis::Utc => "utc",
        }
    }
}

impl FromStr for TimeBasis {
    type Err = BrowserError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(TimeBasis::Local),
            "utc" => Ok(TimeBasis::Utc),
            _ => Err(BrowserError::Config(format!("Unknown time basis: {}", s))),
        }
    }
}

/// True when `input` has the exact `YYYY-MM-DD HH:mm` shape
pub fn is_timestamp_format(input: &str) -> bool {
    TIMESTAMP_PATTERN.is_match(input)
}

/// Format an instant for the form's timestamp field
pub fn format_timestamp(instant: DateTime<Utc>, basis: TimeBasis) -> String {
    match basis {
        TimeBasis::Local => instant.with_timezone(&Local).format(TIMESTAMP_FORMAT).to_string(),
        TimeBasis::Utc => instant.format(TIMESTAMP_FORMAT).to_string(),
    }
}

/// Parse a form timestamp into epoch milliseconds
pub fn parse_timestamp(input: &str, basis: TimeBasis) -> Result<i64> {
    let trimmed = input.trim();
    if !is_timestamp_format(trimmed) {
        return Err(BrowserError::invalid_timestamp(input, None));
    }
    let naive = NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT)
        .map_err(|e| BrowserError::invalid_timestamp(input, Some(e)))?;

    match basis {
        TimeBasis::Utc => Ok(naive.and_utc().timestamp_millis()),
        // Ambiguous wall-clock times (DST fall back) resolve to the earlier instant
        TimeBasis::Local => Local
            .from_local_datetime(&naive)
            .earliest()
            .map(|dt| dt.timestamp_millis())
            .ok_or_else(|| BrowserError::NonexistentLocalTime(input.to_string())),
    }
}

/// Render epoch milliseconds as a UTC date string, e.g. `Thu, 01 Jan 1970 00:00:00 GMT`
pub fn to_date_string(timestamp: i64) -> String {
    match DateTime::from_timestamp_millis(timestamp) {
        Some(dt) => dt.format(UTC_DATE_FORMAT).to_string(),
        None => INVALID_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_date_string_epoch() {
        assert_eq!(to_date_string(0), "Thu, 01 Jan 1970 00:00:00 GMT");
    }

    #[test]
    fn test_to_date_string_recent() {
        assert_eq!(to_date_string(1_700_000_000_000), "Tue, 14 Nov 2023 22:13:20 GMT");
    }

    #[test]
    fn test_to_date_string_out_of_range() {
        assert_eq!(to_date_string(i64::MAX), "Invalid Date");
    }

    #[test]
    fn test_parse_timestamp_utc() {
        let millis = parse_timestamp("2023-01-15 10:30", TimeBasis::Utc).unwrap();
        assert_eq!(millis, 1_673_778_600_000);
    }

    #[test]
    fn test_parse_timestamp_local_matches_chrono() {
        let naive = NaiveDateTime::parse_from_str("2023-01-15 10:30", TIMESTAMP_FORMAT).unwrap();
        let expected = Local.from_local_datetime(&naive).earliest().unwrap().timestamp_millis();
        assert_eq!(parse_timestamp("2023-01-15 10:30", TimeBasis::Local).unwrap(), expected);
    }

    #[test]
    fn test_parse_timestamp_rejects_garbage() {
        let err = parse_timestamp("yesterday", TimeBasis::Utc).unwrap_err();
        assert!(matches!(err, BrowserError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_parse_timestamp_requires_padded_shape() {
        for input in ["2023-1-5 1:3", "2023-01-15 10:3", "2023-01-15T10:30"] {
            let err = parse_timestamp(input, TimeBasis::Utc).unwrap_err();
            assert!(matches!(err, BrowserError::InvalidTimestamp { source: None, .. }), "{input}");
        }
        assert!(parse_timestamp(" 2023-01-15 10:30 ", TimeBasis::Utc).is_ok());
    }

    #[test]
    fn test_parse_timestamp_rejects_impossible_date() {
        let err = parse_timestamp("2023-02-30 10:30", TimeBasis::Utc).unwrap_err();
        assert!(matches!(err, BrowserError::InvalidTimestamp { source: Some(_), .. }));
    }

    #[test]
    fn test_format_then_parse_is_minute_precise() {
        let instant = DateTime::from_timestamp(1_709_251_140, 0).unwrap();
        let formatted = format_timestamp(instant, TimeBasis::Utc);
        assert_eq!(formatted, "2024-02-29 23:59");
        assert_eq!(parse_timestamp(&formatted, TimeBasis::Utc).unwrap(), 1_709_251_140_000);
    }

    #[test]
    fn test_formatted_now_has_form_shape() {
        assert!(is_timestamp_format(&format_timestamp(Utc::now(), TimeBasis::Local)));
        assert!(is_timestamp_format(&format_timestamp(Utc::now(), TimeBasis::Utc)));
        assert!(!is_timestamp_format("2023-1-15 10:30"));
        assert!(!is_timestamp_format("2023-01-15T10:30"));
    }

    #[test]
    fn test_time_basis_from_str() {
        assert_eq!("UTC".parse::<TimeBasis>().unwrap(), TimeBasis::Utc);
        assert_eq!("local".parse::<TimeBasis>().unwrap(), TimeBasis::Local);
        assert!("mars".parse::<TimeBasis>().is_err());
    }
}
