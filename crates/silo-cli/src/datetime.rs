//! Human-friendly datetime parsing for CLI arguments.
//!
//! Accepts RFC 3339, naive ISO timestamps, bare dates, and natural
//! language ("now", "1 day ago"). Naive input stays naive — localization
//! happens in the export client's epoch normalizer, not here.

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};
use interim::{Dialect, parse_date_string};
use silo_logdna::Timestamp;
use thiserror::Error;

#[derive(Debug, Error)]
#[error("could not parse date: {input:?}")]
pub struct DateParseError {
    pub input: String,
}

/// Parse a relative-or-absolute date string.
pub fn parse_human(input: &str) -> Result<Timestamp, DateParseError> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(input) {
        return Ok(dt.into());
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(input, format) {
            return Ok(naive.into());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).into());
    }
    parse_date_string(input, Local::now(), Dialect::Us)
        .map(Timestamp::from)
        .map_err(|_| DateParseError {
            input: input.to_string(),
        })
}
