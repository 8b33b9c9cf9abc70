//! Timestamp utilities
//!
//! Show start times travel as text in one fixed, timezone-less format.

use chrono::{Local, NaiveDateTime};

use crate::{Error, Result};

/// Wire format for `Show::start_time` (24-hour, no timezone)
pub const START_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Current local wall-clock time, comparable with parsed start times
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Parse a start time in the fixed `YYYY-MM-DD HH:MM:SS` format
///
/// Anything else (ISO-8601 `T` separator, timezone suffix, missing seconds)
/// is rejected with [`Error::MalformedTimestamp`].
pub fn parse_start_time(value: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, START_TIME_FORMAT)
        .map_err(|_| Error::MalformedTimestamp(value.to_string()))
}

/// Format an instant in the wire format
pub fn format_start_time(instant: &NaiveDateTime) -> String {
    instant.format(START_TIME_FORMAT).to_string()
}
