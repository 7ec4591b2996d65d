//! Date helpers shared by the tracker and the journal.

use chrono::{DateTime, Local, NaiveDate, NaiveTime, Timelike};

use crate::error::{DaysError, Result};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` calendar date
pub fn parse_date(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, DATE_FORMAT)
        .map_err(|_| DaysError::InvalidDate(input.to_string()))
}

/// Start of the given day in local time
pub fn local_midnight(date: NaiveDate) -> Result<DateTime<Local>> {
    date.and_time(NaiveTime::MIN)
        .and_local_timezone(Local)
        .earliest()
        .ok_or_else(|| DaysError::InvalidDate(date.format(DATE_FORMAT).to_string()))
}

/// Whole 24h periods elapsed between `from` and `now`, rounded toward zero
pub fn days_between(from: DateTime<Local>, now: DateTime<Local>) -> i64 {
    (now - from).num_days()
}

/// Local calendar day of a timestamp
pub fn day_of(timestamp: DateTime<Local>) -> NaiveDate {
    timestamp.date_naive()
}

/// 24-hour `HHMM` time of day
pub fn military_time(timestamp: DateTime<Local>) -> String {
    format!("{:02}{:02}", timestamp.hour(), timestamp.minute())
}
