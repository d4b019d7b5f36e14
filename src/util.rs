use crate::error::{BugkingError, Result};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_day(input: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|e| BugkingError::InvalidDate {
        input: input.to_string(),
        reason: e.to_string(),
    })
}

/// `day` at `hour`:00:00. Hours past 23 clamp to 23.
pub fn at_hour(day: NaiveDate, hour: u32) -> NaiveDateTime {
    let time = NaiveTime::from_hms_opt(hour.min(23), 0, 0).unwrap_or_default();
    day.and_time(time)
}

/// ISO-8601 without fractional seconds, the form svn accepts inside `{...}`.
pub fn svn_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S").to_string()
}
