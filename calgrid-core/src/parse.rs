//! Parsing user-entered dates and times.

use chrono::{NaiveDate, NaiveTime};

use crate::error::{CalGridError, CalGridResult};

/// Parse YYYY-MM-DD
pub fn parse_date(s: &str) -> CalGridResult<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|_| CalGridError::DateParse(s.to_string()))
}

/// Parse HH:MM (24-hour), also accepting HH:MM:SS
pub fn parse_time(s: &str) -> CalGridResult<NaiveTime> {
    let s = s.trim();
    NaiveTime::parse_from_str(s, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(s, "%H:%M:%S"))
        .map_err(|_| CalGridError::TimeParse(s.to_string()))
}
