//! Date and time utility functions
//!
//! Todos store their day and time as plain strings. This module owns the
//! fixed formats used to read them and the formatting of day headers.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Fixed storage format for a todo's day (e.g. `02/05/2024` is May 2nd)
pub const TODO_DATE_FORMAT: &str = "%d/%m/%Y";

/// Fixed storage format for a todo's time of day
pub const TODO_TIME_FORMAT: &str = "%H:%M";

/// Default format for day headers: "<Month> <Day>, <Year>"
pub const HEADER_DATE_FORMAT: &str = "%b %d, %Y";

/// Parse a todo date string in DD/MM/YYYY format to NaiveDate
pub fn parse_todo_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), TODO_DATE_FORMAT)
}

/// Parse a todo time string in HH:MM format to NaiveTime
pub fn parse_todo_time(time_str: &str) -> Result<NaiveTime, chrono::ParseError> {
    NaiveTime::parse_from_str(time_str.trim(), TODO_TIME_FORMAT)
}

/// Format a NaiveDate back to the todo storage format
pub fn format_todo_date(d: NaiveDate) -> String {
    d.format(TODO_DATE_FORMAT).to_string()
}

/// Format a day for a section header
///
/// # Arguments
/// * `date` - The calendar day of the bucket
/// * `format` - A chrono format string, usually [`HEADER_DATE_FORMAT`]
pub fn format_header_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

/// Resolve a naive local datetime to an instant in the local timezone.
///
/// Ambiguous times (DST fold) resolve to the earliest candidate; times that
/// do not exist locally (DST gap) fall back to reading them as UTC.
pub fn to_local(dt: NaiveDateTime) -> chrono::DateTime<Local> {
    Local
        .from_local_datetime(&dt)
        .earliest()
        .unwrap_or_else(|| Local.from_utc_datetime(&dt))
}
