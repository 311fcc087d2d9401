//! Date helpers for check dates.
//!
//! Check dates travel as ISO 8601 strings (YYYY-MM-DD) and print as
//! MM/DD/YYYY. Parsing is strict: out-of-range months and days are
//! rejected rather than rolled over.

use chrono::{Datelike, Local, NaiveDate, NaiveDateTime};
use shared::CurrentDateResponse;

/// Today's date in the local timezone as YYYY-MM-DD
pub fn today_local_iso() -> String {
    let today = Local::now().date_naive();
    format!("{:04}-{:02}-{:02}", today.year(), today.month(), today.day())
}

/// Parse a check date string, tolerating a trailing time component
pub fn parse_check_date(value: &str) -> Option<NaiveDate> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|datetime| datetime.date())
}

/// Format an ISO date string for check printing (MM/DD/YYYY).
///
/// Unparsable input yields the literal "Invalid Date" so the layout always
/// has something to show.
pub fn format_check_date(value: &str) -> String {
    match parse_check_date(value) {
        Some(date) => format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year()),
        None => "Invalid Date".to_string(),
    }
}

/// Validate that a date string is a real calendar date
pub fn is_valid_check_date(value: &str) -> bool {
    parse_check_date(value).is_some()
}

/// Current date information for form defaults
pub fn current_date_response() -> CurrentDateResponse {
    let today = Local::now().date_naive();
    CurrentDateResponse {
        month: today.month(),
        year: today.year() as u32,
        day: today.day(),
        formatted_date: format!("{:02}/{:02}/{:04}", today.month(), today.day(), today.year()),
        iso_date: today_local_iso(),
    }
}
