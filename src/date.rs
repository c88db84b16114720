use chrono::{Datelike, Local, NaiveDate};

/// Formats a date as `DD/MM/YYYY`, day and month zero-padded to width 2. The
/// year is written as-is, without padding or truncation.
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}/{:02}/{}", date.day(), date.month(), date.year())
}

/// The current local date as `DD/MM/YYYY`.
pub fn today() -> String {
    format_date(Local::now().date_naive())
}
