//! Date formatting with Moment.js-style patterns

use chrono::{DateTime, TimeZone};

/// Moment tokens and their chrono equivalents, longest first within each unit
const MOMENT_TOKENS: [(&str, &str); 14] = [
    ("YYYY", "%Y"),
    ("YY", "%y"),
    ("MMMM", "%B"),
    ("MMM", "%b"),
    ("MM", "%m"),
    ("DDDD", "%j"),
    ("DD", "%d"),
    ("HH", "%H"),
    ("hh", "%I"),
    ("mm", "%M"),
    ("ss", "%S"),
    ("dddd", "%A"),
    ("ddd", "%a"),
    ("ZZ", "%z"),
];

/// Format a date using a Moment.js-compatible pattern
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM DD, YYYY") // -> "January 15, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format(&moment_to_chrono_format(format)).to_string()
}

/// Machine-readable date for `<time datetime>`
pub fn date_xml<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%Y-%m-%dT%H:%M:%S%:z").to_string()
}

fn moment_to_chrono_format(format: &str) -> String {
    MOMENT_TOKENS
        .iter()
        .fold(format.to_string(), |acc, (from, to)| acc.replace(from, to))
}
