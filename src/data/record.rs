//! Article record type.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// One article's plotted data point.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Headline. Unique within a dataset.
    pub title: String,
    /// Horizontal coordinate.
    pub x: f64,
    /// Vertical coordinate.
    pub y: f64,
    /// Article link.
    pub url: String,
    /// Calendar date the article was published.
    pub publish_date: NaiveDate,
}

impl Record {
    /// Create a new record.
    pub fn new(
        title: impl Into<String>,
        x: f64,
        y: f64,
        url: impl Into<String>,
        publish_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            x,
            y,
            url: url.into(),
            publish_date,
        }
    }

    /// Long-form publish date, e.g. `Fri Jan 01 2021`.
    pub fn long_date(&self) -> String {
        self.publish_date.format("%a %b %d %Y").to_string()
    }

    /// Short publish date for table cells, e.g. `2021-01-01`.
    pub fn short_date(&self) -> String {
        self.publish_date.format("%Y-%m-%d").to_string()
    }
}

/// Parse a publish date cell.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps and `YYYY-MM-DD HH:MM:SS`.
/// Only the calendar date is kept.
pub fn parse_publish_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.date_naive());
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S")
        .map(|dt| dt.date())
        .ok()
}
