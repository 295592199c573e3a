//! Frontmatter date parsing and long-form formatting.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%B %d, %Y", "%b %d, %Y"];

const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Errors that can occur when reading a frontmatter date.
#[derive(Debug, thiserror::Error)]
pub enum DateError {
    #[error("Invalid date in frontmatter: {0:?}")]
    Unparseable(String),
}

/// Parse a frontmatter date into a calendar date.
///
/// Date-times keep the calendar date of their own offset.
pub fn parse_date(value: &str) -> Result<NaiveDate, DateError> {
    let value = value.trim();

    if let Some(date) = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(value, format).ok())
    {
        return Ok(date);
    }

    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Ok(date_time.date_naive());
    }

    if let Some(date_time) = DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
    {
        return Ok(date_time.date());
    }

    if let Ok(date_time) = DateTime::parse_from_rfc2822(value) {
        return Ok(date_time.date_naive());
    }

    Err(DateError::Unparseable(value.to_string()))
}

/// Format a date like `Friday, January 1, 2021`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Parse and format a frontmatter date in one step.
pub fn long_date(value: &str) -> Result<String, DateError> {
    parse_date(value).map(format_long_date)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_iso_date() {
        assert_eq!(long_date("2021-01-01").unwrap(), "Friday, January 1, 2021");
    }

    #[test]
    fn accepts_common_forms() {
        let expected = "Monday, March 15, 2021";

        for value in [
            "2021-03-15",
            "2021/03/15",
            "2021-03-15T10:30:00Z",
            "2021-03-15T23:30:00-08:00",
            "2021-03-15 10:30:00",
            "2021-03-15 10:30",
            "Mon, 15 Mar 2021 10:30:00 +0000",
            "March 15, 2021",
            "Mar 15, 2021",
        ] {
            assert_eq!(long_date(value).unwrap(), expected, "input: {value}");
        }
    }

    #[test]
    fn single_digit_day_is_not_padded() {
        assert_eq!(long_date("2021-03-07").unwrap(), "Sunday, March 7, 2021");
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(long_date("not a date"), Err(DateError::Unparseable(_))));
        assert!(matches!(long_date("2021-02-30"), Err(DateError::Unparseable(_))));
    }
}
