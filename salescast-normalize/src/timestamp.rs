//! Lenient timestamp parsing for payloads and archive records.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use salescast_core::errors::PayloadError;

/// Parse RFC 3339, or a naive ISO datetime/date which is taken as UTC.
/// The archive stamps records with naive local ISO strings.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, PayloadError> {
    let text = value.trim();
    if let Ok(ts) = DateTime::parse_from_rfc3339(text) {
        return Ok(ts.with_timezone(&Utc));
    }
    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(text, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(PayloadError::InvalidTimestamp {
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_rfc3339_with_offset() {
        let ts = parse_timestamp("2024-05-01T14:00:00+02:00").unwrap();
        assert_eq!(ts.hour(), 12);
    }

    #[test]
    fn test_naive_iso_with_fraction() {
        let ts = parse_timestamp("2024-05-01T12:34:56.123456").unwrap();
        assert_eq!((ts.day(), ts.minute(), ts.second()), (1, 34, 56));
    }

    #[test]
    fn test_plain_date() {
        let ts = parse_timestamp("2024-05-01").unwrap();
        assert_eq!(ts.hour(), 0);
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(PayloadError::InvalidTimestamp { .. })
        ));
    }
}
