//! Timestamp parsing shared by the HTTP input and the acquisition feed.
//!
//! Observations arrive as ISO 8601 text that may or may not carry an offset.
//! Naive values are taken as UTC.

use crate::domain::error::DomainError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer};

const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, DomainError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        if let Some(naive) = date.and_hms_opt(0, 0, 0) {
            return Ok(naive.and_utc());
        }
    }
    Err(DomainError::InvalidInput(format!(
        "Invalid timestamp: {s}. Use ISO 8601 (YYYY-MM-DD[THH:MM:SS][offset])"
    )))
}

/// `deserialize_with` adapter for [`parse_timestamp`].
pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(serde::de::Error::custom)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone, Timelike};

    #[test]
    fn test_rfc3339_with_offset_is_normalised() {
        let dt = parse_timestamp("2022-10-01T12:00:00+02:00").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2022, 10, 1, 10, 0, 0).unwrap());
    }

    #[test]
    fn test_naive_datetime_is_utc() {
        let dt = parse_timestamp("2022-10-03T08:15:30.250").unwrap();
        assert_eq!(dt.hour(), 8);
        assert_eq!(dt.minute(), 15);
        assert_eq!(dt.timestamp_subsec_millis(), 250);
    }

    #[test]
    fn test_space_separator() {
        let dt = parse_timestamp("2022-10-03 08:15:30").unwrap();
        assert_eq!(dt.day(), 3);
    }

    #[test]
    fn test_bare_date_is_midnight() {
        let dt = parse_timestamp("2022-10-05").unwrap();
        assert_eq!(dt, Utc.with_ymd_and_hms(2022, 10, 5, 0, 0, 0).unwrap());
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            parse_timestamp("yesterday"),
            Err(DomainError::InvalidInput(_))
        ));
    }
}
